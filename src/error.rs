use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("particle count must be at least 1")]
    ZeroParticles,

    #[error("base cycle must be a positive number of milliseconds, got {0}")]
    InvalidCycle(f64),
}

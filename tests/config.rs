use particle_wave::config::DEFAULT_PARTICLE_COUNT;
use particle_wave::{ConfigError, WaveConfig, BASE_SPEED};

#[test]
fn defaults() {
    let config = WaveConfig::default();
    assert_eq!(config.particle_count, DEFAULT_PARTICLE_COUNT);
    assert_eq!(config.base_cycle_ms, 20_000.0);
    assert_eq!(config.base_cycle_ms, BASE_SPEED);
    assert_eq!(config.seed, None);
    assert!(config.validate().is_ok());
}

#[test]
fn reads_camel_case_keys() {
    let config =
        WaveConfig::from_json(r#"{"particleCount": 3000, "baseCycleMs": 12500, "seed": 42}"#)
            .unwrap();
    assert_eq!(config.particle_count, 3000);
    assert_eq!(config.base_cycle_ms, 12_500.0);
    assert_eq!(config.seed, Some(42));
}

#[test]
fn missing_keys_fall_back_to_defaults() {
    let config = WaveConfig::from_json(r#"{"particleCount": 10}"#).unwrap();
    assert_eq!(config.particle_count, 10);
    assert_eq!(config.base_cycle_ms, BASE_SPEED);

    assert_eq!(WaveConfig::from_json("{}").unwrap(), WaveConfig::default());
}

#[test]
fn rejects_unknown_keys() {
    let err = WaveConfig::from_json(r#"{"particle_count": 10}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)), "{err}");
}

#[test]
fn rejects_malformed_json() {
    assert!(matches!(
        WaveConfig::from_json("{particleCount: 1"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn rejects_zero_particles() {
    let err = WaveConfig::from_json(r#"{"particleCount": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::ZeroParticles));
}

#[test]
fn rejects_non_positive_cycle() {
    for cycle in ["0", "-250", "-0.0"] {
        let src = format!(r#"{{"baseCycleMs": {cycle}}}"#);
        let err = WaveConfig::from_json(&src).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCycle(_)), "{cycle}: {err}");
    }

    let config = WaveConfig {
        base_cycle_ms: f64::INFINITY,
        ..WaveConfig::default()
    };
    assert!(matches!(config.validate(), Err(ConfigError::InvalidCycle(_))));
}

//! Host-side helper: `cargo run` builds the wasm package into `static/pkg`
//! and serves `static/` at http://127.0.0.1:8000.

use std::io;
use std::process::{Command, ExitCode};

const PORT: &str = "8000";

fn main() -> ExitCode {
    match serve() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn serve() -> io::Result<()> {
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            return Err(io::Error::other(
                "wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).",
            ));
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Serving whatever is already in static/pkg.");
        }
    }

    println!("Launching local server at http://127.0.0.1:{PORT} …");
    let status = Command::new("python3")
        .args(["-m", "http.server", PORT, "--directory", "static"])
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("http server exited with {status}")))
    }
}

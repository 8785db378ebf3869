//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg` and
//! serves `static/` over HTTP.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::env;
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context};

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = match env::var("WAVES_PORT") {
        Ok(port) => port
            .parse::<u16>()
            .with_context(|| format!("WAVES_PORT={port:?} is not a port number"))?,
        Err(_) => 8000,
    };

    log::info!("building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(st) => bail!("wasm-pack exited with {st}"),
        Err(_) => {
            log::warn!("wasm-pack not found in PATH; the site may serve stale artifacts");
        }
    }

    log::info!("serving http://127.0.0.1:{port} …");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()
        .context("failed to start http server")?;
    if !status.success() {
        bail!("http server exited with {status}");
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}

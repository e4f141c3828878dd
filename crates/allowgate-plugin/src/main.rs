//! allowgate dry-run harness.
//!
//! - Loads the host config (default `allowgate.yaml`, or the first argument)
//! - Builds and starts every configured plugin instance
//! - Reads `{"plugin": "...", "request": {...}}` lines from stdin and writes
//!   one JSON decision per line to stdout. Logs go to stderr.

use std::process::ExitCode;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{fmt, EnvFilter};

use allowgate_core::error::{AllowGateError, Result};
use allowgate_plugin::app_state::AppState;
use allowgate_plugin::plugin::PluginRegistry;
use allowgate_plugin::{config, harness};

const DEFAULT_CONFIG_PATH: &str = "allowgate.yaml";

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.kind().as_str(), error = %e, "allowgate failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());

    let cfg = config::load_from_file(&path)?;
    let registry = PluginRegistry::with_builtin();
    let state = AppState::new(cfg, &registry)?;
    state.start_all().await?;

    tracing::info!(%path, plugins = ?state.plugin_names(), "allowgate ready");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.map_err(io_err)? {
        let Some(mut out) = harness::check_line(&state, &line).await? else {
            continue;
        };
        out.push('\n');
        stdout.write_all(out.as_bytes()).await.map_err(io_err)?;
    }

    stdout.flush().await.map_err(io_err)
}

fn io_err(e: std::io::Error) -> AllowGateError {
    AllowGateError::Internal(format!("stdio failed: {e}"))
}

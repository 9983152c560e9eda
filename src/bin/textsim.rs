//! textsim -- standalone MCP text-similarity server.
//!
//! Usage: textsim [--window-size <n>] [--case-sensitive] [--no-spelling-errors]

use anyhow::{bail, Context};
use textsim::ServerConfig;

fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr so it does not interfere with MCP stdio.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = parse_args(std::env::args().skip(1))?;
    textsim::run_mcp_server(config)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<ServerConfig> {
    let mut config = ServerConfig::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--window-size" => {
                let value = args.next().context("--window-size needs a value")?;
                let size: usize = value
                    .parse()
                    .with_context(|| format!("invalid --window-size: {value}"))?;
                if size == 0 {
                    bail!("--window-size must be at least 1");
                }
                config.fuzzy.window_size = size;
            }
            "--case-sensitive" => config.grading.case_sensitive = true,
            "--no-spelling-errors" => config.grading.accept_spelling_errors = false,
            other => bail!("unknown argument: {other}"),
        }
    }

    Ok(config)
}

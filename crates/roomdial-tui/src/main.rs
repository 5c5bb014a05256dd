//! Roomdial TUI entry point.

use std::path::PathBuf;

use clap::Parser;
use roomdial_app::Runtime;
use roomdial_tui::{SandboxClient, TerminalDriver, sandbox};

/// Roomdial connection setup screen
#[derive(Parser, Debug)]
#[command(name = "roomdial")]
#[command(about = "Connection setup screen for Roomdial rooms")]
#[command(version)]
struct Args {
    /// Sandbox ID sent to the credential service
    #[arg(long, default_value = sandbox::DEFAULT_SANDBOX_ID)]
    sandbox_id: String,

    /// Sandbox credential endpoint
    #[arg(long, default_value = sandbox::DEFAULT_ENDPOINT)]
    sandbox_url: String,

    /// Append logs to this file (stdout belongs to the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let file = std::fs::OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    let sandbox = SandboxClient::new(args.sandbox_url, args.sandbox_id)?;
    let driver = TerminalDriver::new(sandbox)?;

    let mut runtime = Runtime::new(driver);
    Ok(runtime.run().await?)
}

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;
use status_agent::config::loader::load_settings;
use status_agent::credential::Credential;
use status_agent::driver::{FailurePolicy, Rotation};
use status_agent::updater::StatusUpdater;
use status_agent::utils::constants::{DEFAULT_ITER_SECONDS, MAX_STATUS_LENGTH};
use status_agent::utils::logging;
use status_agent::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional YAML settings file (endpoint/user-agent/logging overrides).
    #[arg(long, env = "STATUS_AGENT_CONFIG")]
    config: Option<String>,

    /// Path to file containing the Discord authorization token.
    #[arg(long = "token-file", env = "TOKEN_FILE")]
    token_file: PathBuf,

    #[command(flatten)]
    status_text: StatusTextArgs,

    /// Length to chunk long custom status text to.
    #[arg(
        short = 'c',
        long,
        default_value_t = MAX_STATUS_LENGTH,
        value_parser = clap::value_parser!(u64).range(1..=MAX_STATUS_LENGTH)
    )]
    chunk_length: u64,

    /// Time (in seconds) to wait between iterating through the status text.
    /// Doubles as the expiry offset of each chunk.
    #[arg(short = 't', long = "iter-time", default_value_t = DEFAULT_ITER_SECONDS)]
    iter_time: u64,

    /// Iterate through the custom status text infinitely.
    #[arg(short = 'l', long = "loop")]
    repeat: bool,

    /// Abort the run on the first failed update instead of moving on.
    #[arg(long)]
    halt_on_error: bool,

    #[arg(long, env = "LOG_LEVEL", value_enum)]
    log_level: Option<LogLevel>,
}

#[derive(clap::Args)]
#[group(required = true, multiple = false)]
struct StatusTextArgs {
    /// Custom status text to iterate through.
    #[arg(short = 's', long = "status-text")]
    status_text: Option<String>,

    /// Path to file containing the status text to iterate through.
    #[arg(long = "status-text-file")]
    status_text_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Parse CLI / env arguments
    // -------------------------------

    let args = Args::parse();

    // -------------------------------
    // 2. Load optional YAML settings and init logging
    // -------------------------------

    let settings = load_settings(args.config.as_deref()).await?;
    logging::run(&settings, args.log_level)?;

    // -------------------------------
    // 3. Load credential and status text
    // -------------------------------

    let credential = Credential::from_file(&args.token_file).await?;

    let status_text = match (&args.status_text.status_text, &args.status_text.status_text_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("reading status text file '{}': {}", path.display(), e))?,
        (None, None) => unreachable!("clap group requires one status text source"),
    };

    // -------------------------------
    // 4. Build updater and rotation driver
    // -------------------------------

    let updater = StatusUpdater::new(settings.endpoint.clone(), settings.user_agent.clone())?;

    let rotation = Rotation {
        updater,
        chunk_length: args.chunk_length as usize,
        interval: Duration::from_secs(args.iter_time),
        repeat: args.repeat,
        policy: if args.halt_on_error {
            FailurePolicy::Halt
        } else {
            FailurePolicy::Continue
        },
    };

    // -------------------------------
    // 5. Run the rotation
    // -------------------------------

    info!("Status rotation starting...");
    rotation.run(&credential, &status_text).await?;

    Ok(())
}

mod batch;
mod config;
mod repl;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{CliCfg, ENV_PREFIX, OutputFormat};

#[derive(Parser)]
#[command(name = "eventvibe", version, about = "Rule-based event enrichment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enrich JSON-lines events from a file or stdin.
    Enrich {
        /// Input file; reads stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Indent output JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Interactive enrichment shell.
    Shell,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = CliCfg::from_env();

    // Tracing: write to file when RUST_LOG is set so stdout carries only profiles
    if std::env::var("RUST_LOG").is_ok() {
        let file = std::fs::File::create(&cfg.log_file)
            .with_context(|| format!("failed to create log file {}", cfg.log_file.display()))?;
        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(fmt::layer().json().with_target(true).with_writer(file))
            .init();
    }
    for key in &cfg.rejected {
        let var = format!("{ENV_PREFIX}{}", key.to_uppercase());
        tracing::warn!(%var, "invalid config value, using default");
        eprintln!("warning: ignoring invalid {var}, using default");
    }

    let token = CancellationToken::new();
    cancel_on_ctrl_c(token.clone());

    match cli.command {
        Command::Enrich { input, pretty } => {
            if pretty {
                cfg.output = OutputFormat::Pretty;
            }
            let stats = batch::run(input.as_deref(), cfg.output, token).await?;
            tracing::info!(
                enriched = stats.enriched,
                rejected = stats.rejected,
                "batch finished"
            );
        }
        Command::Shell => repl::run(&cfg, token).await?,
    }

    Ok(())
}

/// Cancel `token` on the first Ctrl-C; a second one exits at once.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_err() {
            return;
        }
        tracing::info!("interrupt received, stopping");
        token.cancel();
        if tokio::signal::ctrl_c().await.is_ok() {
            std::process::exit(130);
        }
    });
}

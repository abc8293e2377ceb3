//! Hindsight CLI — browse chat history from a local editor's state stores.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hindsight_config::{CliOverrides, HindsightConfig};
use hindsight_engine::Extractor;
use hindsight_store::StoreLocator;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hindsight", version, about = "Browse chat history from editor state stores")]
struct Cli {
    /// Workspace-storage root (overrides HINDSIGHT_STORE_ROOT and config)
    #[arg(long, global = true)]
    store_root: Option<PathBuf>,

    /// Enable verbose/debug logging
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List workspace ids found under the store root
    Workspaces,
    /// Extract a workspace's chat and composer history as JSON
    Show {
        /// Workspace id (directory name under the store root)
        workspace_id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let config = HindsightConfig::load(CliOverrides {
        store_root: cli.store_root,
    })
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    let locator =
        StoreLocator::new(config.store_root.clone()).map_err(|e| anyhow::anyhow!("{e}"))?;

    match cli.command {
        Command::Workspaces => {
            let ids = locator.list_workspaces().await.with_context(|| {
                format!("Failed to list workspaces under {}", config.store_root.display())
            })?;
            for id in ids {
                println!("{id}");
            }
        }
        Command::Show { workspace_id } => {
            let extractor = Extractor::new(locator);
            let data = extractor.extract(&workspace_id).await?;
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
    }

    Ok(())
}

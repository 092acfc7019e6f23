mod config;
mod error;
mod models;
mod notify;
mod sources;
mod store;
#[cfg(test)]
mod test_support;
mod watcher;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use config::{Config, DEFAULT_STATE_FILE, LOCATION_IDS};
use notify::{DryRunNotifier, UltraMsgNotifier};
use sources::BayutClient;
use store::SeenStore;
use tracing::info;
use tracing_subscriber::EnvFilter;
use watcher::Watcher;

#[derive(Parser)]
#[command(name = "listing-watch", about = "Notify on new Bayut listings over WhatsApp")]
struct Args {
    /// File holding ids of listings already notified
    #[arg(long, env = "WATCH_STATE_FILE", default_value = DEFAULT_STATE_FILE)]
    state_file: PathBuf,

    /// Log messages instead of sending them and leave the state file untouched
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let config = Config::from_env().context("Invalid configuration")?;

    info!("🏠 Listing Watch - Bayut → WhatsApp");

    let source = BayutClient::new(&config)?;
    let store = SeenStore::new(&args.state_file);
    info!("Using state file {}", store.path().display());

    let summary = if args.dry_run {
        info!("Dry run: nothing will be sent or saved");
        Watcher::new(&source, &DryRunNotifier, &store, &LOCATION_IDS)
            .without_persist()
            .run()
            .await?
    } else {
        let notifier = UltraMsgNotifier::new(&config)?;
        Watcher::new(&source, &notifier, &store, &LOCATION_IDS)
            .run()
            .await?
    };

    if summary.failed > 0 {
        info!("{} alerts will be retried on the next run", summary.failed);
    }

    Ok(())
}

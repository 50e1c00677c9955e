use anyhow::{Context, Result};
use clap::Parser;
use formstore::app::{handler, registry, state};
use formstore::app::event::AppEvent;
use formstore::{config, logging, script};
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "formstore")]
#[command(version)]
#[command(about = "Replay form actions through the application store and print the result")]
struct Cli {
    /// Action script to replay (TOML, one [[step]] per action)
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Config file (default: <config dir>/formstore/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    init_config: bool,

    /// List the available action creators and exit
    #[arg(long)]
    list_actions: bool,

    /// Print the dispatch history after the final state
    #[arg(long)]
    history: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(config::config_path);
    if cli.init_config {
        config::save_config(&config::AppConfig::default(), &config_path)?;
        println!("Wrote default config to {}", config_path.display());
        return Ok(());
    }

    let cfg = config::load_config_from(&config_path)?;
    logging::init(&cfg.logging, cli.verbose);

    let creators = registry::actions().context("Failed to build action creators")?;
    if cli.list_actions {
        for name in creators.names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let script = match &cli.script {
        Some(path) => script::load(path)?,
        None => script::Script::default(),
    };

    let mut store = state::create_store(&cfg.store);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    script.enqueue(&event_tx)?;
    drop(event_tx);

    let summary = handler::run(&mut store, &creators, &mut event_rx, &cfg.dispatch).await?;

    info!(
        dispatched = summary.dispatched,
        skipped = summary.skipped,
        total = store.dispatch_count(),
        "replay complete"
    );

    let rendered = serde_json::to_string_pretty(store.state()).context("Failed to render state")?;
    println!("{}", rendered);

    if cli.history {
        for record in store.history() {
            let changed = if record.changed.is_empty() {
                "-".to_string()
            } else {
                record.changed.join(",")
            };
            println!(
                "{:>4} {} {:<24} {}",
                record.sequence, record.timestamp, record.kind, changed
            );
        }
    }

    Ok(())
}

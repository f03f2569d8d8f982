//! House game client binary.
//!
//! Composition root: loads the catalogs, starts the runtime that owns the
//! house, and runs a single player session over stdin/stdout.
//!
//! ```bash
//! cargo run -p house-client -- --data-dir ./data/
//! ```

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;

use house_content::ContentFactory;
use house_runtime::{RawTransport, Runtime, RuntimeConfig, Session, Transport};

use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _log_guard = logging::setup_logging(cli.log_dir.as_deref())?;

    tracing::info!("Starting house client");
    tracing::info!("Data directory: {}", cli.data_dir.display());

    // 1. Load content; any failure here is fatal
    let factory = ContentFactory::new(&cli.data_dir);
    let house = factory
        .build_house()
        .context("Could not load house data")?;
    let game_config = factory.load_config().context("Could not load game config")?;

    // 2. Start the runtime
    let config = RuntimeConfig::from_env().with_game_config(game_config);
    let runtime = Runtime::builder().config(config).house(house).build()?;
    let handle = runtime.handle();

    let summary = handle.summary().await?;
    tracing::info!(
        rooms = summary.rooms,
        mob_classes = summary.mob_classes,
        "Runtime started"
    );

    // 3. Serve the terminal
    let mut transport = RawTransport::new(tokio::io::stdin(), tokio::io::stdout());
    transport
        .write_message(&format!(
            "You are in a house with {} rooms and {} kinds of creature. Type \"help\" for commands.",
            summary.rooms, summary.mob_classes
        ))
        .await?;

    let mut session = Session::new(handle, transport);
    session.run().await?;
    drop(session);

    runtime.shutdown().await?;
    tracing::info!("Client shutdown complete");
    Ok(())
}

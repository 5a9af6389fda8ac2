use anyhow::{Context, Result};
use clap::Parser;
use order_queue::{
    cli::{Cli, run},
    config::myconfig::Config,
    state::AppState,
};
use shared::utils::init_logger;
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::init().context("Failed to load configuration")?;
    if let Some(file) = cli.file.clone() {
        config.order_file = file;
    }

    let _log_guard = init_logger("order-queue", config.dev_mode, config.enable_file_log);

    let state = AppState::new(config);
    info!("🚀 Order queue ready: {state:?}");

    run(cli.command, cli.json, &state).await.inspect_err(|e| {
        error!("❌ Command failed: {e:#}");
    })
}

//! Wallet Tracker - terminal dashboard for a Solana wallet's recent activity
//!
//! ## Usage
//!
//! ```bash
//! cargo run --release --bin wallet_tracker                       # interactive
//! cargo run --release --bin wallet_tracker -- <ADDRESS>          # interactive, pre-searched
//! cargo run --release --bin wallet_tracker -- <ADDRESS> --json   # one-shot JSON report
//! ```
//!
//! ## Environment Variables
//!
//! - WALLET_API_URL - Wallet API base URL (default: http://localhost:3004)
//! - REQUEST_TIMEOUT_SECS - HTTP timeout in seconds (default: 10)
//! - SERIES_INPUT_ORDER - newest_first (default) or unordered
//! - RUST_LOG - Logging level (optional, default: info)

use {
    std::{env, sync::Arc},
    walletflow::{
        address::parse_address, config::Config, series::SeriesBuilder, ui, view::SearchState,
        ActivitySource, WalletApiClient, WalletView,
    },
};

struct Args {
    address: Option<String>,
    json: bool,
}

fn parse_args() -> Args {
    let mut address = None;
    let mut json = false;
    for arg in env::args().skip(1) {
        if arg == "--json" {
            json = true;
        } else if address.is_none() {
            address = Some(arg);
        }
    }
    Args { address, json }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let config = Config::from_env()?;

    // Logs go to stderr; the UI draws on an alternate screen
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.rust_log))
        .target(env_logger::Target::Stderr)
        .init();

    let args = parse_args();

    log::info!("🚀 Starting Wallet Tracker...");
    log::info!("📊 Configuration:");
    log::info!("   WALLET_API_URL: {}", config.api_base_url);
    log::info!("   Request timeout: {:?}", config.request_timeout);
    log::info!("   Series input order: {:?}", config.series_order);

    let client = Arc::new(WalletApiClient::new(&config.api_base_url, config.request_timeout)?);
    let series = SeriesBuilder::new(config.series_order);

    if args.json {
        let address = parse_address(args.address.as_deref().unwrap_or_default())?;
        let activities = client.fetch_activities(&address).await?;
        let view = WalletView::build(&address, &activities, &series);
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if let Err(e) = ui::run_ui(client, SearchState::new(series), args.address).await {
        log::error!("UI error: {}", e);
        return Err(e);
    }

    log::info!("UI exited");
    Ok(())
}

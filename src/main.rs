use anyhow::Result;
use clap::Parser;

use review_loadtest::cli::{Cli, Scenario};
use review_loadtest::scenarios;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    tracing::info!("Review Service Load Test Starting...");
    tracing::info!("Target: {}", cli.base_url);
    tracing::info!("Duration: {}s", cli.duration);
    tracing::info!("Client Profile: {}", cli.client_profile);
    if cli.strict {
        tracing::info!("Strict mode: duplicate-identifier rejections count as failures");
    }

    // Run the selected scenario
    match cli.scenario.clone() {
        Scenario::SustainedLoad(args) => {
            tracing::info!("Running Sustained Load scenario");
            tracing::info!("  Rate: {}/sec", args.rate);
            scenarios::sustained_load::run(cli, args).await?;
        }
        Scenario::VirtualUsers(args) => {
            tracing::info!("Running Virtual Users scenario");
            tracing::info!("  Users: {}", args.users);
            tracing::info!("  Pacing: {}ms", args.pacing_ms);
            scenarios::virtual_users::run(cli, args).await?;
        }
    }

    tracing::info!("Load test complete");

    Ok(())
}

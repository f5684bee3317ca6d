//! fpsync - move reviewed false positives into disposition statuses on a
//! Code Dx server

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod sync;

use cli::Cli;
use client::CodeDxClient;
use config::Config;
use error::Result;
use sync::DenyAll;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    // Client diagnostics are warnings; keep them visible by default.
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let config = Config::load_from(&cli.config)?;
    let client = CodeDxClient::new(&config.codedx)?;

    // The shipped authorization rule denies everything; swap in a real rule
    // set here when one exists for the deployment.
    let report = sync::run(&client, &cli.proj, &config.fpmarkup, &DenyAll).await?;
    log::info!(
        "project {}: {} authorized, {} unauthorized",
        report.project_id,
        report.authorized,
        report.unauthorized
    );

    Ok(())
}

// src/main.rs — voicedial entry point

use clap::Parser;

use voicedial::cli::{Cli, Commands};
use voicedial::infra::config::Config;
use voicedial::infra::logger;

#[tokio::main]
async fn main() {
    // Initialize logging (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load config (falls back to defaults if no config.toml)
    let config = if let Some(ref path) = cli.config {
        Config::load_from(std::path::Path::new(path))?
    } else {
        Config::load()?
    };

    match cli.command {
        Commands::Call { phone, agent } => voicedial::cli::call::run_call(&phone, agent, &config).await,
        Commands::Agents => {
            voicedial::cli::agents::list_agents(&config);
            Ok(())
        }
    }
}

mod cli;

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chatsearch::{create_router, serve, ChatOutcome, Container};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Azure OpenAI settings conventionally live in .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let container = Container::new(cli.container_config()).map_err(|e| {
        error!("Failed to start the application: {:#}", e);
        e
    })?;

    match cli.command {
        Commands::Serve { host, port } => {
            info!(
                "Starting chat endpoint (mock_services={}, search_failure={})",
                cli.mock_services,
                container.search_failure()
            );
            let router = create_router(&container);
            serve(router, SocketAddr::new(host, port)).await?;
        }

        Commands::Ask { text } => {
            let use_case = container.chat_use_case();
            match use_case.execute(&text).await? {
                ChatOutcome::Answered(completion) => println!("{}", completion.text()),
                ChatOutcome::NoData => println!("No data"),
            }
        }
    }

    Ok(())
}

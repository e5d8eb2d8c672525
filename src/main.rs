mod cli;
mod error;
mod output;
mod provider;
mod template;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use template::StackDefinition;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .without_time()
        .init();

    match cli.command {
        Command::Deploy { template, interval } => {
            let definition = StackDefinition::load(&template)?;
            cli::deploy::run(definition, interval).await?;
        }

        Command::Status { template } => {
            let definition = StackDefinition::load(&template)?;
            cli::status::run(definition).await?;
        }

        Command::Delete { template, interval } => {
            let definition = StackDefinition::load(&template)?;
            cli::delete::run(definition, interval).await?;
        }

        Command::Events { template, limit } => {
            let definition = StackDefinition::load(&template)?;
            cli::events::run(definition, limit).await?;
        }

        Command::Validate { template } => {
            let definition = StackDefinition::load(&template)?;
            cli::validate::run(definition).await?;
        }
    }

    Ok(())
}

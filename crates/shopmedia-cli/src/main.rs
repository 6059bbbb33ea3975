mod input;
mod output;
mod runner;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "shopmedia")]
#[command(about = "Scrape social links, contact email and sample products from storefronts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scrape every shop listed in the input table and write the result table
    Run {
        /// Tab-delimited input with a header row containing the host column
        #[arg(long, default_value = "stores.csv")]
        input: PathBuf,

        /// Comma-delimited output, rewritten from scratch
        #[arg(long, default_value = "output.csv")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = shopmedia_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Run { input, output }) => {
            runner::run_from_files(&config, &input, &output).await?;
        }
        None => println!("nothing to do; try `shopmedia run --input stores.csv`"),
    }

    Ok(())
}

#[cfg(test)]
mod tests;

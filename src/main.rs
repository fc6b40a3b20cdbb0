use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli {
    pub mod render;
    pub mod server;
}

/// cardapio - Weekly school menu links
#[derive(Parser)]
#[command(name = "cardapio")]
#[command(about = "Serves the weekly school menu links page", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Render the menu page once as static HTML
    Render {
        /// Day to render for, as YYYY-MM-DD (defaults to today, UTC)
        #[arg(long)]
        date: Option<String>,

        /// Output file (defaults to stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = cardapio::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    cardapio::observability::init_observability(
        "cardapio",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Render { date, output } => cli::render::render(config, date, output).await,
    }
}

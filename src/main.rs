use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use docuchat::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "docuchat")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Base URL of the backend API; falls back to DOCUCHAT_API_URL, then the local default
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Use in-process mock services instead of a live backend
    #[arg(long, global = true)]
    mock: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let container = Container::new(ContainerConfig {
        api_url: cli.api_url,
        mock: cli.mock,
    });
    let router = Router::new(&container);

    let output = router.route(cli.command).await?;
    println!("{output}");

    Ok(())
}

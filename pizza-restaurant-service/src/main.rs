use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub mod app;

#[derive(Parser)]
#[command(version, about = "Pizza restaurants HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply migrations and serve the HTTP API
    Serve {
        #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0:5555")]
        bind: String,
    },
    /// Apply migrations and replace all rows with sample data
    Seed,
}

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { bind } => app::serve::main(&bind).await,
        Commands::Seed => app::seed::main().await,
    }
}

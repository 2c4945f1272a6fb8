//! Protein Correlator - Main Server
//!
//! A protein similarity graph service backed by Neo4j.

use anyhow::Result;
use clap::{Parser, Subcommand};
use protein_correlator::correlator::{CorrelationQuery, CorrelatorError};
use protein_correlator::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "correlator")]
#[command(about = "Protein Correlation Graph Server")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the correlation server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Print the correlated entries for a protein
    Correlations {
        /// Protein entry to look up
        entry: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,protein_correlator=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::from_env()?;

    match cli.command {
        Commands::Serve { port } => {
            config.server_port = port;
            protein_correlator::start_server(config).await
        }
        Commands::Correlations { entry } => run_correlations(config, &entry).await,
    }
}

async fn run_correlations(config: Config, entry: &str) -> Result<()> {
    let state = AppState::new(config).await?;
    tracing::info!("Connected to Neo4j");

    let query = CorrelationQuery::new(state.neo4j.clone());

    match query.correlations_for(entry).await {
        Ok(correlations) => {
            let mut entries: Vec<String> = correlations.into_iter().collect();
            entries.sort();
            tracing::info!("{} correlated proteins for {}", entries.len(), entry);
            for e in entries {
                println!("{}", e);
            }
            Ok(())
        }
        Err(CorrelatorError::NotFound(_)) => {
            anyhow::bail!("no protein found with entry '{}'", entry)
        }
        Err(e) => Err(e.into()),
    }
}

// CLI module - process entry commands

use clap::{Parser, Subcommand};

use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseProvider};

/// Itemstash CLI
#[derive(Parser, Debug)]
#[command(name = "itemstash")]
#[command(about = "Itemstash item service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve,

    /// Create the database schema and exit
    InitDb,
}

/// Create the schema without starting the server
pub async fn init_db(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!("Creating database schema...");

    let database = DatabaseProvider::connect(settings).await?;
    database.create_schema().await?;

    tracing::info!("Database schema created");

    Ok(())
}

/// Connect, prepare the schema and serve HTTP until the process is stopped
pub async fn serve(settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    use poem::{Server, listener::TcpListener};
    use std::sync::Arc;

    let app_data = Arc::new(AppData::init(settings).await?);
    let app = crate::api::build_routes(app_data);

    let address = settings.server_address();
    tracing::info!("Starting server on http://{}", address);
    tracing::info!("Swagger UI available at http://{}/swagger", address);

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}

/// Execute CLI command
pub async fn execute_command(
    cli: Cli,
    settings: &BootstrapSettings,
) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(settings).await,
        Commands::InitDb => init_db(settings).await,
    }
}

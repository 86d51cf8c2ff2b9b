/// User Registry server - CRUD API for registered users
use clap::{Parser, Subcommand};
use registry_core::NewUser;
use registry_server::{commands, config::ServerConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "registry-server")]
#[command(about = "User registry REST server", long_about = None)]
struct Cli {
    /// Configuration file path (defaults to ./config.toml when present)
    #[arg(short, long, global = true, env = "REGISTRY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Register a new user
    AddUser {
        /// National identity number
        #[arg(short, long)]
        dni: String,
        /// Display name
        #[arg(short, long)]
        name: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registry_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = ServerConfig::load_from(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => {
            registry_server::serve(&config).await?;
        }
        Commands::AddUser { dni, name } => {
            let user = commands::add_user(&config, NewUser::new(dni, name)).await?;
            println!("Created user {} ({}, {})", user.id, user.dni, user.name);
        }
        Commands::ListUsers => {
            let users = commands::list_users(&config).await?;
            println!("Users:");
            for user in users {
                println!("  {} - {} - {}", user.id, user.dni, user.name);
            }
        }
    }

    Ok(())
}

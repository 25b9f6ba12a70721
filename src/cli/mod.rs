pub mod error;

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::{Config, StoreKind, get_db_path};
use crate::db::{Database, KvDatabase, SqliteStore};
use crate::server::{init_tracing, serve_http, serve_stdio};

pub use error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "planner")]
#[command(author, version, about = "Project and todo planner MCP server", long_about = None)]
pub struct Cli {
    /// Storage backend
    #[arg(long, global = true, value_enum, env = "PLANNER_STORE", default_value_t = StoreKind::Sqlite)]
    pub store: StoreKind,

    /// Database file path (defaults to XDG data directory: ~/.local/share/planner/planner.db)
    #[arg(long, global = true, env = "PLANNER_DB")]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve MCP over Streamable HTTP at /mcp
    Serve {
        /// Host address to bind to
        #[arg(long, env = "PLANNER_HOST", default_value = "127.0.0.1")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PLANNER_PORT", default_value = "3000")]
        port: u16,
    },
    /// Serve MCP over stdin/stdout
    Stdio,
}

impl Cli {
    /// Resolve flags into a configuration.
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        let (host, port) = match self.command {
            Commands::Serve { host, port } => (host, port),
            Commands::Stdio => (defaults.host, defaults.port),
        };

        Config {
            host,
            port,
            store: self.store,
            db_path: self.db.clone().unwrap_or_else(get_db_path),
        }
    }
}

pub async fn run() -> CliResult<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = cli.config();
    match config.store {
        StoreKind::Memory => {
            info!("Using in-memory store");
            dispatch(KvDatabase::in_memory(), &cli.command, &config).await
        }
        StoreKind::Sqlite => {
            info!("Opening database at {:?}", config.db_path);
            if let Some(parent) = config.db_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let store = SqliteStore::open(&config.db_path).await?;
            dispatch(KvDatabase::new(store), &cli.command, &config).await
        }
    }
}

async fn dispatch<D: Database + 'static>(
    db: D,
    command: &Commands,
    config: &Config,
) -> CliResult<()> {
    db.migrate().await?;
    let db = Arc::new(db);

    match command {
        Commands::Serve { .. } => {
            serve_http(db, SocketAddr::new(config.host, config.port)).await?
        }
        Commands::Stdio => serve_stdio(db).await?,
    }
    Ok(())
}

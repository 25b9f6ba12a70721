//! Runtime configuration and XDG path resolution.

use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use clap::ValueEnum;

/// Name of the data directory under the XDG data home.
const APP_DIR: &str = "planner";

/// Which key-value backend holds the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StoreKind {
    /// Process memory; everything is lost on exit.
    Memory,
    /// A SQLite database file.
    #[default]
    Sqlite,
}

/// Resolved server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host address to bind to (HTTP transport)
    pub host: IpAddr,
    /// Port to listen on (HTTP transport)
    pub port: u16,
    pub store: StoreKind,
    /// Database file, used when `store` is `Sqlite`
    pub db_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 3000,
            store: StoreKind::default(),
            db_path: get_db_path(),
        }
    }
}

/// XDG-compliant data directory: `$XDG_DATA_HOME/planner`, falling back to
/// `~/.local/share/planner`, or `./planner` when neither is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|home| PathBuf::from(home).join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_home.join(APP_DIR)
}

/// Default database file path (`<data dir>/planner.db`).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("planner.db")
}

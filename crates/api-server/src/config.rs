//! Server configuration from the environment

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATA_DIR: &str = ".todo-data";
const DEFAULT_PORT: u16 = 9000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub data_dir: PathBuf,
    pub port: u16,
}

impl ServerConfig {
    /// Read `TODO_DATA_DIR` and `TODO_PORT`, falling back to defaults
    pub fn from_env() -> Self {
        let data_dir = std::env::var("TODO_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        let port = std::env::var("TODO_PORT")
            .ok()
            .and_then(|raw| parse_port(&raw))
            .unwrap_or(DEFAULT_PORT);

        Self { data_dir, port }
    }

    /// Bind on all interfaces so both localhost and 127.0.0.1 work
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn parse_port(raw: &str) -> Option<u16> {
    raw.trim().parse().ok()
}

//! Command-line and environment configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use clap::Parser;

/// Archive file read when nothing else is configured
pub const DEFAULT_DATASET: &str = "Thesis, Antithesis, Synthesis, and Abstain Archive 1-3750 Fixed.json";

#[derive(Debug, Clone, Parser)]
#[command(name = "legion")]
#[command(about = "LEGION OS: Archivist Kernel - serves the agent roster and crucible analysis")]
#[command(version)]
pub struct Config {
    /// JSON dataset to load at startup
    #[arg(long, env = "LEGION_DATASET", default_value = DEFAULT_DATASET)]
    pub dataset: PathBuf,

    /// Address to bind
    #[arg(long, env = "LEGION_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "LEGION_PORT", default_value_t = 8000)]
    pub port: u16,
}

impl Config {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

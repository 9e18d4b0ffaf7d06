use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use clap::Parser;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_HOST: &str = "0.0.0.0";

/// Command line arguments, each with an environment fallback
#[derive(Parser, Debug)]
#[command(name = "tinywiki")]
#[command(about = "A minimal wiki server storing one text file per page")]
#[command(version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "TINYWIKI_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TINYWIKI_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory holding one `<title>.txt` file per page
    #[arg(short, long, env = "TINYWIKI_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Directory holding `edit.html` and `view.html`
    #[arg(short, long, env = "TINYWIKI_TEMPLATES_DIR", default_value = "tmpl")]
    pub templates_dir: PathBuf,
}

/// Application configuration and constants
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: Arc<PathBuf>,
    pub templates_dir: Arc<PathBuf>,
    pub port: u16,
    pub host: String,
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self {
            data_dir: Arc::new(PathBuf::from("data")),
            templates_dir: Arc::new(PathBuf::from("tmpl")),
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
        }
    }

    /// Create configuration with custom values
    pub fn with_custom(
        data_dir: PathBuf,
        templates_dir: PathBuf,
        port: Option<u16>,
        host: Option<String>,
    ) -> Self {
        Self {
            data_dir: Arc::new(data_dir),
            templates_dir: Arc::new(templates_dir),
            port: port.unwrap_or(DEFAULT_PORT),
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        }
    }

    /// Build configuration from parsed command line arguments
    pub fn from_args(args: Args) -> Self {
        Self::with_custom(args.data_dir, args.templates_dir, Some(args.port), Some(args.host))
    }

    /// Get the socket address for binding. An unparsable host falls back to
    /// all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .host
            .parse::<IpAddr>()
            .unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED));
        SocketAddr::new(ip, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

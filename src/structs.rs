use clap::Parser;

#[derive(Parser, Debug, Default, Clone)]
#[command(author, version, about = "Serve pages and files over the Reticulum network", long_about = None)]
pub struct Cli {
    /// Path to a node config file (`.toml`, or key=value lines).
    pub node_config: Option<String>,
    /// Reticulum config path.
    #[arg(short = 'c', long = "config")]
    pub reticulum_config: Option<String>,
    /// Pages directory.
    #[arg(short = 'p', long)]
    pub pages_dir: Option<String>,
    /// Files directory.
    #[arg(short = 'f', long)]
    pub files_dir: Option<String>,
    /// Node display name.
    #[arg(short = 'n', long)]
    pub node_name: Option<String>,
    /// Announce interval in minutes, 0 disables announces.
    #[arg(short = 'a', long)]
    pub announce_interval: Option<u64>,
    /// Directory to store the node identity.
    #[arg(short = 'i', long)]
    pub identity_dir: Option<String>,
    /// Page refresh interval in seconds, 0 disables auto-refresh.
    #[arg(long)]
    pub page_refresh_interval: Option<u64>,
    /// File refresh interval in seconds, 0 disables auto-refresh.
    #[arg(long)]
    pub file_refresh_interval: Option<u64>,
    /// Logging level (off, trace, debug, info, warn, error).
    #[arg(short = 'l', long)]
    pub log_level: Option<String>,
    /// Seconds between statistics reports, 0 disables them.
    #[arg(long)]
    pub stats_interval: Option<u64>,
    /// Keep a live statistics JSON file at this path.
    #[arg(long)]
    pub stats_file: Option<String>,
    /// Save final statistics to this path on shutdown.
    #[arg(long)]
    pub save_stats: Option<String>,
    /// Seconds a dynamic page may run before it is killed.
    #[arg(long)]
    pub execution_timeout: Option<u64>,
    /// Create config.toml file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
}

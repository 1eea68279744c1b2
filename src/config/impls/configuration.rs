use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::executor_config::ExecutorConfig;
use crate::config::structs::node_config::NodeConfig;
use crate::config::structs::stats_config::StatsConfig;
use crate::structs::Cli;

pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

impl Default for NodeConfig {
    fn default() -> Self {
        NodeConfig {
            name: None,
            pages_dir: String::from("./pages"),
            files_dir: String::from("./files"),
            identity_dir: String::from("./node-config"),
            reticulum_config: None,
            announce_interval: 360,
            page_refresh_interval: 0,
            file_refresh_interval: 0,
        }
    }
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        ExecutorConfig {
            timeout: 30,
            max_concurrent: 16,
        }
    }
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            interval: 0,
            file: None,
            save: None,
            history_size: 100,
            hourly_retention: 168,
            live_flush_interval_ms: 1000,
            connection_timeout: 0,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            node_config: NodeConfig::default(),
            executor_config: ExecutorConfig::default(),
            stats_config: StatsConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    /// Parses the key=value node config format. Unknown keys and malformed
    /// lines are reported and skipped, never fatal.
    pub fn load_key_value(data: &str) -> Configuration {
        let mut config = Configuration::init();
        for (line_num, line) in data.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                eprintln!("[CONFIG] Invalid config line {}: {}", line_num + 1, line);
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            if !config.apply_key_value(key, value) {
                eprintln!("[CONFIG] Ignoring unknown config key on line {}: {}", line_num + 1, key);
            }
        }
        config
    }

    /// Returns `false` when the key is not a known node setting.
    pub fn apply_key_value(&mut self, key: &str, value: &str) -> bool {
        fn parse_u64(key: &str, value: &str, current: u64) -> u64 {
            match value.parse::<u64>() {
                Ok(parsed) => parsed,
                Err(_) => {
                    eprintln!("[CONFIG] Invalid integer value for {key}: {value}");
                    current
                }
            }
        }

        match key {
            "reticulum-config" => self.node_config.reticulum_config = Some(value.to_string()),
            "pages-dir" => self.node_config.pages_dir = value.to_string(),
            "files-dir" => self.node_config.files_dir = value.to_string(),
            "node-name" => self.node_config.name = Some(value.to_string()),
            "identity-dir" => self.node_config.identity_dir = value.to_string(),
            "announce-interval" => {
                self.node_config.announce_interval = parse_u64(key, value, self.node_config.announce_interval);
            }
            "page-refresh-interval" => {
                self.node_config.page_refresh_interval = parse_u64(key, value, self.node_config.page_refresh_interval);
            }
            "file-refresh-interval" => {
                self.node_config.file_refresh_interval = parse_u64(key, value, self.node_config.file_refresh_interval);
            }
            "log-level" => self.log_level = value.to_string(),
            "stats-interval" => {
                self.stats_config.interval = parse_u64(key, value, self.stats_config.interval);
            }
            "stats-file" => self.stats_config.file = Some(value.to_string()),
            "save-stats" => self.stats_config.save = Some(value.to_string()),
            "execution-timeout" => {
                self.executor_config.timeout = parse_u64(key, value, self.executor_config.timeout);
            }
            _ => return false
        }
        true
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)
            .map_err(|source| ConfigurationError::Read { path: PathBuf::from(path), source })?;
        let is_toml = Path::new(path)
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
        if !is_toml {
            return Ok(Self::load_key_value(&String::from_utf8_lossy(&data)));
        }
        Self::load(data.as_slice()).map_err(|source| ConfigurationError::Parse { path: PathBuf::from(path), source })
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        File::create(path)
            .and_then(|mut file| file.write_all(data.as_bytes()))
            .map_err(|source| ConfigurationError::Write { path: PathBuf::from(path), source })
    }

    /// Overrides file values with every flag given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(value) = &cli.reticulum_config { self.node_config.reticulum_config = Some(value.clone()); }
        if let Some(value) = &cli.pages_dir { self.node_config.pages_dir = value.clone(); }
        if let Some(value) = &cli.files_dir { self.node_config.files_dir = value.clone(); }
        if let Some(value) = &cli.node_name { self.node_config.name = Some(value.clone()); }
        if let Some(value) = cli.announce_interval { self.node_config.announce_interval = value; }
        if let Some(value) = &cli.identity_dir { self.node_config.identity_dir = value.clone(); }
        if let Some(value) = cli.page_refresh_interval { self.node_config.page_refresh_interval = value; }
        if let Some(value) = cli.file_refresh_interval { self.node_config.file_refresh_interval = value; }
        if let Some(value) = &cli.log_level { self.log_level = value.clone(); }
        if let Some(value) = cli.stats_interval { self.stats_config.interval = value; }
        if let Some(value) = &cli.stats_file { self.stats_config.file = Some(value.clone()); }
        if let Some(value) = &cli.save_stats { self.stats_config.save = Some(value.clone()); }
        if let Some(value) = cli.execution_timeout { self.executor_config.timeout = value; }
    }

    pub fn load_from_cli(cli: &Cli) -> Result<Configuration, ConfigurationError> {
        let mut config = Configuration::init();
        let path = match &cli.node_config {
            Some(path) => Some(path.clone()),
            None if cli.create_config || Path::new(DEFAULT_CONFIG_FILE).exists() => Some(String::from(DEFAULT_CONFIG_FILE)),
            None => None
        };

        if let Some(path) = path {
            match Configuration::load_file(&path) {
                Ok(c) => { config = c; }
                Err(error) => {
                    eprintln!("[CONFIG] {error}");
                    if !cli.create_config {
                        return Err(ConfigurationError::Unusable { path: PathBuf::from(path) });
                    }
                    eprintln!("[CONFIG] Creating {DEFAULT_CONFIG_FILE}...");
                    Configuration::save_file(DEFAULT_CONFIG_FILE, toml::to_string(&config)?)?;
                    return Err(ConfigurationError::Created { path: PathBuf::from(DEFAULT_CONFIG_FILE) });
                }
            }
        }

        config.apply_cli(cli);

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let mut check_map = vec![
            ("[LOG] Level", self.log_level.as_str(), r"(?i)^(off|trace|debug|info|warn|warning|error|critical)$"),
            ("[NODE] Pages directory", self.node_config.pages_dir.as_str(), r"^\S.*$"),
            ("[NODE] Files directory", self.node_config.files_dir.as_str(), r"^\S.*$"),
            ("[NODE] Identity directory", self.node_config.identity_dir.as_str(), r"^\S.*$"),
        ];
        if let Some(name) = &self.node_config.name {
            check_map.push(("[NODE] Name", name.as_str(), r"^[^\p{Cc}]{1,128}$"));
        }

        for (field, value, pattern) in check_map {
            Self::validate_value(field, value, pattern)?;
        }

        if self.executor_config.timeout == 0 {
            return Err(ConfigurationError::OutOfRange("Execution timeout must be at least one second"));
        }
        if self.executor_config.max_concurrent == 0 {
            return Err(ConfigurationError::OutOfRange("At least one concurrent execution must be allowed"));
        }
        if self.stats_config.history_size == 0 || self.stats_config.hourly_retention == 0 {
            return Err(ConfigurationError::OutOfRange("Stats history and hourly retention must be positive"));
        }
        if self.stats_config.live_flush_interval_ms == 0 {
            return Err(ConfigurationError::OutOfRange("Live stats flush interval must be positive"));
        }
        Ok(())
    }

    pub fn validate_value(field: &'static str, value: &str, pattern: &'static str) -> Result<(), ConfigurationError>
    {
        let regex_check = Regex::new(pattern)
            .map_err(|source| ConfigurationError::InvalidCheck { field, source })?;
        if !regex_check.is_match(value) {
            return Err(ConfigurationError::InvalidValue { field, value: value.to_string(), pattern });
        }
        Ok(())
    }
}

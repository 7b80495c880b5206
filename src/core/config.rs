use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

/// Which standalone process a configuration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    FileStorage,
    Payment,
}

impl Service {
    pub fn name(self) -> &'static str {
        match self {
            Service::FileStorage => "file-storage",
            Service::Payment => "payment-service",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Service::FileStorage => 3002,
            Service::Payment => 3003,
        }
    }

    /// Config file looked up in the working directory when no path is given
    pub fn default_config_file(self) -> String {
        format!("{}.toml", self.name())
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub upload: UploadConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    /// Falls back to the service's well-known port when unset
    pub port: Option<u16>,
    #[serde(default = "default_num_threads")]
    pub num_threads: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    /// Prefix of the synthetic access URL handed back for an upload
    #[serde(default = "default_public_base_path")]
    pub public_base_path: String,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: None,
            num_threads: default_num_threads(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            console: default_console(),
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            public_base_path: default_public_base_path(),
            max_body_bytes: default_max_body_bytes(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_num_threads() -> usize {
    num_cpus::get()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

fn default_public_base_path() -> String {
    "/files".to_string()
}

fn default_max_body_bytes() -> usize {
    10 * 1024 * 1024 // 10 MiB
}

impl ServerConfig {
    pub fn bind_address(&self, service: Service) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(service.default_port()))
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(service: Service, path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(service, &content)
    }

    pub fn from_toml(service: Service, content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .context("Failed to parse config file")?;

        config.validate(service)?;

        Ok(config)
    }

    /// Resolve the configuration for a service from the working directory
    pub fn load(service: Service, explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
        Self::load_from(service, explicit, &cwd)
    }

    /// An explicit path must exist. Without one, `<service>.toml` in `dir`
    /// is used if present, otherwise built-in defaults.
    pub fn load_from(service: Service, explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(service, path);
        }

        let fallback = dir.join(service.default_config_file());
        if fallback.exists() {
            return Self::from_file(service, &fallback);
        }

        let config = Config::default();
        config.validate(service)?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// `[upload]` is only checked for the file-storage service.
    pub fn validate(&self, service: Service) -> Result<()> {
        if self.server.host.trim().is_empty() {
            bail!("Server host must not be empty");
        }

        if let Some(port) = self.server.port {
            if port == 0 {
                bail!("Server port must be greater than 0");
            }
        }

        if self.server.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        if service == Service::FileStorage {
            if !self.upload.public_base_path.starts_with('/') {
                bail!(
                    "public_base_path '{}' must start with '/'",
                    self.upload.public_base_path
                );
            }

            if self.upload.max_body_bytes == 0 {
                bail!("max_body_bytes must be greater than 0");
            }
        }

        Ok(())
    }
}

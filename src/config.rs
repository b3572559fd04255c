use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub static_files: StaticFilesConfig,
    #[serde(default)]
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_host")]
    pub host: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_host() -> String {
    "0.0.0.0".into()
}

/// Dashboard assets served for any path not matched by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticFilesConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_static_dir")]
    pub dir: String,
}

impl Default for StaticFilesConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_static_dir(),
        }
    }
}

fn default_static_dir() -> String {
    "public".into()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Attach the permissive Content-Security-Policy header to every response.
    #[serde(default = "default_true")]
    pub content_security_policy: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            content_security_policy: true,
        }
    }
}

fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Reads `CONFIG_FILE` (default `config.toml`), then applies the `PORT` override.
    /// A missing default file falls back to built-in defaults; a missing explicit one is an error.
    pub fn load() -> anyhow::Result<Self> {
        let explicit = std::env::var("CONFIG_FILE").ok();
        let path = explicit.clone().unwrap_or_else(|| "config.toml".into());
        let mut config: AppConfig = match std::fs::read_to_string(&path) {
            Ok(s) => toml::from_str(&s)?,
            Err(e) if explicit.is_none() && e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path, "no config file, using defaults");
                AppConfig::default()
            }
            Err(e) => return Err(anyhow::anyhow!("reading {}: {}", path, e)),
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        // Blank PORT (e.g. `PORT=` in .env) means unset.
        if let Some(port) = std::env::var("PORT").ok().filter(|p| !p.trim().is_empty()) {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a port number, got {:?}: {}", port, e))?;
        }
        Ok(())
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.port > 0,
            "server.port must be between 1 and 65535, got {}",
            self.server.port
        );
        anyhow::ensure!(
            !self.server.host.trim().is_empty(),
            "server.host must be non-empty"
        );
        anyhow::ensure!(
            !self.static_files.enabled || !self.static_files.dir.trim().is_empty(),
            "static_files.dir must be non-empty when static_files.enabled"
        );
        Ok(())
    }
}

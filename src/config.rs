use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub polling: PollingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollingConfig {
    /// How often the console refetches the system stats snapshot.
    #[serde(default = "default_interval_ms")]
    pub stats_interval_ms: u64,
    /// How often the console refetches worker health.
    #[serde(default = "default_interval_ms")]
    pub health_interval_ms: u64,
    /// Stop refetching health once a worker is unreachable; resume is manual.
    #[serde(default = "default_pause_on_unavailable")]
    pub pause_on_unavailable: bool,
}

fn default_interval_ms() -> u64 {
    5000
}

fn default_pause_on_unavailable() -> bool {
    true
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            stats_interval_ms: default_interval_ms(),
            health_interval_ms: default_interval_ms(),
            pause_on_unavailable: default_pause_on_unavailable(),
        }
    }
}

impl AppConfig {
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("CONFIG_FILE").unwrap_or_else(|_| "config.toml".into());
        let s = std::fs::read_to_string(&path)?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.polling.stats_interval_ms > 0,
            "polling.stats_interval_ms must be > 0, got {}",
            self.polling.stats_interval_ms
        );
        anyhow::ensure!(
            self.polling.health_interval_ms > 0,
            "polling.health_interval_ms must be > 0, got {}",
            self.polling.health_interval_ms
        );
        Ok(())
    }
}

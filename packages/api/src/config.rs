/// Relay used when `RELAY_ENDPOINT` is not set.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Runtime settings for the contact relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub mode: AppMode,
    pub relay_endpoint: String,
    /// Sent as the hidden `access_key` form field.
    pub relay_access_key: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            mode: AppMode::Production,
            relay_endpoint: DEFAULT_RELAY_ENDPOINT.to_string(),
            relay_access_key: None,
        }
    }
}

impl SiteConfig {
    /// Build the config from any key lookup (process env, compile-time env, a test map).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            mode: AppMode::parse(&lookup("APP_MODE").unwrap_or_default()),
            relay_endpoint: non_empty("RELAY_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string()),
            relay_access_key: non_empty("RELAY_ACCESS_KEY"),
        }
    }

    /// Values captured when the bundle was built. The wasm client has no process env.
    pub fn compiled() -> Self {
        Self::from_lookup(|key| {
            let value = match key {
                "APP_MODE" => option_env!("APP_MODE"),
                "RELAY_ENDPOINT" => option_env!("RELAY_ENDPOINT"),
                "RELAY_ACCESS_KEY" => option_env!("RELAY_ACCESS_KEY"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    /// Settings that are required in production but absent.
    pub fn missing_production_keys(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.mode == AppMode::Production && self.relay_access_key.is_none() {
            missing.push("RELAY_ACCESS_KEY");
        }
        missing
    }
}

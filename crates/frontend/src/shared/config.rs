use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Requests still pending after this many milliseconds are aborted
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PricingConfig {
    /// AMC prices with a margin below this percentage count as low-margin
    #[serde(default = "default_low_margin_percent")]
    pub low_margin_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            low_margin_percent: default_low_margin_percent(),
        }
    }
}

fn default_timeout_ms() -> u32 {
    15_000
}

fn default_low_margin_percent() -> f64 {
    10.0
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5000/api"
timeout_ms = 15000

[pricing]
low_margin_percent = 10.0
"#;

/// Parse the embedded configuration and apply the build-time override.
///
/// `API_BASE_URL` set while compiling the bundle replaces `api.base_url`.
fn load_config(base_url_override: Option<&str>) -> AppConfig {
    let mut config: AppConfig = match toml::from_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Embedded config is invalid, using built-in values: {}", e);
            AppConfig {
                api: ApiConfig {
                    base_url: "http://localhost:5000/api".to_string(),
                    timeout_ms: default_timeout_ms(),
                },
                pricing: PricingConfig::default(),
            }
        }
    };
    if let Some(url) = base_url_override.map(str::trim).filter(|u| !u.is_empty()) {
        config.api.base_url = url.to_string();
    }
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    config
}

static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    let config = load_config(option_env!("API_BASE_URL"));
    log::info!("API base: {}", config.api.base_url);
    config
});

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
        assert_eq!(config.api.timeout_ms, 15000);
        assert_eq!(config.pricing.low_margin_percent, 10.0);
    }

    #[test]
    fn test_base_url_override() {
        let config = load_config(Some("https://erp.example.in/api/"));
        assert_eq!(config.api.base_url, "https://erp.example.in/api");

        let config = load_config(Some("  "));
        assert_eq!(config.api.base_url, "http://localhost:5000/api");
    }

    #[test]
    fn test_pricing_section_optional() {
        let config: AppConfig = toml::from_str("[api]\nbase_url = \"http://x\"").unwrap();
        assert_eq!(config.pricing.low_margin_percent, 10.0);
        assert_eq!(config.api.timeout_ms, 15000);
    }
}

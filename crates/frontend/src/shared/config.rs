use anyhow::Context;
use once_cell::sync::OnceCell;
use serde::Deserialize;

use contracts::dashboards::d400_sales_analytics::{
    DASHBOARD_TOP_CUSTOMERS, REPORT_TOP_CUSTOMERS, REPORT_TOP_REPRESENTATIVES,
};

/// localStorage key holding an optional TOML override
pub const CONFIG_OVERRIDE_KEY: &str = "app_config";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub analytics: AnalyticsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Full base URL, e.g. "https://sales.example.com". When absent the
    /// base is built from the page location and `port`
    #[serde(default)]
    pub base_url: Option<String>,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AnalyticsConfig {
    pub dashboard_top_customers: usize,
    pub report_top_customers: usize,
    pub report_top_representatives: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
port = 5000

[analytics]
dashboard_top_customers = 5
report_top_customers = 10
report_top_representatives = 10
"#;

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: None,
                port: 5000,
            },
            analytics: AnalyticsConfig {
                dashboard_top_customers: DASHBOARD_TOP_CUSTOMERS,
                report_top_customers: REPORT_TOP_CUSTOMERS,
                report_top_representatives: REPORT_TOP_REPRESENTATIVES,
            },
        }
    }
}

/// Parse configuration.
///
/// Search order:
/// 1. `override_toml` (if given)
/// 2. Falls back to embedded default config
pub fn parse_config(override_toml: Option<&str>) -> anyhow::Result<AppConfig> {
    if let Some(contents) = override_toml.filter(|c| !c.trim().is_empty()) {
        log::info!("Loading config from localStorage override");
        let config: AppConfig =
            toml::from_str(contents).context("Invalid config override in localStorage")?;
        return Ok(config);
    }

    log::info!("Using default embedded configuration");
    let config: AppConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Load configuration using the localStorage override, if any
pub fn load_config() -> anyhow::Result<AppConfig> {
    let override_toml = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_OVERRIDE_KEY).ok().flatten());
    parse_config(override_toml.as_deref())
}

static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Process-wide configuration, loaded on first use.
/// A broken override is logged and replaced by the defaults.
pub fn app_config() -> &'static AppConfig {
    APP_CONFIG.get_or_init(|| match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Failed to load config, using defaults: {:#}", e);
            AppConfig::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<AppConfig, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.analytics.dashboard_top_customers, 5);
    }

    #[test]
    fn test_override_wins() {
        let config = parse_config(Some(
            r#"
            [api]
            base_url = "https://sales.example.com"
            port = 443

            [analytics]
            dashboard_top_customers = 3
            report_top_customers = 20
            report_top_representatives = 5
            "#,
        ))
        .unwrap();
        assert_eq!(config.api.base_url.as_deref(), Some("https://sales.example.com"));
        assert_eq!(config.analytics.report_top_customers, 20);
    }

    #[test]
    fn test_blank_override_uses_default() {
        assert_eq!(parse_config(Some("  ")).unwrap(), AppConfig::default());
        assert_eq!(parse_config(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_broken_override_is_error() {
        assert!(parse_config(Some("[api]\nport = \"x\"")).is_err());
    }
}

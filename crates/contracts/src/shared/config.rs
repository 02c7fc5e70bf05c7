use crate::shared::edit::DATE_FORMAT;
use crate::shared::list::{FilterOptions, UnknownOperatorPolicy};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub orders: OrdersConfig,
    #[serde(default)]
    pub filters: FiltersConfig,
    #[serde(default)]
    pub dates: DatesConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OrdersConfig {
    /// Ставка налога документа (0.10 = 10%)
    pub tax_rate: f64,
    pub default_shipping_amount: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FiltersConfig {
    pub unknown_operator: UnknownOperatorPolicy,
    pub quick_search_min_len: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DatesConfig {
    pub format: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[orders]
tax_rate = 0.10
default_shipping_amount = 0.0

[filters]
unknown_operator = "pass_through"
quick_search_min_len = 0

[dates]
format = "%Y-%m-%d"
"#;

impl Default for OrdersConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.10,
            default_shipping_amount: 0.0,
        }
    }
}

impl Default for DatesConfig {
    fn default() -> Self {
        Self {
            format: DATE_FORMAT.to_string(),
        }
    }
}

impl FiltersConfig {
    /// Параметры фильтрации для `FilterSet::with_options`
    pub fn options(&self) -> FilterOptions {
        FilterOptions {
            unknown_operator: self.unknown_operator,
            search_min_len: self.quick_search_min_len,
        }
    }
}

pub fn load_config_from_str(contents: &str) -> anyhow::Result<EngineConfig> {
    let config: EngineConfig = toml::from_str(contents)?;
    Ok(config)
}

/// Load configuration
///
/// Search order:
/// 1. Explicit path, if given and the file exists
/// 2. Falls back to embedded default config
pub fn load_config(path: Option<&Path>) -> anyhow::Result<EngineConfig> {
    if let Some(config_path) = path {
        if config_path.exists() {
            log::info!("Loading config from: {}", config_path.display());
            let contents = std::fs::read_to_string(config_path)?;
            return load_config_from_str(&contents);
        }
        log::warn!("config file not found at: {}", config_path.display());
    }

    log::info!("Using default embedded configuration");
    load_config_from_str(DEFAULT_CONFIG)
}

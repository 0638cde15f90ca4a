use serde::Deserialize;

/// Настройки клиентского приложения
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub universities: UniversitiesConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UniversitiesConfig {
    pub api_base: String,
    pub default_query: String,
    /// Задержка перед запросом после ввода
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StoreConfig {
    pub add_to_cart_delay_ms: u32,
    pub products_load_delay_ms: u32,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
[universities]
api_base = "http://universities.hipolabs.com"
default_query = "mora"
debounce_ms = 300

[store]
add_to_cart_delay_ms = 400
products_load_delay_ms = 1500
"#;

/// Переопределения из query string страницы (`?api=...&add_delay=...`)
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub api: Option<String>,
    pub add_delay: Option<u32>,
    pub load_delay: Option<u32>,
}

impl AppConfig {
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        if config.universities.api_base.trim().is_empty() {
            anyhow::bail!("universities.api_base must not be empty");
        }
        Ok(config)
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(api) = overrides.api.filter(|a| !a.trim().is_empty()) {
            self.universities.api_base = api;
        }
        if let Some(delay) = overrides.add_delay {
            self.store.add_to_cart_delay_ms = delay;
        }
        if let Some(delay) = overrides.load_delay {
            self.store.products_load_delay_ms = delay;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            universities: UniversitiesConfig {
                api_base: "http://universities.hipolabs.com".to_string(),
                default_query: crate::domain::a004_university::DEFAULT_QUERY.to_string(),
                debounce_ms: 300,
            },
            store: StoreConfig {
                add_to_cart_delay_ms: 400,
                products_load_delay_ms: 1500,
            },
        }
    }
}

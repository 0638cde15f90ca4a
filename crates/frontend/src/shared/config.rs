//! Загрузка конфигурации клиента.
//!
//! Порядок: встроенный TOML по умолчанию, затем переопределения из query
//! string текущей страницы (`?api=http://localhost:8080&add_delay=0`).

use contracts::shared::config::{AppConfig, ConfigOverrides, DEFAULT_CONFIG};
use web_sys::window;

pub fn load_app_config() -> AppConfig {
    let base = match AppConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("embedded config is invalid ({e}), using built-in defaults");
            AppConfig::default()
        }
    };

    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    let overrides = parse_overrides(&search);
    if overrides != ConfigOverrides::default() {
        log::info!("config overrides from query string: {:?}", overrides);
    }
    base.with_overrides(overrides)
}

fn parse_overrides(search: &str) -> ConfigOverrides {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub lista: ListaConfig,
    pub notificacoes: NotificacoesConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Vazio: deriva de `window.location` com a porta abaixo
    pub base_url: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListaConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct NotificacoesConfig {
    pub duracao_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            lista: ListaConfig::default(),
            notificacoes: NotificacoesConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            port: 3000,
        }
    }
}

impl Default for ListaConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            page_size_options: vec![20, 50, 100],
        }
    }
}

impl Default for NotificacoesConfig {
    fn default() -> Self {
        Self { duracao_ms: 4000 }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl LogConfig {
    pub fn level_filter(&self) -> log::Level {
        match self.level.to_ascii_lowercase().as_str() {
            "error" => log::Level::Error,
            "warn" => log::Level::Warn,
            "info" => log::Level::Info,
            "trace" => log::Level::Trace,
            _ => log::Level::Debug,
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""
port = 3000

[lista]
page_size = 20
page_size_options = [20, 50, 100]

[notificacoes]
duracao_ms = 4000

[log]
level = "debug"
"#;

/// Parse configuration, applying the build-time `FERIAS_API_BASE` override.
pub fn parse_config(contents: &str, api_base_override: Option<&str>) -> AppConfig {
    let mut config = match toml::from_str::<AppConfig>(contents) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Configuração inválida, usando padrão: {}", e);
            AppConfig::default()
        }
    };
    if let Some(base) = api_base_override.map(str::trim).filter(|b| !b.is_empty()) {
        config.api.base_url = base.trim_end_matches('/').to_string();
    }
    if config.lista.page_size == 0 {
        config.lista.page_size = ListaConfig::default().page_size;
    }
    config
}

static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| parse_config(DEFAULT_CONFIG, option_env!("FERIAS_API_BASE")));

pub fn config() -> &'static AppConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.lista.page_size, 20);
        assert_eq!(config.api.port, 3000);
    }

    #[test]
    fn test_override_replaces_base_url() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://rh.example.com/api/"));
        assert_eq!(config.api.base_url, "https://rh.example.com/api");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("[lista]\npage_size = 50\n", None);
        assert_eq!(config.lista.page_size, 50);
        assert_eq!(config.lista.page_size_options, vec![20, 50, 100]);
        assert_eq!(config.notificacoes.duracao_ms, 4000);
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = parse_config("[lista\n", None);
        assert_eq!(config, AppConfig::default());
        let config = parse_config("[lista]\npage_size = 0\n", None);
        assert_eq!(config.lista.page_size, 20);
    }

    #[test]
    fn test_log_level() {
        let config = parse_config("[log]\nlevel = \"WARN\"\n", None);
        assert_eq!(config.log.level_filter(), log::Level::Warn);
    }
}

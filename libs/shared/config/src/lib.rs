use std::env;
use std::str::FromStr;
use tracing::warn;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_host: String,
    pub api_port: u16,
    pub default_page_size: usize,
    pub max_page_size: usize,
    pub seed_fixtures: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 3000,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            seed_fixtures: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            api_host: env::var("API_HOST")
                .unwrap_or_else(|_| {
                    warn!("API_HOST not set, using default");
                    defaults.api_host.clone()
                }),
            api_port: parse_var("API_PORT", defaults.api_port),
            default_page_size: parse_var("DEFAULT_PAGE_SIZE", defaults.default_page_size),
            max_page_size: parse_var("MAX_PAGE_SIZE", defaults.max_page_size),
            seed_fixtures: parse_var("SEED_FIXTURES", defaults.seed_fixtures),
        };

        if !config.is_page_size_allowed(config.default_page_size) {
            warn!(
                "DEFAULT_PAGE_SIZE {} outside 1..={}, falling back to {}",
                config.default_page_size, config.max_page_size, DEFAULT_PAGE_SIZE
            );
            return Self {
                default_page_size: DEFAULT_PAGE_SIZE.min(config.max_page_size.max(1)),
                ..config
            };
        }

        config
    }

    pub fn is_page_size_allowed(&self, page_size: usize) -> bool {
        page_size >= 1 && page_size <= self.max_page_size
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("{} has invalid value {:?}, using default", name, raw);
            default
        }),
        Err(_) => {
            warn!("{} not set, using default", name);
            default
        }
    }
}

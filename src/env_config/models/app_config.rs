use super::app_env::Env;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub postgres: PostgresConfig,
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize)]
pub struct PostgresConfig {
    pub timeout: u64,
    pub max_connections: u32,
    pub min_connections: u32,
    pub max_lifetime: u64,
    pub idle_timeout: u64,
}

impl AppConfig {
    /// Loads config/<env>.toml for the given environment
    pub fn new(env: &Env) -> AppConfig {
        let path = format!("config/{}.toml", env);
        let content = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read config file {}: {}", path, e));
        toml::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse config file {}: {}", path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_app_config() {
        let raw = r#"
            [log]
            level = "debug"
            format = "plain"

            [postgres]
            timeout = 5
            max_connections = 1
            min_connections = 1
            max_lifetime = 1800
            idle_timeout = 600
        "#;

        let config: AppConfig = toml::from_str(raw).expect("config should parse");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.format, "plain");
        assert_eq!(config.postgres.max_connections, 1);
        assert_eq!(config.postgres.min_connections, 1);
        assert_eq!(config.postgres.timeout, 5);
    }

    #[test]
    fn test_parse_rejects_missing_section() {
        let raw = r#"
            [log]
            level = "info"
            format = "json"
        "#;
        assert!(toml::from_str::<AppConfig>(raw).is_err());
    }
}

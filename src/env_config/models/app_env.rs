use std::fmt;
use std::str::FromStr;

/// Deployment environment, selects which config/<env>.toml is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Local,
    Docker,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Env::Local),
            "docker" => Ok(Env::Docker),
            "prod" => Ok(Env::Prod),
            other => Err(format!("Unknown environment: {}", other)),
        }
    }
}

impl fmt::Display for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Docker => write!(f, "docker"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

#[derive(Debug)]
pub struct AppEnv {
    pub env: Env,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub postgres_database: String,
}

impl AppEnv {
    pub fn is_local(&self) -> bool {
        self.env == Env::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_from_str() {
        assert_eq!(Env::from_str("local").unwrap(), Env::Local);
        assert_eq!(Env::from_str("DOCKER").unwrap(), Env::Docker);
        assert_eq!(Env::from_str("Prod").unwrap(), Env::Prod);
        assert!(Env::from_str("staging").is_err());
    }

    #[test]
    fn test_env_display_round_trip() {
        for env in [Env::Local, Env::Docker, Env::Prod] {
            assert_eq!(Env::from_str(&env.to_string()).unwrap(), env);
        }
    }
}

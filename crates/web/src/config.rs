use anyhow::{Context, Result};

const DEFAULT_COMPETITION_ID: i32 = 1;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub competition_id: i32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            competition_id: match lookup("COMPETITION_ID") {
                Some(id) => id.parse().context("COMPETITION_ID must be a number")?,
                None => DEFAULT_COMPETITION_ID,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup<'a>(vars: &'a HashMap<&str, &str>) -> impl Fn(&str) -> Option<String> + 'a {
        move |key: &str| vars.get(key).map(|v| v.to_string())
    }

    #[test]
    fn test_competition_id_defaults_to_one() {
        let vars = HashMap::from([
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_URL", "postgres://localhost/skating"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.competition_id, 1);
    }

    #[test]
    fn test_competition_id_from_env() {
        let vars = HashMap::from([
            ("HOST", "0.0.0.0"),
            ("PORT", "3000"),
            ("DATABASE_URL", "postgres://localhost/skating"),
            ("COMPETITION_ID", "4"),
        ]);

        let config = Config::from_lookup(lookup(&vars)).unwrap();

        assert_eq!(config.competition_id, 4);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let vars = HashMap::from([
            ("HOST", "0.0.0.0"),
            ("PORT", "http"),
            ("DATABASE_URL", "postgres://localhost/skating"),
        ]);

        assert!(Config::from_lookup(lookup(&vars)).is_err());
    }
}

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid port: '{value}'")]
    InvalidPort { name: &'static str, value: String },
}

/// Startup configuration, read once from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub platform: String,
    pub host: String,
    pub port: u16,
    pub filepath_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(name))
        };

        let db_path: PathBuf = required("CHIRPY_DB_PATH")?.into();
        let platform = required("CHIRPY_PLATFORM")?;

        let host = lookup("CHIRPY_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = match lookup("CHIRPY_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort {
                name: "CHIRPY_PORT",
                value,
            })?,
            None => 8080,
        };
        let filepath_root: PathBuf = lookup("CHIRPY_FILEPATH_ROOT")
            .unwrap_or_else(|| ".".into())
            .into();

        Ok(Self {
            db_path,
            platform,
            host,
            port,
            filepath_root,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = load(&[("CHIRPY_DB_PATH", "chirpy.db"), ("CHIRPY_PLATFORM", "dev")]).unwrap();

        assert_eq!(config.db_path, PathBuf::from("chirpy.db"));
        assert_eq!(config.platform, "dev");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.filepath_root, PathBuf::from("."));
    }

    #[test]
    fn missing_db_path_is_fatal() {
        let err = load(&[("CHIRPY_PLATFORM", "dev")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CHIRPY_DB_PATH")));
    }

    #[test]
    fn empty_platform_is_fatal() {
        let err = load(&[("CHIRPY_DB_PATH", "chirpy.db"), ("CHIRPY_PLATFORM", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("CHIRPY_PLATFORM")));
    }

    #[test]
    fn bad_port_is_fatal() {
        let err = load(&[
            ("CHIRPY_DB_PATH", "chirpy.db"),
            ("CHIRPY_PLATFORM", "dev"),
            ("CHIRPY_PORT", "eighty"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { .. }));
    }
}

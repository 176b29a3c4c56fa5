use std::{env, fmt::Display, str::FromStr};

use log::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
}

impl Config {
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: try_load(&lookup, "TALENTX_HOST", "127.0.0.1"),
            port: try_load(&lookup, "TALENTX_PORT", "8080"),
            open_browser: try_load(&lookup, "TALENTX_OPEN_BROWSER", "true"),
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
fn try_load<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match raw.trim().parse() {
        Ok(value) => value,
        Err(e) => {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            parse_default(key, default)
        }
    }
}

fn parse_default<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    match default.parse() {
        Ok(value) => value,
        Err(e) => unreachable!("built-in default for {key} does not parse: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]);
        assert_eq!(
            config,
            Config {
                host: "127.0.0.1".to_string(),
                port: 8080,
                open_browser: true,
            }
        );
        assert_eq!(config.url(), "http://127.0.0.1:8080");
    }

    #[test]
    fn values_are_read_and_invalid_ones_fall_back() {
        let config = config_from(&[
            ("TALENTX_HOST", "0.0.0.0"),
            ("TALENTX_PORT", "not-a-port"),
            ("TALENTX_OPEN_BROWSER", "false"),
        ]);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.open_browser);
    }
}

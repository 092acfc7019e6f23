use crate::error::{Result, WatchError};

/// Location ids polled on every run (JLT clusters D, E and F)
pub const LOCATION_IDS: [u32; 3] = [9117, 9118, 9119];

/// Default state file path, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "last_seen.json";

pub const DEFAULT_RAPIDAPI_HOST: &str = "bayut-api1.p.rapidapi.com";

/// Credentials and endpoints, read once at startup and passed by reference
/// to the listings client and the notifier.
#[derive(Debug, Clone)]
pub struct Config {
    pub rapidapi_key: String,
    pub rapidapi_host: String,
    pub ultramsg_instance: String,
    pub ultramsg_token: String,
    pub whatsapp_to: String,
}

impl Config {
    /// Build the config from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Blank values count as
    /// missing, and every missing key is reported at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut required = |key: &'static str| match lookup(key).filter(|v| !v.trim().is_empty()) {
            Some(value) => value,
            None => {
                missing.push(key);
                String::new()
            }
        };

        let rapidapi_key = required("BAYUT_RAPIDAPI_KEY");
        let ultramsg_instance = required("ULTRAMSG_INSTANCE_ID");
        let ultramsg_token = required("ULTRAMSG_TOKEN");
        let whatsapp_to = required("WHATSAPP_TO");

        if !missing.is_empty() {
            return Err(WatchError::Config(missing));
        }

        let rapidapi_host = lookup("BAYUT_RAPIDAPI_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RAPIDAPI_HOST.to_string());

        Ok(Self {
            rapidapi_key,
            rapidapi_host,
            ultramsg_instance,
            ultramsg_token,
            whatsapp_to,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_all_values_with_default_host() {
        let vars = env(&[
            ("BAYUT_RAPIDAPI_KEY", "key"),
            ("ULTRAMSG_INSTANCE_ID", "instance42"),
            ("ULTRAMSG_TOKEN", "tok"),
            ("WHATSAPP_TO", "+971500000000"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.rapidapi_key, "key");
        assert_eq!(config.rapidapi_host, DEFAULT_RAPIDAPI_HOST);
        assert_eq!(config.ultramsg_instance, "instance42");
        assert_eq!(config.whatsapp_to, "+971500000000");
    }

    #[test]
    fn host_can_be_overridden() {
        let vars = env(&[
            ("BAYUT_RAPIDAPI_KEY", "key"),
            ("BAYUT_RAPIDAPI_HOST", "bayut.example.test"),
            ("ULTRAMSG_INSTANCE_ID", "i"),
            ("ULTRAMSG_TOKEN", "t"),
            ("WHATSAPP_TO", "w"),
        ]);
        let config = Config::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.rapidapi_host, "bayut.example.test");
    }

    #[test]
    fn reports_every_missing_or_blank_variable() {
        let vars = env(&[("BAYUT_RAPIDAPI_KEY", "key"), ("ULTRAMSG_TOKEN", "  ")]);
        let err = Config::from_lookup(|k| vars.get(k).cloned()).unwrap_err();

        match err {
            WatchError::Config(missing) => assert_eq!(
                missing,
                vec!["ULTRAMSG_INSTANCE_ID", "ULTRAMSG_TOKEN", "WHATSAPP_TO"]
            ),
            other => panic!("unexpected error: {other}"),
        }
    }
}

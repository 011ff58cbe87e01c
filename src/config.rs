use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATA_PATH: &str = "data/activity.json";
pub const DEFAULT_STALE_SECS: u64 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    /// Base URL of a remote activity endpoint. Local store is used when unset.
    pub activity_api_url: Option<String>,
    /// How long a fetched remote response is reused before refetching.
    pub activity_stale_after: Duration,
    pub demo_seed: Option<u64>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(value) => value.parse::<u16>().unwrap_or_else(|_| {
                warn!(%value, fallback = DEFAULT_PORT, "invalid PORT");
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        let data_path = lookup("APP_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let activity_api_url = lookup("ACTIVITY_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let stale_secs = match lookup("ACTIVITY_STALE_SECS") {
            Some(value) => value.parse::<u64>().unwrap_or_else(|_| {
                warn!(%value, fallback = DEFAULT_STALE_SECS, "invalid ACTIVITY_STALE_SECS");
                DEFAULT_STALE_SECS
            }),
            None => DEFAULT_STALE_SECS,
        };

        let demo_seed = lookup("JOURNAL_DEMO_SEED").and_then(|value| match value.parse::<u64>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!(%value, "ignoring invalid JOURNAL_DEMO_SEED");
                None
            }
        });

        Self {
            port,
            data_path,
            activity_api_url,
            activity_stale_after: Duration::from_secs(stale_secs),
            demo_seed,
        }
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
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
        assert_eq!(config.activity_api_url, None);
        assert_eq!(config.activity_stale_after, Duration::from_secs(DEFAULT_STALE_SECS));
        assert_eq!(config.demo_seed, None);
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("APP_DATA_PATH", "/tmp/activity.json"),
            ("ACTIVITY_API_URL", " https://example.test "),
            ("ACTIVITY_STALE_SECS", "30"),
            ("JOURNAL_DEMO_SEED", "9"),
        ]);
        assert_eq!(config.activity_stale_after, Duration::from_secs(30));
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_path, PathBuf::from("/tmp/activity.json"));
        assert_eq!(config.activity_api_url.as_deref(), Some("https://example.test"));
        assert_eq!(config.demo_seed, Some(9));
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("PORT", "eighty"),
            ("ACTIVITY_API_URL", "  "),
            ("ACTIVITY_STALE_SECS", "soon"),
            ("JOURNAL_DEMO_SEED", "-1"),
        ]);
        assert_eq!(config.activity_stale_after, Duration::from_secs(DEFAULT_STALE_SECS));
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.activity_api_url, None);
        assert_eq!(config.demo_seed, None);
    }
}

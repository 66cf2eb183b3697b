use crate::error::ConfigError;
use crate::format::Locale;
use crate::http::var;

pub const DEFAULT_SNAPSHOT: &str = "./data.json";
pub const DEFAULT_SEC_BASE: &str = "https://data.sec.gov";
pub const DEFAULT_RELAY: &str = "https://r.jina.ai/http://";
pub const DEFAULT_USER_AGENT: &str = "ShareVolume/1.0 (+GitHub Pages)";

/// Runtime settings, read from the environment (and any `.env` file loaded beforehand).
///
/// | variable                | field        |
/// |-------------------------|--------------|
/// | `SHAREVOLUME_SNAPSHOT`  | `snapshot`   |
/// | `SHAREVOLUME_SEC_BASE`  | `sec_base`   |
/// | `SHAREVOLUME_RELAY`     | `relay`      |
/// | `USER_AGENT`            | `user_agent` |
/// | `SHAREVOLUME_CONTACT`   | `contact`    |
/// | `SHAREVOLUME_LOCALE`    | `locale`     |
/// | `SHAREVOLUME_TELEMETRY` | `telemetry`  |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Path of the bundled snapshot file.
    pub snapshot: String,
    /// Scheme and host of the SEC data API.
    pub sec_base: String,
    /// Prefix the scheme-less source URL is appended to.
    pub relay: String,
    pub user_agent: String,
    /// Sent as the `From` header, when present.
    pub contact: Option<String>,
    pub locale: Locale,
    /// Fire the diagnostic ping on start; off unless asked for.
    pub telemetry: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: DEFAULT_SNAPSHOT.to_string(),
            sec_base: DEFAULT_SEC_BASE.to_string(),
            relay: DEFAULT_RELAY.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            contact: None,
            locale: Locale::default(),
            telemetry: false,
        }
    }
}

impl Config {
    /// Build the config from environment variables, falling back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Build the config from any key lookup; unset or blank keys take the default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|val| !val.trim().is_empty());
        let default = Self::default();

        let locale = match get("SHAREVOLUME_LOCALE") {
            Some(locale) => locale.parse()?,
            None => default.locale,
        };

        let telemetry = match get("SHAREVOLUME_TELEMETRY") {
            Some(flag) => parse_flag("SHAREVOLUME_TELEMETRY", &flag)?,
            None => default.telemetry,
        };

        Ok(Self {
            snapshot: get("SHAREVOLUME_SNAPSHOT").unwrap_or(default.snapshot),
            sec_base: get("SHAREVOLUME_SEC_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(default.sec_base),
            relay: get("SHAREVOLUME_RELAY").unwrap_or(default.relay),
            user_agent: get("USER_AGENT").unwrap_or(default.user_agent),
            contact: get("SHAREVOLUME_CONTACT"),
            locale,
            telemetry,
        })
    }
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Flag {
            var,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.telemetry);
    }

    #[test]
    fn reads_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("SHAREVOLUME_SNAPSHOT", "/srv/data.json"),
            ("SHAREVOLUME_SEC_BASE", "http://localhost:8080/"),
            ("SHAREVOLUME_CONTACT", "ops@example.com"),
            ("SHAREVOLUME_LOCALE", "de-DE"),
            ("SHAREVOLUME_TELEMETRY", "on"),
            ("USER_AGENT", "  "),
        ]))
        .unwrap();

        assert_eq!(config.snapshot, "/srv/data.json");
        assert_eq!(config.sec_base, "http://localhost:8080");
        assert_eq!(config.contact.as_deref(), Some("ops@example.com"));
        assert_eq!(config.locale, Locale::DeDe);
        assert!(config.telemetry);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            Config::from_lookup(lookup(&[("SHAREVOLUME_TELEMETRY", "maybe")])),
            Err(ConfigError::Flag {
                var: "SHAREVOLUME_TELEMETRY",
                value: "maybe".to_string()
            })
        );
        assert!(Config::from_lookup(lookup(&[("SHAREVOLUME_LOCALE", "tlh")])).is_err());
    }
}

//! Process configuration read from the environment

use crate::state_machine::state::DEFAULT_GATHER_TIMEOUT_SECS;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_SESSION_TTL_SECS: u64 = 30 * 60;

/// Indian English voice used for every `<Say>` (Amazon Polly via Twilio)
pub const DEFAULT_VOICE: &str = "Polly.Aditi";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

/// Runtime configuration for the IVR server
#[derive(Debug, Clone)]
pub struct IvrConfig {
    pub port: u16,
    /// Inactivity window after which a call session is discarded
    pub session_ttl: Duration,
    /// When set, stale sessions are also swept on this interval
    pub sweep_interval: Option<Duration>,
    pub voice: String,
    /// Seconds the provider waits for digits before re-invoking with none
    pub gather_timeout_secs: u32,
}

impl Default for IvrConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_SECS),
            sweep_interval: None,
            voice: DEFAULT_VOICE.to_string(),
            gather_timeout_secs: DEFAULT_GATHER_TIMEOUT_SECS,
        }
    }
}

impl IvrConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = parse_var(&lookup, "IVR_PORT")?.unwrap_or(defaults.port);
        let session_ttl = parse_var(&lookup, "IVR_SESSION_TTL_SECS")?
            .map_or(defaults.session_ttl, Duration::from_secs);
        let sweep_interval = parse_var::<u64>(&lookup, "IVR_SWEEP_INTERVAL_SECS")?
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        let voice = lookup("IVR_VOICE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.voice);
        let gather_timeout_secs =
            parse_var(&lookup, "IVR_GATHER_TIMEOUT_SECS")?.unwrap_or(defaults.gather_timeout_secs);

        Ok(Self {
            port,
            session_ttl,
            sweep_interval,
            voice,
            gather_timeout_secs,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<IvrConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        IvrConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
        assert!(config.sweep_interval.is_none());
        assert_eq!(config.voice, "Polly.Aditi");
        assert_eq!(config.gather_timeout_secs, 10);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("IVR_PORT", "9090"),
            ("IVR_SESSION_TTL_SECS", "60"),
            ("IVR_SWEEP_INTERVAL_SECS", "15"),
            ("IVR_VOICE", "en-IN-NeerjaNeural"),
            ("IVR_GATHER_TIMEOUT_SECS", "5"),
        ])
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.session_ttl, Duration::from_secs(60));
        assert_eq!(config.sweep_interval, Some(Duration::from_secs(15)));
        assert_eq!(config.voice, "en-IN-NeerjaNeural");
        assert_eq!(config.gather_timeout_secs, 5);
    }

    #[test]
    fn test_zero_sweep_interval_disables_sweeper() {
        let config = config_from(&[("IVR_SWEEP_INTERVAL_SECS", "0")]).unwrap();
        assert!(config.sweep_interval.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("IVR_PORT", "eighty")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name: "IVR_PORT", .. }
        ));
    }
}

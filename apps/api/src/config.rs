use std::time::Duration;

use anyhow::{ensure, Context, Result};

use crate::analysis::matching::MatchStrategy;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Cosmetic wait before an analysis result is returned.
    pub analysis_delay: Duration,
    /// Cosmetic wait before the export placeholder answers.
    pub export_delay: Duration,
    pub keyword_matching: MatchStrategy,
    /// Sessions untouched for this long are evicted.
    pub session_ttl: Duration,
    pub session_sweep_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            analysis_delay: Duration::from_millis(2000),
            export_delay: Duration::from_millis(2000),
            keyword_matching: MatchStrategy::WholeToken,
            session_ttl: Duration::from_secs(60 * 60),
            session_sweep_interval: Duration::from_secs(60),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let session_sweep_interval =
            secs(&lookup, "SESSION_SWEEP_SECS")?.unwrap_or(defaults.session_sweep_interval);
        ensure!(
            !session_sweep_interval.is_zero(),
            "SESSION_SWEEP_SECS must be greater than zero"
        );

        Ok(Config {
            port: match lookup("PORT") {
                Some(v) => v
                    .parse::<u16>()
                    .context("PORT must be a valid port number")?,
                None => defaults.port,
            },
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            analysis_delay: millis(&lookup, "ANALYSIS_DELAY_MS")?.unwrap_or(defaults.analysis_delay),
            export_delay: millis(&lookup, "EXPORT_DELAY_MS")?.unwrap_or(defaults.export_delay),
            keyword_matching: match lookup("KEYWORD_MATCHING") {
                Some(v) => v
                    .parse::<MatchStrategy>()
                    .context("KEYWORD_MATCHING must be 'whole_token' or 'substring'")?,
                None => defaults.keyword_matching,
            },
            session_ttl: secs(&lookup, "SESSION_TTL_SECS")?.unwrap_or(defaults.session_ttl),
            session_sweep_interval,
        })
    }
}

fn millis(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|v| {
            v.parse::<u64>()
                .map(Duration::from_millis)
                .with_context(|| format!("{key} must be a whole number of milliseconds"))
        })
        .transpose()
}

fn secs(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<Duration>> {
    lookup(key)
        .map(|v| {
            v.parse::<u64>()
                .map(Duration::from_secs)
                .with_context(|| format!("{key} must be a whole number of seconds"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.analysis_delay, Duration::from_millis(2000));
        assert_eq!(config.export_delay, Duration::from_millis(2000));
        assert_eq!(config.keyword_matching, MatchStrategy::WholeToken);
        assert_eq!(config.session_ttl, Duration::from_secs(3600));
        assert_eq!(config.session_sweep_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_session_expiry_overrides() {
        let config = config_from(&[("SESSION_TTL_SECS", "900"), ("SESSION_SWEEP_SECS", "15")]).unwrap();
        assert_eq!(config.session_ttl, Duration::from_secs(900));
        assert_eq!(config.session_sweep_interval, Duration::from_secs(15));
    }

    #[test]
    fn test_zero_sweep_interval_fails() {
        let err = config_from(&[("SESSION_SWEEP_SECS", "0")]).unwrap_err();
        assert!(err.to_string().contains("SESSION_SWEEP_SECS"));
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("ANALYSIS_DELAY_MS", "0"),
            ("EXPORT_DELAY_MS", "250"),
            ("KEYWORD_MATCHING", "substring"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert!(config.analysis_delay.is_zero());
        assert_eq!(config.export_delay, Duration::from_millis(250));
        assert_eq!(config.keyword_matching, MatchStrategy::Substring);
    }

    #[test]
    fn test_bad_port_fails() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_bad_delay_fails() {
        let err = config_from(&[("ANALYSIS_DELAY_MS", "-5")]).unwrap_err();
        assert!(err.to_string().contains("ANALYSIS_DELAY_MS"));
    }

    #[test]
    fn test_unknown_matching_strategy_fails() {
        assert!(config_from(&[("KEYWORD_MATCHING", "fuzzy")]).is_err());
    }
}

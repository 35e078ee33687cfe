//! Poller configuration
//!
//! Defines the polling cadence and the wall-clock budget of a poll loop.

use std::time::Duration;

use crate::error::PollerError;

/// Default time between two status fetches
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5_000);

/// Default budget after which a poll loop gives up
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(300_000); // 5 minutes

/// Poller configuration
#[derive(Debug, Clone)]
pub struct PollerConfig {
    /// How often a job's status is fetched
    pub interval: Duration,

    /// How long a loop keeps polling before it stops on its own
    pub timeout: Duration,
}

impl PollerConfig {
    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - SKILLHIRE_POLL_INTERVAL_MS (optional, default: 5000)
    /// - SKILLHIRE_POLL_TIMEOUT_MS (optional, default: 300000)
    pub fn from_env() -> Self {
        let interval = std::env::var("SKILLHIRE_POLL_INTERVAL_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_INTERVAL);

        let timeout = std::env::var("SKILLHIRE_POLL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TIMEOUT);

        Self { interval, timeout }
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.options().validate()?;
        Ok(())
    }

    /// Per-loop options derived from this configuration
    pub fn options(&self) -> PollOptions {
        PollOptions {
            interval: self.interval,
            timeout: self.timeout,
        }
    }
}

impl Default for PollerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Cadence and budget of a single poll loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    pub interval: Duration,
    pub timeout: Duration,
}

impl PollOptions {
    pub fn new(interval: Duration, timeout: Duration) -> Self {
        Self { interval, timeout }
    }

    /// Shorthand for millisecond values
    pub fn from_millis(interval_ms: u64, timeout_ms: u64) -> Self {
        Self::new(
            Duration::from_millis(interval_ms),
            Duration::from_millis(timeout_ms),
        )
    }

    pub fn validate(&self) -> Result<(), PollerError> {
        if self.interval.is_zero() {
            return Err(PollerError::InvalidOptions(
                "interval must be greater than 0".to_string(),
            ));
        }

        if self.timeout.is_zero() {
            return Err(PollerError::InvalidOptions(
                "timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for PollOptions {
    fn default() -> Self {
        PollerConfig::default().options()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PollerConfig::default();
        assert_eq!(config.interval, Duration::from_secs(5));
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = PollerConfig::default();

        config.interval = Duration::ZERO;
        assert!(config.validate().is_err());

        config.interval = Duration::from_millis(100);
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.timeout = Duration::from_millis(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_options_from_millis() {
        let options = PollOptions::from_millis(100, 1_000);
        assert_eq!(options.interval, Duration::from_millis(100));
        assert_eq!(options.timeout, Duration::from_secs(1));
        assert!(matches!(
            PollOptions::from_millis(0, 1_000).validate(),
            Err(PollerError::InvalidOptions(_))
        ));
    }
}

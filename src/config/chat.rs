//! Chat session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Chat session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// Number of transcript messages returned by the session view
    #[serde(default = "default_max_history")]
    pub max_history: usize,

    /// Budget in seconds for the closing summary, both model calls included
    #[serde(default = "default_summary_timeout")]
    pub summary_timeout_secs: u64,
}

impl ChatConfig {
    /// Get summary timeout as Duration
    pub fn summary_timeout(&self) -> Duration {
        Duration::from_secs(self.summary_timeout_secs)
    }

    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_history == 0 || self.max_history > 1000 {
            return Err(ValidationError::InvalidHistoryLimit);
        }
        if self.summary_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            summary_timeout_secs: default_summary_timeout(),
        }
    }
}

fn default_max_history() -> usize {
    50
}

fn default_summary_timeout() -> u64 {
    20
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.max_history, 50);
        assert_eq!(config.summary_timeout(), Duration::from_secs(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_history_bounds() {
        let config = ChatConfig {
            max_history: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ChatConfig {
            max_history: 5000,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_summary_timeout() {
        let config = ChatConfig {
            summary_timeout_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTimeout));
    }
}

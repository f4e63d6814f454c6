use std::time::Duration;

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 15;

/// Per-process settings for [`crate::AssistantBridge`]
///
/// `request_timeout` bounds every outbound call individually. The poll loop
/// is bounded separately by `max_poll_attempts` checks spaced `poll_interval`
/// apart.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub assistant_id: String,
    pub request_timeout: Duration,
    pub poll_interval: Duration,
    pub max_poll_attempts: u32,
}

impl BridgeConfig {
    pub fn new(assistant_id: impl Into<String>) -> Self {
        Self {
            assistant_id: assistant_id.into(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn max_poll_attempts(mut self, attempts: u32) -> Self {
        self.max_poll_attempts = attempts;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::new("asst_1");
        assert_eq!(config.assistant_id, "asst_1");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.poll_interval, Duration::from_secs(2));
        assert_eq!(config.max_poll_attempts, 15);
    }

    #[test]
    fn test_builder() {
        let config = BridgeConfig::new("asst_1")
            .request_timeout(Duration::from_millis(500))
            .poll_interval(Duration::from_millis(10))
            .max_poll_attempts(3);

        assert_eq!(config.request_timeout, Duration::from_millis(500));
        assert_eq!(config.poll_interval, Duration::from_millis(10));
        assert_eq!(config.max_poll_attempts, 3);
    }
}

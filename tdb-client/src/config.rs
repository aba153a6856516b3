//! Client configuration for connection, keep-alive and query options
use crate::error::{ClientError, Result};
use std::time::Duration;

/// Default server port
pub const DEFAULT_PORT: u16 = 1729;

/// Period between keep-alive pulses on an open session
pub const DEFAULT_PULSE_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server hostname or IP address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Timeout for establishing the channel (None = no timeout)
    pub connect_timeout: Option<Duration>,

    /// Keep-alive heartbeat period
    pub pulse_interval: Duration,

    /// Ask the server to evaluate queries in parallel
    pub parallel: bool,

    /// Capacity of the outbound frame channel of each transaction stream
    pub stream_buffer: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            connect_timeout: Some(Duration::from_secs(10)),
            pulse_interval: DEFAULT_PULSE_INTERVAL,
            parallel: true,
            stream_buffer: 8,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn without_connect_timeout(mut self) -> Self {
        self.connect_timeout = None;
        self
    }

    /// Set the keep-alive heartbeat period
    pub fn with_pulse_interval(mut self, interval: Duration) -> Self {
        self.pulse_interval = interval;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_stream_buffer(mut self, capacity: usize) -> Self {
        self.stream_buffer = capacity;
        self
    }

    /// Endpoint URI for the gRPC channel
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ClientError::InvalidArgument("host must not be empty".to_string()));
        }

        if self.port == 0 {
            return Err(ClientError::InvalidArgument("port must be greater than 0".to_string()));
        }

        if self.pulse_interval.is_zero() {
            return Err(ClientError::InvalidArgument(
                "pulse_interval must be greater than 0".to_string(),
            ));
        }

        if self.stream_buffer == 0 {
            return Err(ClientError::InvalidArgument(
                "stream_buffer must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.port, 1729);
        assert_eq!(config.pulse_interval, Duration::from_secs(5));
        assert!(config.parallel);
        assert_eq!(config.endpoint(), "http://127.0.0.1:1729");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new("typedb.internal", 1730)
            .with_pulse_interval(Duration::from_millis(250))
            .with_parallel(false)
            .with_stream_buffer(2)
            .without_connect_timeout();

        assert_eq!(config.endpoint(), "http://typedb.internal:1730");
        assert_eq!(config.pulse_interval, Duration::from_millis(250));
        assert!(!config.parallel);
        assert_eq!(config.stream_buffer, 2);
        assert!(config.connect_timeout.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(ClientConfig::new("", 1729).validate().is_err());
        assert!(ClientConfig::new("localhost", 0).validate().is_err());
        assert!(ClientConfig::default()
            .with_pulse_interval(Duration::ZERO)
            .validate()
            .is_err());

        let err = ClientConfig::default().with_stream_buffer(0).validate().unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}

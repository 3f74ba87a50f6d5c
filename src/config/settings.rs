use crate::adapters::datamuse::DEFAULT_ENDPOINT;
use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 6449;
pub const DEFAULT_MAX_RESULTS: usize = 8;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CLEAR_DELAY_MS: u64 = 50;

/// Fully resolved run settings: CLI flag > config file > default.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub keyword: String,
    pub endpoint: String,
    pub max_results: usize,
    pub timeout: Duration,
    pub host: String,
    pub port: u16,
    pub clear_delay: Duration,
    pub dry_run: bool,
}

impl Settings {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            clear_delay: Duration::from_millis(DEFAULT_CLEAR_DELAY_MS),
            dry_run: false,
        }
    }

    /// 套用設定檔中有填的欄位
    pub fn apply_toml(&mut self, file: &TomlConfig) {
        if let Some(source) = &file.source {
            if let Some(endpoint) = &source.endpoint {
                self.endpoint = endpoint.clone();
            }
            if let Some(max) = source.max_results {
                self.max_results = max;
            }
            if let Some(secs) = source.timeout_seconds {
                self.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(osc) = &file.osc {
            if let Some(host) = &osc.host {
                self.host = host.clone();
            }
            if let Some(port) = osc.port {
                self.port = port;
            }
            if let Some(ms) = osc.clear_delay_ms {
                self.clear_delay = Duration::from_millis(ms);
            }
        }
    }
}

impl ConfigProvider for Settings {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn max_results(&self) -> usize {
        self.max_results
    }

    fn request_timeout(&self) -> Duration {
        self.timeout
    }

    fn host(&self) -> &str {
        &self.host
    }

    fn port(&self) -> u16 {
        self.port
    }

    fn clear_delay(&self) -> Duration {
        self.clear_delay
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("keyword", &self.keyword)?;
        validate_url("endpoint", &self.endpoint)?;
        validate_range("max", self.max_results, 1, 1000)?;
        validate_range("timeout_secs", self.timeout.as_secs(), 1, 300)?;
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        validate_range("clear_delay_ms", self.clear_delay.as_millis(), 0, 10_000)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new("happy");

        assert_eq!(settings.endpoint, "https://api.datamuse.com/words");
        assert_eq!(settings.max_results, 8);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 6449);
        assert_eq!(settings.clear_delay, Duration::from_millis(50));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_apply_toml_only_overrides_present_fields() {
        let file = TomlConfig::from_toml_str(
            r#"
[osc]
port = 7000
"#,
        )
        .unwrap();

        let mut settings = Settings::new("happy");
        settings.apply_toml(&file);

        assert_eq!(settings.port, 7000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.max_results, 8);
    }

    #[test]
    fn test_validation_failures() {
        let mut settings = Settings::new("  ");
        assert!(settings.validate().is_err());

        settings = Settings::new("happy");
        settings.port = 0;
        assert!(settings.validate().is_err());

        settings = Settings::new("happy");
        settings.max_results = 0;
        assert!(settings.validate().is_err());

        settings = Settings::new("happy");
        settings.endpoint = "ftp://words.example".to_string();
        assert!(settings.validate().is_err());

        settings = Settings::new("happy");
        settings.timeout = Duration::ZERO;
        assert!(settings.validate().is_err());
    }
}

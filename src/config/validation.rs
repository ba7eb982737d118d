use crate::config::types::{Config, HarvestConfig, HttpConfig, OutputConfig};
use crate::ConfigError;
use reqwest::header::{HeaderName, HeaderValue};
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_harvest_config(&config.harvest)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates harvest behavior configuration
fn validate_harvest_config(config: &HarvestConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.index_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid index-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "index-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if config.max_concurrent_fetches < 1 || config.max_concurrent_fetches > 64 {
        return Err(ConfigError::Validation(format!(
            "max-concurrent-fetches must be between 1 and 64, got {}",
            config.max_concurrent_fetches
        )));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be <= 10, got {}",
            config.max_retries
        )));
    }

    Ok(())
}

/// Validates HTTP transport configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "request-timeout-secs must be >= 1, got {}",
            config.request_timeout_secs
        )));
    }

    for (name, value) in &config.headers {
        HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| ConfigError::InvalidHeader(format!("invalid header name '{}'", name)))?;
        HeaderValue::from_str(value).map_err(|_| {
            ConfigError::InvalidHeader(format!("invalid value for header '{}'", name))
        })?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.dataset_path.is_empty() {
        return Err(ConfigError::Validation(
            "dataset-path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn valid_config() -> Config {
        Config {
            harvest: HarvestConfig {
                index_url: "https://openaccess.thecvf.com/CVPR2024".to_string(),
                max_concurrent_fetches: 8,
                max_retries: 2,
                retry_delay_ms: 500,
            },
            http: HttpConfig::default(),
            output: OutputConfig {
                dataset_path: "./papers.csv".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_invalid_index_url() {
        let mut config = valid_config();
        config.harvest.index_url = "not a url".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid_config();
        config.harvest.index_url = "ftp://example.com/papers".to_string();
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_concurrency_bounds() {
        let mut config = valid_config();
        config.harvest.max_concurrent_fetches = 0;
        assert!(validate(&config).is_err());

        config.harvest.max_concurrent_fetches = 65;
        assert!(validate(&config).is_err());

        config.harvest.max_concurrent_fetches = 1;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_user_agent_rejected() {
        let mut config = valid_config();
        config.http.user_agent = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_header_name_rejected() {
        let mut config = valid_config();
        let mut headers = HashMap::new();
        headers.insert("bad header name".to_string(), "value".to_string());
        config.http.headers = headers;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_valid_extra_headers_accepted() {
        let mut config = valid_config();
        let mut headers = HashMap::new();
        headers.insert("Accept-Language".to_string(), "en-US".to_string());
        config.http.headers = headers;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_dataset_path_rejected() {
        let mut config = valid_config();
        config.output.dataset_path = String::new();
        assert!(validate(&config).is_err());
    }
}

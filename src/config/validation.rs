use crate::config::types::{CheckEntry, Config, RobotsSourceConfig, UserAgentConfig};
use crate::url::{parse_host_url, parse_url};
use crate::ConfigError;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_robots_source(&config.robots)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_checks(&config.check)?;
    Ok(())
}

/// Validates where the robots.txt comes from
fn validate_robots_source(config: &RobotsSourceConfig) -> Result<(), ConfigError> {
    parse_host_url(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if config.file.is_empty() {
        return Err(ConfigError::Validation(
            "robots file path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    // Validate crawler name: non-empty, alphanumeric + hyphens only
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    // A slash would be read as the start of the version
    if config.crawler_version.contains('/') {
        return Err(ConfigError::Validation(format!(
            "crawler_version cannot contain '/', got '{}'",
            config.crawler_version
        )));
    }

    Ok(())
}

/// Validates the URLs to check
fn validate_checks(checks: &[CheckEntry]) -> Result<(), ConfigError> {
    for entry in checks {
        parse_url(&entry.url).map_err(|e| {
            ConfigError::InvalidUrl(format!("Invalid check URL '{}': {}", entry.url, e))
        })?;
    }
    Ok(())
}

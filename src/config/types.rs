use serde::Deserialize;

/// Main configuration structure for Ripple-Robots
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub robots: RobotsSourceConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub check: Vec<CheckEntry>,
}

/// Where the robots.txt text comes from and which origin it governs
#[derive(Debug, Clone, Deserialize)]
pub struct RobotsSourceConfig {
    /// URL the robots.txt was served from (e.g. "http://www.example.com/robots.txt")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path to a local copy of the robots.txt text
    pub file: String,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version", default)]
    pub crawler_version: String,
}

impl UserAgentConfig {
    /// Returns the product token the crawler identifies itself with
    ///
    /// This is `name/version`, or just `name` when no version is configured.
    pub fn product_token(&self) -> String {
        if self.crawler_version.is_empty() {
            self.crawler_name.clone()
        } else {
            format!("{}/{}", self.crawler_name, self.crawler_version)
        }
    }
}

/// A URL to check against the robots.txt rules
#[derive(Debug, Clone, Deserialize)]
pub struct CheckEntry {
    pub url: String,
}

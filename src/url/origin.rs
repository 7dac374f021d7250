use crate::{UrlError, UrlResult};
use url::Url;

/// Port assumed when a URL does not carry one (or carries its scheme's default)
pub const DEFAULT_PORT: u16 = 80;

/// The scheme, host and port a robots.txt document governs
///
/// Hostnames are compared after WHATWG host processing, so they are lower-cased and
/// Unicode hosts are held in their punycode form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin {
    scheme: String,
    host: String,
    port: u16,
}

impl Origin {
    /// Parses a URL string and returns its origin
    ///
    /// # Examples
    ///
    /// ```
    /// use ripple_robots::Origin;
    ///
    /// let a = Origin::parse("http://www.Example.com/robots.txt").unwrap();
    /// let b = Origin::parse("http://www.example.com:80/index.html").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Origin::parse("example.com/test/").is_err());
    /// ```
    pub fn parse(input: &str) -> UrlResult<Self> {
        let url = parse_url(input)?;
        Ok(Self::from_url(&url))
    }

    /// Extracts the origin of an already parsed URL
    ///
    /// A URL without a host (such as `file:///robots.txt`) gets an empty host.
    pub fn from_url(url: &Url) -> Self {
        Self {
            scheme: url.scheme().to_string(),
            host: url.host_str().unwrap_or_default().to_lowercase(),
            port: url.port().unwrap_or(DEFAULT_PORT),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

/// Parses a URL string with the WHATWG parser
pub fn parse_url(input: &str) -> UrlResult<Url> {
    Ok(Url::parse(input)?)
}

/// Parses a URL string and requires it to have a host
pub fn parse_host_url(input: &str) -> UrlResult<Url> {
    let url = parse_url(input)?;
    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost(input.to_string()));
    }
    Ok(url)
}

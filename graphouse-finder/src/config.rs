//! Finder configuration.

use std::time::Duration;

use serde::Deserialize;

/// Backend base URL used when none is configured.
pub const DEFAULT_URL: &str = "http://localhost:2005";

/// Request timeout applied to the underlying HTTP client by default.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Settings recognized by the finder.
///
/// One option is recognized: the base URL of the Graphouse service.
/// Deserialize this from the `graphouse` section of the embedding front
/// end's configuration, or rely on [`Default`].
///
/// ```rust
/// use graphouse_finder::GraphouseConfig;
///
/// let config: GraphouseConfig = serde_json::from_str(r#"{"url": "http://graphouse.local:2005"}"#)?;
/// assert_eq!(config.url, "http://graphouse.local:2005");
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GraphouseConfig {
    /// Base URL of the Graphouse backend.
    pub url: String,
}

impl Default for GraphouseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_url() {
        assert_eq!(GraphouseConfig::default().url, "http://localhost:2005");
    }

    #[test]
    fn test_deserialize_empty_mapping_uses_default() {
        let config: GraphouseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GraphouseConfig::default());
    }

    #[test]
    fn test_deserialize_url() {
        let config: GraphouseConfig =
            serde_json::from_str(r#"{"url": "http://graphouse.local:2005"}"#).unwrap();
        assert_eq!(config.url, "http://graphouse.local:2005");
    }
}

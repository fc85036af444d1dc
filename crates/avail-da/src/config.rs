use serde::{Deserialize, Serialize};

pub const DEFAULT_LC_URL: &str = "http://localhost:8000/v2";
pub const DEFAULT_BLOCKS_URL: &str = "/blocks/{block_number}/data?fields=data,extrinsic";

/// Remote light-client locations. Immutable once the adapter is built.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AvailConfig {
    /// Base URL of the light-client HTTP API, including the API version
    /// prefix.
    pub lc_url: String,
    /// Block-data path template appended to `lc_url`. Must contain the
    /// `{block_number}` token.
    pub blocks_url: String,
}

impl Default for AvailConfig {
    fn default() -> Self {
        Self {
            lc_url: DEFAULT_LC_URL.to_string(),
            blocks_url: DEFAULT_BLOCKS_URL.to_string(),
        }
    }
}

impl AvailConfig {
    /// Build a config from `AVAIL_LC_URL` / `AVAIL_BLOCKS_URL`, keeping the
    /// defaults for unset or blank variables.
    pub fn from_env() -> Self {
        let lc_url = std::env::var("AVAIL_LC_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LC_URL.to_string());

        let blocks_url = std::env::var("AVAIL_BLOCKS_URL")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BLOCKS_URL.to_string());

        Self { lc_url, blocks_url }
    }

    pub(crate) fn submit_endpoint(&self) -> String {
        format!("{}/submit", self.lc_url.trim_end_matches('/'))
    }

    pub(crate) fn blocks_endpoint(&self, block_number: u32) -> String {
        let path = self
            .blocks_url
            .replace("{block_number}", &block_number.to_string());
        format!(
            "{}/{}",
            self.lc_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_endpoint_substitutes_block_number() {
        let config = AvailConfig::default();
        assert_eq!(
            config.blocks_endpoint(7),
            "http://localhost:8000/v2/blocks/7/data?fields=data,extrinsic"
        );
    }

    #[test]
    fn endpoints_tolerate_trailing_slash() {
        let config = AvailConfig {
            lc_url: "http://localhost:8000/v2/".to_string(),
            ..AvailConfig::default()
        };
        assert_eq!(config.submit_endpoint(), "http://localhost:8000/v2/submit");
        assert_eq!(
            config.blocks_endpoint(0),
            "http://localhost:8000/v2/blocks/0/data?fields=data,extrinsic"
        );
    }
}

/// Deployed API endpoint, used when no override is compiled in.
const DEFAULT_API_URL: &str = "https://sistema-inaventario-render.onrender.com/api";

/// Explicit client configuration. Built once at startup and handed to
/// the API client; no module reads an ambient base-URL constant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the base URL at build time: `INVENTARIO_API_URL` if it
    /// was set when compiling, the deployed endpoint otherwise.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("INVENTARIO_API_URL").unwrap_or(DEFAULT_API_URL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("https://example.com/api/");
        assert_eq!(config.base_url, "https://example.com/api");
    }

    #[test]
    fn build_env_config_has_a_base_url() {
        assert!(!ApiConfig::from_build_env().base_url.is_empty());
    }
}

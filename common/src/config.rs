//! Base addresses of the two remote services the app talks to.

/// Backend REST API serving candidates, users, surveys and sessions.
pub const DEFAULT_API_BASE: &str = "http://ggustac-002-site1.htempurl.com/api";

/// IBGE public locality service (states and municipalities).
pub const DEFAULT_GEO_BASE: &str = "https://servicodados.ibge.gov.br/api/v1";

/// Local-storage key under which the session token is persisted.
pub const TOKEN_STORAGE_KEY: &str = "token";

/// Where requests are sent. Built once at startup and handed to the
/// [`ApiClient`](crate::client::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_base: String,
    pub geo_base: String,
}

impl ApiConfig {
    pub fn new(api_base: impl Into<String>, geo_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into().trim_end_matches('/').to_string(),
            geo_base: geo_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub fn geo_url(&self, path: &str) -> String {
        format!("{}{}", self.geo_base, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE, DEFAULT_GEO_BASE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::new("http://localhost:5000/api/", "http://geo/");
        assert_eq!(config.api_url("/Candidato"), "http://localhost:5000/api/Candidato");
        assert_eq!(config.geo_url("/localidades/estados"), "http://geo/localidades/estados");
    }
}

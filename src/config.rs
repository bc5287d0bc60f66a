//! REST Configuration
//!
//! Where the backend lives. Resolved against the page so the UI works from
//! whatever context path the backend serves it under.

use reqwest::Url;

use crate::error::{ApiError, ApiResult};

/// Path of the REST root relative to the page
pub const DEFAULT_REST_PATH: &str = "rest/";

/// `<body data-rest-base="...">` overrides the default path
const REST_BASE_ATTR: &str = "data-rest-base";

#[derive(Debug, Clone, PartialEq)]
pub struct RestConfig {
    base: Url,
}

impl RestConfig {
    /// Resolve `rest_path` against `page_url`.
    pub fn resolve(page_url: &str, rest_path: &str) -> ApiResult<Self> {
        let page = Url::parse(page_url).map_err(|e| ApiError::Config(format!("{page_url}: {e}")))?;
        // join() drops the last segment unless the path ends with a slash
        let rest_path = if rest_path.ends_with('/') {
            rest_path.to_string()
        } else {
            format!("{rest_path}/")
        };
        let base = page
            .join(&rest_path)
            .map_err(|e| ApiError::Config(format!("{rest_path}: {e}")))?;
        Ok(Self { base })
    }

    /// Read the configuration from the current document.
    pub fn from_document() -> ApiResult<Self> {
        let document = leptos::prelude::document();
        let page_url = document
            .base_uri()
            .ok()
            .flatten()
            .ok_or_else(|| ApiError::Config("document has no base URI".into()))?;
        let rest_path = document
            .body()
            .and_then(|body| body.get_attribute(REST_BASE_ATTR))
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REST_PATH.to_string());
        Self::resolve(&page_url, &rest_path)
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL for a resource path such as `party` or `party/3`.
    pub fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::Config(format!("{path}: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_against_page() {
        let config = RestConfig::resolve("http://localhost:8080/presidents/party.html", DEFAULT_REST_PATH).unwrap();
        assert_eq!(config.base().as_str(), "http://localhost:8080/presidents/rest/");
        assert_eq!(
            config.endpoint("party/3").unwrap().as_str(),
            "http://localhost:8080/presidents/rest/party/3"
        );
    }

    #[test]
    fn test_path_without_trailing_slash() {
        let config = RestConfig::resolve("http://localhost/app/", "/api").unwrap();
        assert_eq!(config.endpoint("state").unwrap().as_str(), "http://localhost/api/state");
    }

    #[test]
    fn test_bad_page_url() {
        assert!(matches!(
            RestConfig::resolve("not a url", DEFAULT_REST_PATH),
            Err(ApiError::Config(_))
        ));
    }
}

//! Location routing rules
//!
//! A [`Location`] is a single path-based routing rule together with the
//! policies applying to requests that match it. Locations are immutable for
//! the duration of a render pass; dependent internal names (auth sub-request
//! locations, deny variables) are derived from the path alone, so naming is
//! deterministic for a given path.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::rate_limit::RateLimit;

// ============================================================================
// Location
// ============================================================================

/// A single path-based routing rule.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    /// Request path this rule matches. Always absolute, never empty.
    #[validate(custom(function = "crate::validation::validate_path"))]
    pub path: String,

    /// Name of the backend requests are forwarded to.
    #[validate(length(min = 1, message = "A backend reference is required"))]
    pub backend: String,

    /// Rewrite policy for this location.
    #[serde(default)]
    pub rewrite: Rewrite,

    /// External authentication sub-request, if configured.
    #[serde(default)]
    pub external_auth: Option<ExternalAuth>,

    /// Rate limit policy. Zero-valued sub-policies are disabled.
    #[serde(default)]
    pub rate_limit: RateLimit,

    /// Forward the original path prefix to the backend in an
    /// `X-Forwarded-Prefix` header.
    #[serde(default)]
    pub x_forwarded_prefix: bool,

    /// Reason this location is blocked, if any.
    #[serde(default)]
    pub denied: Option<String>,
}

impl Location {
    /// Create a location forwarding `path` to `backend` with no extra
    /// policies attached.
    pub fn new(path: impl Into<String>, backend: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            backend: backend.into(),
            rewrite: Rewrite::default(),
            external_auth: None,
            rate_limit: RateLimit::default(),
            x_forwarded_prefix: false,
            denied: None,
        }
    }

    /// Whether requests to this location may be served.
    ///
    /// A location is allowed unless a denial reason has been recorded.
    pub fn is_allowed(&self) -> bool {
        match self.denied.as_deref() {
            None | Some("") => true,
            Some(_) => false,
        }
    }
}

// ============================================================================
// Rewrite Policy
// ============================================================================

/// Rewrite policy attached to a location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rewrite {
    /// Path the matched prefix is rewritten to. Empty means no rewrite.
    #[serde(default)]
    pub target: String,

    /// Inject a `<base>` tag pointing at the original prefix into the head
    /// of HTML responses.
    #[serde(default)]
    pub add_base_url: bool,

    /// Scheme for the injected base URL. Empty inherits the request scheme.
    #[serde(default)]
    pub base_url_scheme: String,
}

// ============================================================================
// External Authentication
// ============================================================================

/// External authentication sub-request configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalAuth {
    /// Endpoint the auth sub-request is sent to.
    pub url: String,

    /// Response headers copied from the auth endpoint onto the proxied
    /// request, in order.
    #[serde(default)]
    pub response_headers: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_allowed_without_denial() {
        let location = Location::new("/", "upstream-name");
        assert!(location.is_allowed());
    }

    #[test]
    fn test_is_allowed_with_empty_reason() {
        let mut location = Location::new("/", "upstream-name");
        location.denied = Some(String::new());
        assert!(location.is_allowed());
    }

    #[test]
    fn test_denied_with_reason() {
        let mut location = Location::new("/", "upstream-name");
        location.denied = Some("certificate challenge in progress".to_string());
        assert!(!location.is_allowed());
    }

    #[test]
    fn test_minimal_document_decodes_with_defaults() {
        let location: Location = serde_json::from_str(
            r#"{"path": "/app", "backend": "app-backend"}"#,
        )
        .unwrap();

        assert_eq!(location.path, "/app");
        assert_eq!(location.backend, "app-backend");
        assert!(location.rewrite.target.is_empty());
        assert!(!location.rewrite.add_base_url);
        assert!(location.external_auth.is_none());
        assert!(!location.x_forwarded_prefix);
        assert!(location.is_allowed());
    }
}

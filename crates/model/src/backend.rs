//! Upstream backends and session affinity
//!
//! A [`Backend`] is a named pool of servers referenced by locations. The
//! session affinity configuration records which `(host, path)` pairs are
//! enrolled in cookie-based sticky routing; the directive layer consults it
//! when resolving the upstream name a location forwards to.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Session Affinity
// ============================================================================

/// Session affinity mode for a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AffinityMode {
    /// No affinity; every request is balanced independently.
    #[default]
    None,
    /// Cookie-based affinity: clients are pinned to one server via an
    /// affinity cookie.
    Cookie,
}

/// Session affinity configuration for a backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionAffinity {
    /// Affinity mode.
    #[serde(default)]
    pub mode: AffinityMode,

    /// Cookie affinity enrollment. Only consulted when the mode is `cookie`.
    #[serde(default)]
    pub cookie: CookieAffinity,
}

/// Cookie affinity enrollment: which paths on which hosts are sticky.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieAffinity {
    /// Host → ordered list of paths enrolled in sticky routing.
    #[serde(default)]
    pub locations: HashMap<String, Vec<String>>,
}

// ============================================================================
// Backend
// ============================================================================

/// A named pool of servers requests are forwarded to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backend {
    /// Upstream name referenced by `Location::backend`.
    pub name: String,

    /// Talk to the pool over TLS.
    #[serde(default)]
    pub secure: bool,

    /// Session affinity configuration.
    #[serde(default)]
    pub session_affinity: SessionAffinity,
}

impl Backend {
    /// Create a backend with no affinity, reached over plain HTTP.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            secure: false,
            session_affinity: SessionAffinity::default(),
        }
    }

    /// Whether `(host, path)` is enrolled in cookie-based sticky routing on
    /// this backend.
    pub fn is_sticky(&self, host: &str, path: &str) -> bool {
        if self.session_affinity.mode != AffinityMode::Cookie {
            return false;
        }
        self.session_affinity
            .cookie
            .locations
            .get(host)
            .is_some_and(|paths| paths.iter().any(|p| p == path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sticky_backend(host: &str, path: &str) -> Backend {
        let mut backend = Backend::new("upstream-name");
        backend.session_affinity.mode = AffinityMode::Cookie;
        backend
            .session_affinity
            .cookie
            .locations
            .insert(host.to_string(), vec![path.to_string()]);
        backend
    }

    #[test]
    fn test_sticky_for_enrolled_pair() {
        let backend = sticky_backend("example.com", "/app");
        assert!(backend.is_sticky("example.com", "/app"));
    }

    #[test]
    fn test_not_sticky_for_other_host_or_path() {
        let backend = sticky_backend("example.com", "/app");
        assert!(!backend.is_sticky("other.example.com", "/app"));
        assert!(!backend.is_sticky("example.com", "/other"));
    }

    #[test]
    fn test_not_sticky_without_cookie_mode() {
        let mut backend = sticky_backend("example.com", "/app");
        backend.session_affinity.mode = AffinityMode::None;
        assert!(!backend.is_sticky("example.com", "/app"));
    }

    #[test]
    fn test_affinity_mode_decodes_lowercase() {
        let backend: Backend = serde_json::from_str(
            r#"{
                "name": "upstream-name",
                "session_affinity": {
                    "mode": "cookie",
                    "cookie": {"locations": {"example.com": ["/"]}}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(backend.session_affinity.mode, AffinityMode::Cookie);
        assert!(backend.is_sticky("example.com", "/"));
    }
}

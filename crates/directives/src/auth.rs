//! External authentication builders
//!
//! A location protected by an external auth endpoint needs three pieces of
//! generated text: the internal sub-request location NGINX routes the auth
//! check to, the statements copying auth-endpoint response headers onto the
//! proxied request, and a signing URL that returns the client to the original
//! request once authenticated.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use url::Url;

use janus_model::Location;

use crate::vars::variable_name;

/// Tag prefixing every internal auth sub-request location.
const AUTH_LOCATION_PREFIX: &str = "/_external-auth-";

/// Query parameter carrying the post-auth redirect target.
const REDIRECT_PARAM: &str = "rd";

/// Redirect target expressed through the proxy's request-context variables,
/// resolved by NGINX at request time.
const REDIRECT_TARGET: &str = "$pass_access_scheme://$http_host$request_uri";

/// Derive the internal sub-request location name for an externally
/// authenticated location.
///
/// The name is a pure function of the path: padding-free URL-safe base64 of
/// the raw path bytes behind a fixed tag. Distinct paths never collide, and
/// repeated render passes agree on the name. Returns `None` when the location
/// has no external auth configured.
pub fn build_auth_location(location: &Location) -> Option<String> {
    let auth = location.external_auth.as_ref()?;
    if auth.url.is_empty() {
        return None;
    }
    let encoded = URL_SAFE_NO_PAD.encode(location.path.as_bytes());
    Some(format!("{AUTH_LOCATION_PREFIX}{encoded}"))
}

/// Build the statement pairs copying auth-endpoint response headers onto the
/// proxied request.
///
/// For the header at index `i`, the first statement captures the upstream
/// response header (lowercased, `-` as `_`) into `$authHeader<i>`; the second
/// sets the captured value back under the original header name, casing and
/// punctuation preserved. Input order is kept and indices match position.
pub fn build_auth_response_headers(response_headers: &[String]) -> Vec<String> {
    let mut statements = Vec::with_capacity(response_headers.len() * 2);
    for (i, header) in response_headers.iter().enumerate() {
        let variable = variable_name(header);
        statements.push(format!(
            "auth_request_set $authHeader{i} $upstream_http_{variable};"
        ));
        statements.push(format!("proxy_set_header '{header}' $authHeader{i};"));
    }
    statements
}

/// Guarantee a signing URL carries the redirect-callback parameter.
///
/// A URL whose query string already names the parameter is returned
/// unchanged; the caller's value is intentional. Otherwise the parameter is
/// appended, with `?` or `&` depending on whether a query string exists
/// already. A URL that does not parse passes through unchanged.
pub fn build_auth_sign_url(sign_url: &str) -> String {
    let Ok(parsed) = Url::parse(sign_url) else {
        return sign_url.to_string();
    };
    match parsed.query() {
        None => format!("{sign_url}?{REDIRECT_PARAM}={REDIRECT_TARGET}"),
        Some(_) if parsed.query_pairs().any(|(key, _)| key == REDIRECT_PARAM) => {
            sign_url.to_string()
        }
        Some(_) => format!("{sign_url}&{REDIRECT_PARAM}={REDIRECT_TARGET}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use janus_model::{ExternalAuth, Location};
    use std::collections::HashMap;

    fn authed(path: &str) -> Location {
        let mut location = Location::new(path, "upstream-name");
        location.external_auth = Some(ExternalAuth {
            url: "https://auth.example.com/start".to_string(),
            response_headers: Vec::new(),
        });
        location
    }

    #[test]
    fn test_auth_location_encodes_the_path() {
        assert_eq!(
            build_auth_location(&authed("/cat")).as_deref(),
            Some("/_external-auth-L2NhdA")
        );
    }

    #[test]
    fn test_auth_location_is_stable_and_injective() {
        let first = build_auth_location(&authed("/cat"));
        let second = build_auth_location(&authed("/cat"));
        assert_eq!(first, second);

        let other = build_auth_location(&authed("/dog"));
        assert_ne!(first, other);
    }

    #[test]
    fn test_auth_location_absent_without_external_auth() {
        assert_eq!(
            build_auth_location(&Location::new("/cat", "upstream-name")),
            None
        );
    }

    #[test]
    fn test_auth_response_headers_capture_and_restore() {
        let headers = vec![
            "h1".to_string(),
            "H-With-Caps-And-Dashes".to_string(),
        ];
        assert_eq!(
            build_auth_response_headers(&headers),
            vec![
                "auth_request_set $authHeader0 $upstream_http_h1;",
                "proxy_set_header 'h1' $authHeader0;",
                "auth_request_set $authHeader1 $upstream_http_h_with_caps_and_dashes;",
                "proxy_set_header 'H-With-Caps-And-Dashes' $authHeader1;",
            ]
        );
    }

    #[test]
    fn test_auth_response_headers_empty_input() {
        assert!(build_auth_response_headers(&[]).is_empty());
    }

    #[test]
    fn test_auth_sign_url() {
        let cases: HashMap<&str, (&str, &str)> = HashMap::from([
            (
                "bare url",
                (
                    "http://google.com",
                    "http://google.com?rd=$pass_access_scheme://$http_host$request_uri",
                ),
            ),
            (
                "unrelated query parameter",
                (
                    "http://google.com?cat=0",
                    "http://google.com?cat=0&rd=$pass_access_scheme://$http_host$request_uri",
                ),
            ),
            (
                "redirect parameter already present",
                (
                    "http://google.com?cat&rd=$request",
                    "http://google.com?cat&rd=$request",
                ),
            ),
        ]);
        for (name, (input, expected)) in cases {
            assert_eq!(build_auth_sign_url(input), expected, "{name}");
        }
    }
}

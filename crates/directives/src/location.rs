//! Location selector and proxy-pass builders
//!
//! The selector decides how NGINX matches a request to a location; the
//! proxy-pass block carries the statements executed once it matches. Both
//! derive from the same rewrite decision: a rewrite is active iff the
//! location's target is non-empty and differs from its path.

use tracing::trace;

use janus_model::{Backend, Location};

/// Catch-all selector used when the root path carries a rewrite.
const CATCH_ALL: &str = "~* /";

/// Prefix of synthesized sticky upstream names.
const STICKY_PREFIX: &str = "sticky-";

/// Build the selector pattern for a location.
///
/// A pass-through location (no rewrite, or a rewrite onto its own path)
/// matches on the literal path. With an active rewrite the selector becomes a
/// case-insensitive pattern anchored at the path, capturing the remainder of
/// the request path into the `baseuri` group. A trailing slash in the path is
/// part of the anchor; a path without one gets an optional-slash marker so
/// both `/x` and `/x/...` match.
///
/// Path segments are inserted verbatim, without regex escaping: paths are
/// validated by the cluster API before they reach this layer, and escaping
/// would change the emitted pattern for every path containing `.` or `-`.
pub fn build_location(location: &Location) -> String {
    let path = &location.path;
    let target = &location.rewrite.target;

    if target.is_empty() || target == path {
        return path.clone();
    }
    if path == "/" {
        return CATCH_ALL.to_string();
    }
    if path.ends_with('/') {
        format!("~* ^{path}(?<baseuri>.*)")
    } else {
        format!(r"~* ^{path}\/?(?<baseuri>.*)")
    }
}

/// Build the ordered statement list forwarding a location to its upstream.
///
/// Emits, in fixed order: the rewrite statements implied by the location's
/// rewrite policy, the `X-Forwarded-Prefix` header when requested, the
/// `proxy_pass` statement, and the base-href injection when requested. The
/// header and the injection only apply while a rewrite is active; both exist
/// to compensate for the prefix the rewrite strips.
///
/// The upstream name defaults to the location's backend reference and is
/// overridden with the synthesized sticky upstream when the backend has a
/// cookie affinity entry for `(host, path)`. A backend marked secure is
/// reached over `https`.
pub fn build_proxy_pass(host: &str, backends: &[Backend], location: &Location) -> Vec<String> {
    let path = &location.path;
    let target = &location.rewrite.target;

    let mut upstream = location.backend.clone();
    let mut proto = "http";
    if let Some(backend) = backends.iter().find(|b| b.name == location.backend) {
        if backend.secure {
            proto = "https";
        }
        if backend.is_sticky(host, path) {
            trace!(host, path = %path, backend = %backend.name, "using sticky upstream");
            upstream = format!("{STICKY_PREFIX}{upstream}");
        }
    }

    let proxy_pass = format!("proxy_pass {proto}://{upstream};");
    if target.is_empty() || target == path {
        return vec![proxy_pass];
    }

    // The rewrite pattern needs the prefix in slash-terminated form so the
    // capture starts after the separator.
    let prefix = if path.ends_with('/') {
        path.clone()
    } else {
        format!("{path}/")
    };

    let mut statements = Vec::with_capacity(5);
    if target == "/" {
        statements.push(format!("rewrite {prefix}(.*) /$1 break;"));
        // A request for the bare prefix itself carries nothing to capture.
        statements.push(format!("rewrite {path} / break;"));
    } else {
        statements.push(format!("rewrite {prefix}(.*) {target}/$1 break;"));
    }

    if location.x_forwarded_prefix {
        statements.push(format!("proxy_set_header X-Forwarded-Prefix \"{prefix}\";"));
    }

    statements.push(proxy_pass);

    if location.rewrite.add_base_url {
        let scheme = if location.rewrite.base_url_scheme.is_empty() {
            "$scheme"
        } else {
            location.rewrite.base_url_scheme.as_str()
        };
        statements.push(format!(
            r#"subs_filter '(<(?:H|h)(?:E|e)(?:A|a)(?:D|d)(?:[^">]|"[^"]*")*>)' '$1<base href="{scheme}://$http_host{prefix}$baseuri">' ro;"#
        ));
    }

    statements
}

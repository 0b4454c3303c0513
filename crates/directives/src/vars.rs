//! NGINX variable naming
//!
//! Directive text frequently needs a variable name derived from a model
//! string: the inbound-header variable for a header name, or a map-block
//! variable identifying a denied `(host, path)` pair. Every derivation here
//! is a pure function of its input, with no process-local state, so
//! independent render passes and independent processes agree on every
//! generated name.

use xxhash_rust::xxh3::xxh3_64;

/// Variable prefix NGINX gives inbound request headers.
const HTTP_VAR_PREFIX: &str = "$http_";

/// Prefix of generated deny-variable names.
const DENY_VAR_PREFIX: &str = "$deny_";

/// Turn a header name into the form NGINX embeds in variable names:
/// lowercase, with `-` replaced by `_`.
pub(crate) fn variable_name(header: &str) -> String {
    header.to_lowercase().replace('-', "_")
}

/// Build the inbound-header variable for a header name.
///
/// `X-Forwarded-For` becomes `$http_x_forwarded_for`.
pub fn build_forwarded_for(header: &str) -> String {
    format!("{HTTP_VAR_PREFIX}{}", variable_name(header))
}

/// Derive the deny-variable name for an identifying key (host plus path).
///
/// The name is a stable content hash of the key rendered in hex: equal keys
/// yield equal names within and across processes, so rolling restarts keep
/// generated identifiers aligned with external references to them.
pub fn build_deny_variable(key: &str) -> String {
    format!("{DENY_VAR_PREFIX}{:x}", xxh3_64(key.as_bytes()))
}

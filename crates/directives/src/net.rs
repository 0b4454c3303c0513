//! Network address formatting
//!
//! NGINX requires IPv6 literals in bracketed form wherever an address is
//! followed by further syntax, as in resolver lists.

use std::net::IpAddr;

/// How long resolver answers stay valid.
const RESOLVER_VALIDITY: &str = "valid=30s;";

/// Bracket an address iff it is a textual IPv6 form.
///
/// IPv4 literals, hostnames, and anything unrecognizable (including the
/// empty string) pass through unchanged.
pub fn format_ip(address: &str) -> String {
    if address.contains(':') {
        format!("[{address}]")
    } else {
        address.to_string()
    }
}

/// Build the resolver directive for a set of nameservers.
///
/// Every address is listed in one statement, bracket-formatted where needed.
/// An empty set produces no directive.
pub fn build_resolvers(nameservers: &[IpAddr]) -> String {
    if nameservers.is_empty() {
        return String::new();
    }
    let mut parts = Vec::with_capacity(nameservers.len() + 2);
    parts.push("resolver".to_string());
    for ns in nameservers {
        parts.push(format_ip(&ns.to_string()));
    }
    parts.push(RESOLVER_VALIDITY.to_string());
    parts.join(" ")
}

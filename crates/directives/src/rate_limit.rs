//! Rate limit directive emission

use janus_model::Location;

/// Build the rate limit statements for a location.
///
/// Statements are emitted in fixed order: connection limit, RPS zone, RPM
/// zone, rate-after threshold, byte-rate cap. Request zones reject beyond
/// their burst immediately instead of queueing (`nodelay`). A sub-policy
/// whose controlling value is zero is omitted entirely, never rendered as a
/// zero-valued directive.
pub fn build_rate_limit(location: &Location) -> Vec<String> {
    let policy = &location.rate_limit;
    let mut limits = Vec::new();

    if policy.connections.is_active() {
        limits.push(format!(
            "limit_conn {} {};",
            policy.connections.name, policy.connections.limit
        ));
    }
    if policy.rps.is_active() {
        limits.push(format!(
            "limit_req zone={} burst={} nodelay;",
            policy.rps.name, policy.rps.burst
        ));
    }
    if policy.rpm.is_active() {
        limits.push(format!(
            "limit_req zone={} burst={} nodelay;",
            policy.rpm.name, policy.rpm.burst
        ));
    }
    if policy.limit_rate_after > 0 {
        limits.push(format!("limit_rate_after {}k;", policy.limit_rate_after));
    }
    if policy.limit_rate > 0 {
        limits.push(format!("limit_rate {}k;", policy.limit_rate));
    }

    limits
}

//! Per-location rate limit policy

use serde::{Deserialize, Serialize};

/// Rate limit policy attached to a location.
///
/// Each sub-policy is independent and disabled while its controlling value is
/// zero. A disabled sub-policy produces no directive at all.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLimit {
    /// Concurrent connection limit.
    #[serde(default)]
    pub connections: RateLimitZone,

    /// Requests-per-second zone.
    #[serde(default)]
    pub rps: RateLimitZone,

    /// Requests-per-minute zone.
    #[serde(default)]
    pub rpm: RateLimitZone,

    /// Response size after which `limit_rate` applies, in kilobytes. Zero
    /// disables the threshold.
    #[serde(default)]
    pub limit_rate_after: u32,

    /// Response byte-rate cap, in kilobytes per second. Zero disables.
    #[serde(default)]
    pub limit_rate: u32,
}

/// One shared-memory rate limit zone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateLimitZone {
    /// Zone name, unique within a render pass.
    #[serde(default)]
    pub name: String,

    /// Limit enforced by the zone. Zero disables the zone.
    #[serde(default)]
    pub limit: u32,

    /// Burst allowance beyond the limit.
    #[serde(default)]
    pub burst: u32,
}

impl RateLimitZone {
    /// Whether this zone produces a directive.
    pub fn is_active(&self) -> bool {
        self.limit > 0
    }
}

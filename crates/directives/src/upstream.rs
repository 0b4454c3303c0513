//! Upstream retry-condition merging

/// Token enabling retries of non-idempotent requests.
const NON_IDEMPOTENT: &str = "non_idempotent";

/// Merge the retry-non-idempotent token into a next-upstream condition
/// string.
///
/// The token is appended only when requested and not already present as a
/// token, so the merge is idempotent and never duplicates a caller-supplied
/// occurrence.
pub fn build_next_upstream(next_upstream: &str, retry_non_idempotent: bool) -> String {
    let present = next_upstream
        .split_whitespace()
        .any(|token| token == NON_IDEMPOTENT);
    if retry_non_idempotent && !present {
        format!("{next_upstream} {NON_IDEMPOTENT}")
    } else {
        next_upstream.to_string()
    }
}

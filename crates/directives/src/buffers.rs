//! Buffer-size value validation

/// Check a client-body buffer size value: one or more decimal digits,
/// optionally followed by a single kilo or mega unit letter,
/// case-insensitive.
///
/// Absent, empty, and malformed values are invalid. This is the one builder
/// returning a verdict instead of text; the caller decides whether an
/// invalid value is fatal to the overall render.
pub fn is_valid_client_body_buffer_size(value: Option<&str>) -> bool {
    let Some(value) = value else {
        return false;
    };
    let digits = value.strip_suffix(['k', 'K', 'm', 'M']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_and_unit_suffixed_sizes() {
        assert!(is_valid_client_body_buffer_size(Some("1000")));
        assert!(is_valid_client_body_buffer_size(Some("1000k")));
        assert!(is_valid_client_body_buffer_size(Some("1000m")));
        assert!(is_valid_client_body_buffer_size(Some("1000K")));
        assert!(is_valid_client_body_buffer_size(Some("1000M")));
    }

    #[test]
    fn test_rejects_repeated_or_mixed_units() {
        assert!(!is_valid_client_body_buffer_size(Some("1000km")));
        assert!(!is_valid_client_body_buffer_size(Some("1000mk")));
        assert!(!is_valid_client_body_buffer_size(Some("1000kk")));
        assert!(!is_valid_client_body_buffer_size(Some("1000mm")));
    }

    #[test]
    fn test_rejects_empty_and_absent_input() {
        assert!(!is_valid_client_body_buffer_size(Some("")));
        assert!(!is_valid_client_body_buffer_size(None));
    }

    #[test]
    fn test_rejects_unit_without_digits() {
        assert!(!is_valid_client_body_buffer_size(Some("k")));
        assert!(!is_valid_client_body_buffer_size(Some("m")));
    }
}

//! Model validation
//!
//! Field validators plus the cross-reference pass the assembly layer runs
//! before invoking any directive builder. Malformed optional input inside a
//! valid model degrades to "feature omitted" in the builders; this module
//! catches the one true error class, a model that is wrong as a whole.

use std::collections::HashSet;

use tracing::{debug, warn};
use validator::Validate;

use crate::backend::Backend;
use crate::errors::{ModelError, ModelResult};
use crate::location::Location;

// ============================================================================
// Field Validators
// ============================================================================

/// Validate a location path: non-empty and absolute.
pub fn validate_path(path: &str) -> Result<(), validator::ValidationError> {
    if path.starts_with('/') {
        return Ok(());
    }
    let mut err = validator::ValidationError::new("invalid_path");
    err.message = Some(std::borrow::Cow::Owned(format!(
        "Invalid location path '{}'. Paths must be absolute (start with '/')",
        path
    )));
    Err(err)
}

// ============================================================================
// Cross-Reference Validation
// ============================================================================

/// Validate a full routing model before a render pass.
///
/// Runs field validation on every location, then verifies that each backend
/// reference resolves to a known backend.
pub fn validate_model(locations: &[Location], backends: &[Backend]) -> ModelResult<()> {
    for location in locations {
        location.validate()?;
    }

    let known: HashSet<&str> = backends.iter().map(|b| b.name.as_str()).collect();
    for location in locations {
        if !known.contains(location.backend.as_str()) {
            warn!(
                path = %location.path,
                backend = %location.backend,
                "location references unknown backend"
            );
            return Err(ModelError::UnknownBackend {
                path: location.path.clone(),
                backend: location.backend.clone(),
            });
        }
    }

    debug!(
        locations = locations.len(),
        backends = backends.len(),
        "routing model validated"
    );
    Ok(())
}

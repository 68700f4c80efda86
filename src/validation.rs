//! Input validation for user-supplied values.

use crate::error::{BasketError, Result};
use crate::season::FreshnessWeights;

/// Highest accent intensity.
pub const MAX_ACCENT: u8 = 100;

/// Maximum allowed length for a catalog or project ID.
pub const MAX_ID_LENGTH: usize = 50;

/// Characters forbidden in IDs and state directory names.
const FORBIDDEN_ID_CHARS: &[char] = &['/', '\\', '\0'];

pub fn validate_accent(accent: u8) -> Result<()> {
    if accent > MAX_ACCENT {
        return Err(BasketError::Validation(format!(
            "Accent must be between 0 and {}, got {}",
            MAX_ACCENT, accent
        )));
    }
    Ok(())
}

/// Validates an ID before it is looked up or written to a snapshot.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(BasketError::Validation("ID cannot be empty".to_string()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(BasketError::Validation(format!(
            "ID exceeds maximum length of {} characters",
            MAX_ID_LENGTH
        )));
    }
    if id.contains("..") {
        return Err(BasketError::Validation(
            "ID cannot contain '..' (path traversal)".to_string(),
        ));
    }
    for c in FORBIDDEN_ID_CHARS {
        if id.contains(*c) {
            return Err(BasketError::Validation(format!("ID cannot contain '{}'", c)));
        }
    }
    Ok(())
}

/// State directory must stay inside the project root.
pub fn validate_state_dir(dir: &str) -> Result<()> {
    use std::path::{Component, Path};

    if dir.trim().is_empty() {
        return Err(BasketError::Validation(
            "State directory cannot be empty".to_string(),
        ));
    }
    for component in Path::new(dir).components() {
        match component {
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(BasketError::Validation(format!(
                    "State directory must be relative to the project root: {}",
                    dir
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// An in-season item must never score below an out-of-season one.
pub fn validate_freshness(weights: &FreshnessWeights) -> Result<()> {
    if weights.in_season < weights.base {
        return Err(BasketError::Validation(format!(
            "freshness.in_season ({}) must be at least freshness.base ({})",
            weights.in_season, weights.base
        )));
    }
    Ok(())
}

//! Shared validation helpers for catalogue constructors.

use super::CatalogueValidationError;

/// Rejects blank values for a required text field.
pub(super) fn ensure_non_empty(
    value: &str,
    field: &'static str,
) -> Result<(), CatalogueValidationError> {
    if value.trim().is_empty() {
        return Err(CatalogueValidationError::EmptyField { field });
    }
    Ok(())
}

/// Validates a record identifier: non-empty and free of surrounding
/// whitespace, returned unchanged so callers can move it into place.
pub(super) fn validate_id(
    id: String,
    field: &'static str,
) -> Result<String, CatalogueValidationError> {
    if id.is_empty() || id.trim() != id {
        return Err(CatalogueValidationError::InvalidId { field });
    }
    Ok(id)
}

/// Rejects average ratings outside the displayed 0.0 to 5.0 scale.
pub(super) fn ensure_valid_rating(
    rating: f32,
    field: &'static str,
) -> Result<(), CatalogueValidationError> {
    if !(0.0..=5.0).contains(&rating) {
        return Err(CatalogueValidationError::InvalidRating { field, rating });
    }
    Ok(())
}

/// Rejects star ratings outside the 1 to 5 range a reviewer can pick.
pub(super) fn ensure_star_rating(
    rating: u8,
    field: &'static str,
) -> Result<(), CatalogueValidationError> {
    if !(1..=5).contains(&rating) {
        return Err(CatalogueValidationError::StarRatingOutOfRange { field, rating });
    }
    Ok(())
}

/// Rejects zero for counts that must be at least one.
pub(super) fn ensure_positive(
    value: u32,
    field: &'static str,
) -> Result<(), CatalogueValidationError> {
    if value == 0 {
        return Err(CatalogueValidationError::ZeroValue { field });
    }
    Ok(())
}

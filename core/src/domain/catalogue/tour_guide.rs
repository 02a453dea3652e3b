//! Tour guide entity.

use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{ensure_non_empty, ensure_valid_rating, validate_id};

/// Input payload for [`TourGuide::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourGuideDraft {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub description: String,
    pub experience_years: u32,
    pub languages: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub email: String,
    pub phone: String,
}

/// A certified local guide from the guide directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourGuide {
    pub id: String,
    pub name: String,
    pub specialty: String,
    pub description: String,
    pub experience_years: u32,
    pub languages: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    pub email: String,
    pub phone: String,
}

impl TourGuide {
    /// Validate and construct a tour guide.
    pub fn new(draft: TourGuideDraft) -> Result<Self, CatalogueValidationError> {
        let id = validate_id(draft.id, "tour_guide.id")?;
        ensure_non_empty(&draft.name, "tour_guide.name")?;
        ensure_non_empty(&draft.specialty, "tour_guide.specialty")?;
        ensure_valid_rating(draft.rating, "tour_guide.rating")?;

        Ok(Self {
            id,
            name: draft.name,
            specialty: draft.specialty,
            description: draft.description,
            experience_years: draft.experience_years,
            languages: draft.languages,
            rating: draft.rating,
            review_count: draft.review_count,
            email: draft.email,
            phone: draft.phone,
        })
    }
}

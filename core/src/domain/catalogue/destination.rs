//! Destination entity and its reviews.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{ensure_non_empty, ensure_star_rating, validate_id};

/// Category a destination is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationCategory {
    Mountain,
    Temple,
    City,
    Wildlife,
    Lake,
    Trekking,
}

impl DestinationCategory {
    /// Stable lowercase key used for filtering and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mountain => "mountain",
            Self::Temple => "temple",
            Self::City => "city",
            Self::Wildlife => "wildlife",
            Self::Lake => "lake",
            Self::Trekking => "trekking",
        }
    }

    /// Human-readable label shown on filter chips.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mountain => "Mountains",
            Self::Temple => "Temples & Heritage",
            Self::City => "Cities",
            Self::Wildlife => "Wildlife",
            Self::Lake => "Lakes",
            Self::Trekking => "Trekking",
        }
    }
}

impl fmt::Display for DestinationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DestinationCategory {
    type Err = CatalogueValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "mountain" => Ok(Self::Mountain),
            "temple" => Ok(Self::Temple),
            "city" => Ok(Self::City),
            "wildlife" => Ok(Self::Wildlife),
            "lake" => Ok(Self::Lake),
            "trekking" => Ok(Self::Trekking),
            other => Err(CatalogueValidationError::UnknownCategory {
                value: other.to_owned(),
            }),
        }
    }
}

/// Input payload for [`Review::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ReviewDraft {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

/// A traveller review owned by exactly one destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub rating: u8,
    pub comment: String,
    pub date: NaiveDate,
}

impl Review {
    /// Validate and construct a review.
    pub fn new(draft: ReviewDraft) -> Result<Self, CatalogueValidationError> {
        let id = validate_id(draft.id, "review.id")?;
        ensure_non_empty(&draft.author, "review.author")?;
        ensure_star_rating(draft.rating, "review.rating")?;
        ensure_non_empty(&draft.comment, "review.comment")?;

        Ok(Self {
            id,
            author: draft.author,
            rating: draft.rating,
            comment: draft.comment,
            date: draft.date,
        })
    }
}

/// Input payload for [`Destination::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DestinationDraft {
    pub id: String,
    pub name: String,
    pub category: DestinationCategory,
    pub short_description: String,
    pub full_description: String,
    pub images: Vec<String>,
    pub things_to_do: Vec<String>,
    pub local_foods: Vec<String>,
    pub best_season: String,
    pub reviews: Vec<ReviewDraft>,
}

/// A destination card and detail page record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub category: DestinationCategory,
    pub short_description: String,
    pub full_description: String,
    pub images: Vec<String>,
    pub things_to_do: Vec<String>,
    pub local_foods: Vec<String>,
    pub best_season: String,
    pub reviews: Vec<Review>,
}

impl Destination {
    /// Validate and construct a destination.
    pub fn new(draft: DestinationDraft) -> Result<Self, CatalogueValidationError> {
        let id = validate_id(draft.id, "destination.id")?;
        ensure_non_empty(&draft.name, "destination.name")?;
        ensure_non_empty(&draft.short_description, "destination.short_description")?;
        ensure_non_empty(&draft.full_description, "destination.full_description")?;

        let reviews = draft
            .reviews
            .into_iter()
            .map(Review::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            id,
            name: draft.name,
            category: draft.category,
            short_description: draft.short_description,
            full_description: draft.full_description,
            images: draft.images,
            things_to_do: draft.things_to_do,
            local_foods: draft.local_foods,
            best_season: draft.best_season,
            reviews,
        })
    }
}

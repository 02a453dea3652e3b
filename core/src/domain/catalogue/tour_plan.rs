//! Tour plan entity.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CatalogueValidationError;
use super::validation::{ensure_non_empty, ensure_positive, validate_id};

/// Price and pace tier a plan is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanType {
    Budget,
    Standard,
    Luxury,
    Trekking,
}

impl PlanType {
    /// Stable lowercase key used for filtering and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Standard => "standard",
            Self::Luxury => "luxury",
            Self::Trekking => "trekking",
        }
    }

    /// Human-readable label shown on filter chips.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Budget => "Budget Friendly",
            Self::Standard => "Standard",
            Self::Luxury => "Luxury",
            Self::Trekking => "Trekking",
        }
    }
}

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlanType {
    type Err = CatalogueValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "budget" => Ok(Self::Budget),
            "standard" => Ok(Self::Standard),
            "luxury" => Ok(Self::Luxury),
            "trekking" => Ok(Self::Trekking),
            other => Err(CatalogueValidationError::UnknownPlanType {
                value: other.to_owned(),
            }),
        }
    }
}

/// One day of a plan itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
}

/// Input payload for [`TourPlan::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourPlanDraft {
    pub id: String,
    pub title: String,
    pub plan_type: PlanType,
    pub duration_days: u32,
    pub price_usd: u32,
    pub description: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
}

/// A curated itinerary from the plan catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourPlan {
    pub id: String,
    pub title: String,
    pub plan_type: PlanType,
    pub duration_days: u32,
    pub price_usd: u32,
    pub description: String,
    pub highlights: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub inclusions: Vec<String>,
    pub exclusions: Vec<String>,
}

impl TourPlan {
    /// Validate and construct a tour plan.
    pub fn new(draft: TourPlanDraft) -> Result<Self, CatalogueValidationError> {
        let id = validate_id(draft.id, "tour_plan.id")?;
        ensure_non_empty(&draft.title, "tour_plan.title")?;
        ensure_non_empty(&draft.description, "tour_plan.description")?;
        ensure_positive(draft.duration_days, "tour_plan.duration_days")?;

        Ok(Self {
            id,
            title: draft.title,
            plan_type: draft.plan_type,
            duration_days: draft.duration_days,
            price_usd: draft.price_usd,
            description: draft.description,
            highlights: draft.highlights,
            itinerary: draft.itinerary,
            inclusions: draft.inclusions,
            exclusions: draft.exclusions,
        })
    }
}

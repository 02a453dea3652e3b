//! Content record types.
//!
//! This module defines the raw record shapes stored in the content registry.
//! These types are independent of the application core's domain types to
//! avoid circular dependencies; the core converts them into validated domain
//! entities at the point of use.

use serde::{Deserialize, Serialize};

/// A traveller review attached to a destination record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ReviewRecord {
    /// Unique identifier within the destination's review list.
    pub id: String,
    /// Display name of the reviewer.
    pub user_name: String,
    /// Star rating from 1 to 5.
    pub rating: u8,
    /// Free-text review body.
    pub comment: String,
    /// Review date in `YYYY-MM-DD` form.
    pub date: String,
}

/// A destination listed on the places pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DestinationRecord {
    /// Unique identifier within the destinations collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Category key: mountain, temple, city, wildlife, lake, or trekking.
    pub category: String,
    /// One-line teaser shown on listing cards.
    pub short_description: String,
    /// Long-form description shown on the detail page.
    pub full_description: String,
    /// Image references, first entry is the hero image.
    pub images: Vec<String>,
    /// Suggested activities.
    pub things_to_do: Vec<String>,
    /// Local dishes worth trying.
    pub local_foods: Vec<String>,
    /// Recommended season for a visit.
    pub best_season: String,
    /// Bundled traveller reviews.
    pub reviews: Vec<ReviewRecord>,
}

/// A blog article listed on the travel stories pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct BlogPostRecord {
    /// Unique identifier within the blog posts collection.
    pub id: String,
    /// Article title.
    pub title: String,
    /// Short teaser shown on listing cards.
    pub excerpt: String,
    /// Full article body.
    pub content: String,
    /// Editorial category label.
    pub category: String,
    /// Free-form topic tags.
    pub tags: Vec<String>,
    /// Author display name.
    pub author: String,
    /// Publication date in `YYYY-MM-DD` form.
    pub date: String,
    /// Cover image reference.
    pub image: String,
    /// Estimated reading time in minutes.
    pub read_minutes: u32,
}

/// A certified local guide listed in the guide directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourGuideRecord {
    /// Unique identifier within the tour guides collection.
    pub id: String,
    /// Guide's display name.
    pub name: String,
    /// Area of expertise shown under the name.
    pub specialty: String,
    /// Short biography.
    pub description: String,
    /// Years of guiding experience.
    pub experience_years: u32,
    /// Languages the guide speaks.
    pub languages: Vec<String>,
    /// Average rating from 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews backing the rating.
    pub review_count: u32,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

/// One day of a tour plan itinerary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct ItineraryDayRecord {
    /// Day number, starting at 1.
    pub day: u32,
    /// Short headline for the day.
    pub title: String,
    /// What happens on this day.
    pub description: String,
}

/// A curated tour plan listed in the plan catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct TourPlanRecord {
    /// Unique identifier within the tour plans collection.
    pub id: String,
    /// Plan title.
    pub title: String,
    /// Plan type key: budget, standard, luxury, or trekking.
    pub plan_type: String,
    /// Total duration in days.
    pub duration_days: u32,
    /// Price per person in US dollars.
    pub price_usd: u32,
    /// Long-form plan description.
    pub description: String,
    /// Selling points shown on the plan card.
    pub highlights: Vec<String>,
    /// Day-by-day itinerary.
    pub itinerary: Vec<ItineraryDayRecord>,
    /// What the price includes.
    pub inclusions: Vec<String>,
    /// What the price does not include.
    pub exclusions: Vec<String>,
}

/// Role attached to a demo identity.
///
/// Mirrors the core's `Role` enum without creating a dependency on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleRecord {
    /// Regular signed-in visitor.
    #[default]
    User,
    /// Content dashboard administrator.
    Admin,
}

/// A demo identity known to the sign-in flow.
///
/// The shared demo secret is intentionally not stored here; the application
/// core attaches it when it builds its identity store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct IdentityRecord {
    /// Unique identifier within the demo identities collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Sign-in email address.
    pub email: String,
    /// Assigned role.
    pub role: RoleRecord,
    /// Avatar image reference.
    pub avatar: String,
}

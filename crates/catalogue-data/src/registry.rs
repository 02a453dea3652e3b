//! Content registry parsing and validation.
//!
//! This module defines the versioned registry that holds every content
//! collection the site renders: destinations, blog posts, tour guides, tour
//! plans, and the demo identities known to the sign-in flow. The registry is
//! loaded from JSON and validated before any record is handed out.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::records::{
    BlogPostRecord, DestinationRecord, IdentityRecord, TourGuideRecord, TourPlanRecord,
};

/// Current supported registry version.
const SUPPORTED_VERSION: u32 = 1;

/// The content registry bundled into this crate.
const BUILTIN_JSON: &str = include_str!("content.json");

/// A validated content registry.
///
/// Collections keep their JSON order; that order is the canonical catalogue
/// order the rest of the application preserves. Records are immutable once
/// the registry has been constructed.
///
/// # Example
///
/// ```
/// use catalogue_data::ContentRegistry;
///
/// let registry = ContentRegistry::builtin();
/// assert!(!registry.destinations().is_empty());
/// assert!(!registry.demo_identities().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ContentRegistry {
    version: u32,
    destinations: Vec<DestinationRecord>,
    blog_posts: Vec<BlogPostRecord>,
    tour_guides: Vec<TourGuideRecord>,
    tour_plans: Vec<TourPlanRecord>,
    demo_identities: Vec<IdentityRecord>,
}

impl ContentRegistry {
    /// Parses a content registry from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if:
    /// - The JSON is malformed or contains unknown fields
    /// - The version is unsupported
    /// - Any collection contains duplicate, empty, or padded ids
    /// - Any rating is outside its permitted range
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let raw: RawContentRegistry =
            serde_json::from_str(json).map_err(|e| RegistryError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a content registry from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, RegistryError> {
        let contents = fs::read_to_string(path).map_err(|e| RegistryError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Returns the content registry bundled into this crate.
    ///
    /// # Panics
    ///
    /// Panics if the bundled JSON fails validation. The bundled content is
    /// fixed at compile time, so a panic here indicates a defect in the
    /// shipped data rather than a runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_JSON)
            .unwrap_or_else(|err| panic!("bundled content registry is invalid: {err}"))
    }

    /// Registry schema version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Destinations in canonical catalogue order.
    #[must_use]
    pub fn destinations(&self) -> &[DestinationRecord] {
        &self.destinations
    }

    /// Blog posts in canonical catalogue order.
    #[must_use]
    pub fn blog_posts(&self) -> &[BlogPostRecord] {
        &self.blog_posts
    }

    /// Tour guides in canonical catalogue order.
    #[must_use]
    pub fn tour_guides(&self) -> &[TourGuideRecord] {
        &self.tour_guides
    }

    /// Tour plans in canonical catalogue order.
    #[must_use]
    pub fn tour_plans(&self) -> &[TourPlanRecord] {
        &self.tour_plans
    }

    /// Demo identities known to the sign-in flow.
    #[must_use]
    pub fn demo_identities(&self) -> &[IdentityRecord] {
        &self.demo_identities
    }

    /// Serialises the registry back to pretty-printed canonical JSON.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::ParseError`] if serialisation fails, which is
    /// not expected for a validated registry.
    pub fn to_json_pretty(&self) -> Result<String, RegistryError> {
        let raw = RawContentRegistry {
            version: self.version,
            destinations: self.destinations.clone(),
            blog_posts: self.blog_posts.clone(),
            tour_guides: self.tour_guides.clone(),
            tour_plans: self.tour_plans.clone(),
            demo_identities: self.demo_identities.clone(),
        };
        serde_json::to_string_pretty(&raw).map_err(|e| RegistryError::ParseError {
            message: e.to_string(),
        })
    }

    fn from_raw(raw: RawContentRegistry) -> Result<Self, RegistryError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(RegistryError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        ensure_unique_ids("destinations", raw.destinations.iter().map(|d| d.id.as_str()))?;
        ensure_unique_ids("blogPosts", raw.blog_posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids("tourGuides", raw.tour_guides.iter().map(|g| g.id.as_str()))?;
        ensure_unique_ids("tourPlans", raw.tour_plans.iter().map(|p| p.id.as_str()))?;
        ensure_unique_ids(
            "demoIdentities",
            raw.demo_identities.iter().map(|i| i.id.as_str()),
        )?;

        for destination in &raw.destinations {
            ensure_unique_ids(
                "reviews",
                destination.reviews.iter().map(|r| r.id.as_str()),
            )?;
            for review in &destination.reviews {
                if !(1..=5).contains(&review.rating) {
                    return Err(RegistryError::InvalidRating {
                        collection: "destinations",
                        id: destination.id.clone(),
                        detail: format!("review rating {} is outside 1..=5", review.rating),
                    });
                }
            }
        }

        for guide in &raw.tour_guides {
            if !(0.0..=5.0).contains(&guide.rating) {
                return Err(RegistryError::InvalidRating {
                    collection: "tourGuides",
                    id: guide.id.clone(),
                    detail: format!("rating {} is outside 0.0..=5.0", guide.rating),
                });
            }
        }

        Ok(Self {
            version: raw.version,
            destinations: raw.destinations,
            blog_posts: raw.blog_posts,
            tour_guides: raw.tour_guides,
            tour_plans: raw.tour_plans,
            demo_identities: raw.demo_identities,
        })
    }
}

fn ensure_unique_ids<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if id.is_empty() || id.trim() != id {
            return Err(RegistryError::InvalidId {
                collection,
                id: id.to_owned(),
            });
        }
        if !seen.insert(id) {
            return Err(RegistryError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

/// Wire-level mirror of the registry, prior to validation.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct RawContentRegistry {
    version: u32,
    destinations: Vec<DestinationRecord>,
    blog_posts: Vec<BlogPostRecord>,
    tour_guides: Vec<TourGuideRecord>,
    tour_plans: Vec<TourPlanRecord>,
    demo_identities: Vec<IdentityRecord>,
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use rstest::rstest;

    use super::*;

    fn minimal_registry_json(version: u32) -> String {
        format!(
            r#"{{
                "version": {version},
                "destinations": [],
                "blogPosts": [],
                "tourGuides": [],
                "tourPlans": [],
                "demoIdentities": []
            }}"#
        )
    }

    #[rstest]
    fn empty_registry_is_valid() {
        let registry =
            ContentRegistry::from_json(&minimal_registry_json(1)).expect("valid registry");
        assert_eq!(registry.version(), 1);
        assert!(registry.destinations().is_empty());
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    fn unsupported_version_is_rejected(#[case] version: u32) {
        let err = ContentRegistry::from_json(&minimal_registry_json(version))
            .expect_err("version must be rejected");
        assert_eq!(
            err,
            RegistryError::UnsupportedVersion {
                expected: 1,
                actual: version,
            }
        );
    }

    #[rstest]
    fn malformed_json_is_rejected() {
        let err = ContentRegistry::from_json("{ not json").expect_err("parse must fail");
        assert!(matches!(err, RegistryError::ParseError { .. }));
    }

    #[rstest]
    fn duplicate_identity_ids_are_rejected() {
        let json = r#"{
            "version": 1,
            "destinations": [],
            "blogPosts": [],
            "tourGuides": [],
            "tourPlans": [],
            "demoIdentities": [
                {"id": "1", "name": "A", "email": "a@example.com", "role": "user", "avatar": "a"},
                {"id": "1", "name": "B", "email": "b@example.com", "role": "user", "avatar": "b"}
            ]
        }"#;
        let err = ContentRegistry::from_json(json).expect_err("duplicate ids must be rejected");
        assert_eq!(
            err,
            RegistryError::DuplicateId {
                collection: "demoIdentities",
                id: "1".to_owned(),
            }
        );
    }

    #[rstest]
    #[case("")]
    #[case(" padded ")]
    fn invalid_identity_ids_are_rejected(#[case] id: &str) {
        let json = format!(
            r#"{{
                "version": 1,
                "destinations": [],
                "blogPosts": [],
                "tourGuides": [],
                "tourPlans": [],
                "demoIdentities": [
                    {{"id": "{id}", "name": "A", "email": "a@example.com", "role": "user", "avatar": "a"}}
                ]
            }}"#
        );
        let err = ContentRegistry::from_json(&json).expect_err("id must be rejected");
        assert!(matches!(err, RegistryError::InvalidId { .. }));
    }

    #[rstest]
    fn out_of_range_guide_rating_is_rejected() {
        let json = r#"{
            "version": 1,
            "destinations": [],
            "blogPosts": [],
            "tourGuides": [
                {
                    "id": "g1", "name": "G", "specialty": "s", "description": "d",
                    "experienceYears": 3, "languages": ["English"], "rating": 5.5,
                    "reviewCount": 10, "email": "g@example.com", "phone": "+977 1"
                }
            ],
            "tourPlans": [],
            "demoIdentities": []
        }"#;
        let err = ContentRegistry::from_json(json).expect_err("rating must be rejected");
        assert!(matches!(
            err,
            RegistryError::InvalidRating {
                collection: "tourGuides",
                ..
            }
        ));
    }

    #[rstest]
    fn round_trip_preserves_registry() {
        let registry = ContentRegistry::builtin();
        let json = registry.to_json_pretty().expect("serialise registry");
        let reparsed = ContentRegistry::from_json(&json).expect("reparse registry");
        assert_eq!(reparsed, registry);
    }
}

//! Catalogue domain types.
//!
//! These types model the read-only content catalogue as validated domain
//! entities owned by the domain layer. Records are constructed once from
//! drafts at load time and never mutated afterwards; the aggregate exposes
//! ordered slices and id lookups only.

use std::collections::BTreeSet;
use std::fmt;

mod blog_post;
mod destination;
mod tour_guide;
mod tour_plan;
mod validation;


pub use blog_post::{BlogPost, BlogPostDraft};
pub use destination::{Destination, DestinationCategory, DestinationDraft, Review, ReviewDraft};
pub use tour_guide::{TourGuide, TourGuideDraft};
pub use tour_plan::{ItineraryDay, PlanType, TourPlan, TourPlanDraft};

/// Validation errors returned by catalogue constructors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogueValidationError {
    EmptyField {
        field: &'static str,
    },
    InvalidId {
        field: &'static str,
    },
    InvalidRating {
        field: &'static str,
        rating: f32,
    },
    StarRatingOutOfRange {
        field: &'static str,
        rating: u8,
    },
    ZeroValue {
        field: &'static str,
    },
    DuplicateId {
        collection: &'static str,
        id: String,
    },
    UnknownCategory {
        value: String,
    },
    UnknownPlanType {
        value: String,
    },
}

impl fmt::Display for CatalogueValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyField { field } => write!(f, "{field} must not be empty"),
            Self::InvalidId { field } => {
                write!(f, "{field} must be non-empty without surrounding whitespace")
            }
            Self::InvalidRating { field, rating } => {
                write!(f, "{field} must be between 0.0 and 5.0 (got {rating})")
            }
            Self::StarRatingOutOfRange { field, rating } => {
                write!(f, "{field} must be between 1 and 5 (got {rating})")
            }
            Self::ZeroValue { field } => write!(f, "{field} must be at least 1"),
            Self::DuplicateId { collection, id } => {
                write!(f, "duplicate id '{id}' in {collection}")
            }
            Self::UnknownCategory { value } => {
                write!(f, "unknown destination category '{value}'")
            }
            Self::UnknownPlanType { value } => write!(f, "unknown plan type '{value}'"),
        }
    }
}

impl std::error::Error for CatalogueValidationError {}

/// The read-only content catalogue.
///
/// Collections keep their load order; that order is what listing pages and
/// the search engine preserve. Lookups by id return `None` for unknown ids,
/// the expected "not found" outcome the presentation layer renders as a
/// fallback view.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalogue {
    destinations: Vec<Destination>,
    blog_posts: Vec<BlogPost>,
    tour_guides: Vec<TourGuide>,
    tour_plans: Vec<TourPlan>,
}

impl Catalogue {
    /// Assemble a catalogue from validated records.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueValidationError::DuplicateId`] if two records in
    /// the same collection share an id.
    pub fn new(
        destinations: Vec<Destination>,
        blog_posts: Vec<BlogPost>,
        tour_guides: Vec<TourGuide>,
        tour_plans: Vec<TourPlan>,
    ) -> Result<Self, CatalogueValidationError> {
        ensure_unique("destinations", destinations.iter().map(|d| d.id.as_str()))?;
        ensure_unique("blog posts", blog_posts.iter().map(|p| p.id.as_str()))?;
        ensure_unique("tour guides", tour_guides.iter().map(|g| g.id.as_str()))?;
        ensure_unique("tour plans", tour_plans.iter().map(|p| p.id.as_str()))?;

        Ok(Self {
            destinations,
            blog_posts,
            tour_guides,
            tour_plans,
        })
    }

    /// Destinations in load order.
    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    /// Blog posts in load order.
    pub fn blog_posts(&self) -> &[BlogPost] {
        &self.blog_posts
    }

    /// Tour guides in load order.
    pub fn tour_guides(&self) -> &[TourGuide] {
        &self.tour_guides
    }

    /// Tour plans in load order.
    pub fn tour_plans(&self) -> &[TourPlan] {
        &self.tour_plans
    }

    /// Looks up a destination by id.
    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }

    /// Looks up a blog post by id.
    pub fn blog_post(&self, id: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.id == id)
    }

    /// Looks up a tour guide by id.
    pub fn tour_guide(&self, id: &str) -> Option<&TourGuide> {
        self.tour_guides.iter().find(|g| g.id == id)
    }

    /// Looks up a tour plan by id.
    pub fn tour_plan(&self, id: &str) -> Option<&TourPlan> {
        self.tour_plans.iter().find(|p| p.id == id)
    }
}

fn ensure_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogueValidationError> {
    let mut seen = BTreeSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogueValidationError::DuplicateId {
                collection,
                id: id.to_owned(),
            });
        }
    }
    Ok(())
}

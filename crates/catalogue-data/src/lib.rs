//! Static WanderNepal content registry.
//!
//! This crate bundles the content catalogue the site renders: destinations,
//! blog posts, tour guides, tour plans, and the demo identities known to the
//! sign-in flow. The registry is versioned JSON, validated on load, and kept
//! independent of the application core's domain types so the two can evolve
//! separately.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading registries from JSON strings or files
//! - The bundled registry via [`ContentRegistry::builtin`]
//! - Id uniqueness and rating-range validation
//! - Atomic JSON export for tooling
//!
//! # Example
//!
//! ```
//! use catalogue_data::ContentRegistry;
//!
//! let registry = ContentRegistry::builtin();
//! let everest = registry
//!     .destinations()
//!     .iter()
//!     .find(|d| d.id == "mount-everest")
//!     .expect("bundled destination");
//!
//! assert_eq!(everest.category, "mountain");
//! ```

mod error;
mod export;
mod records;
mod registry;

pub use error::RegistryError;
pub use export::write_registry;
pub use records::{
    BlogPostRecord, DestinationRecord, IdentityRecord, ItineraryDayRecord, ReviewRecord,
    RoleRecord, TourGuideRecord, TourPlanRecord,
};
pub use registry::ContentRegistry;

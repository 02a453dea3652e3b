//! Catalogue and identity seeding from the bundled content registry.
//!
//! The `catalogue-data` crate ships raw records that know nothing about the
//! domain layer; this module converts them into validated entities and
//! builds the demo identity store the sign-in flow runs against.

use chrono::NaiveDate;
use thiserror::Error;

use catalogue_data::{
    BlogPostRecord, ContentRegistry, DestinationRecord, IdentityRecord, ReviewRecord, RoleRecord,
    TourGuideRecord, TourPlanRecord,
};

use crate::domain::catalogue::{
    BlogPost, BlogPostDraft, Catalogue, CatalogueValidationError, Destination, DestinationDraft,
    ItineraryDay, ReviewDraft, TourGuide, TourGuideDraft, TourPlan, TourPlanDraft,
};
use crate::domain::ports::StoredIdentity;
use crate::domain::user::{EmailAddress, Role, UserProfile, UserValidationError};
use crate::outbound::InMemoryIdentityStore;

/// The secret every demo identity accepts at sign-in.
pub const DEMO_SHARED_SECRET: &str = "password";

/// Errors raised while converting registry records into domain entities.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeedError {
    /// A record failed catalogue validation.
    #[error(transparent)]
    Catalogue(#[from] CatalogueValidationError),
    /// A demo identity failed profile validation.
    #[error(transparent)]
    Profile(#[from] UserValidationError),
    /// A date field is not in `YYYY-MM-DD` form.
    #[error("record '{record}' carries an invalid date '{value}'")]
    InvalidDate { record: String, value: String },
}

/// Builds the validated catalogue from a content registry.
pub fn load_catalogue(registry: &ContentRegistry) -> Result<Catalogue, SeedError> {
    let destinations = registry
        .destinations()
        .iter()
        .map(destination_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let blog_posts = registry
        .blog_posts()
        .iter()
        .map(blog_post_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let tour_guides = registry
        .tour_guides()
        .iter()
        .map(tour_guide_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    let tour_plans = registry
        .tour_plans()
        .iter()
        .map(tour_plan_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalogue::new(
        destinations,
        blog_posts,
        tour_guides,
        tour_plans,
    )?)
}

/// Builds the catalogue from the registry bundled into `catalogue-data`.
pub fn builtin_catalogue() -> Result<Catalogue, SeedError> {
    load_catalogue(&ContentRegistry::builtin())
}

/// Builds the demo identity store from a content registry.
///
/// Every identity shares [`DEMO_SHARED_SECRET`]; the registry deliberately
/// does not carry per-identity secrets.
pub fn demo_identity_store(registry: &ContentRegistry) -> Result<InMemoryIdentityStore, SeedError> {
    let identities = registry
        .demo_identities()
        .iter()
        .map(identity_from_record)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InMemoryIdentityStore::new(identities))
}

/// Builds the demo identity store from the bundled registry.
pub fn builtin_identity_store() -> Result<InMemoryIdentityStore, SeedError> {
    demo_identity_store(&ContentRegistry::builtin())
}

fn parse_date(record: &str, value: &str) -> Result<NaiveDate, SeedError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| SeedError::InvalidDate {
        record: record.to_owned(),
        value: value.to_owned(),
    })
}

fn review_draft_from_record(record: &ReviewRecord) -> Result<ReviewDraft, SeedError> {
    Ok(ReviewDraft {
        id: record.id.clone(),
        author: record.user_name.clone(),
        rating: record.rating,
        comment: record.comment.clone(),
        date: parse_date(&record.id, &record.date)?,
    })
}

fn destination_from_record(record: &DestinationRecord) -> Result<Destination, SeedError> {
    let reviews = record
        .reviews
        .iter()
        .map(review_draft_from_record)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Destination::new(DestinationDraft {
        id: record.id.clone(),
        name: record.name.clone(),
        category: record.category.parse()?,
        short_description: record.short_description.clone(),
        full_description: record.full_description.clone(),
        images: record.images.clone(),
        things_to_do: record.things_to_do.clone(),
        local_foods: record.local_foods.clone(),
        best_season: record.best_season.clone(),
        reviews,
    })?)
}

fn blog_post_from_record(record: &BlogPostRecord) -> Result<BlogPost, SeedError> {
    Ok(BlogPost::new(BlogPostDraft {
        id: record.id.clone(),
        title: record.title.clone(),
        excerpt: record.excerpt.clone(),
        content: record.content.clone(),
        category: record.category.clone(),
        tags: record.tags.clone(),
        author: record.author.clone(),
        date: parse_date(&record.id, &record.date)?,
        image: record.image.clone(),
        read_minutes: record.read_minutes,
    })?)
}

fn tour_guide_from_record(record: &TourGuideRecord) -> Result<TourGuide, SeedError> {
    Ok(TourGuide::new(TourGuideDraft {
        id: record.id.clone(),
        name: record.name.clone(),
        specialty: record.specialty.clone(),
        description: record.description.clone(),
        experience_years: record.experience_years,
        languages: record.languages.clone(),
        rating: record.rating,
        review_count: record.review_count,
        email: record.email.clone(),
        phone: record.phone.clone(),
    })?)
}

fn tour_plan_from_record(record: &TourPlanRecord) -> Result<TourPlan, SeedError> {
    Ok(TourPlan::new(TourPlanDraft {
        id: record.id.clone(),
        title: record.title.clone(),
        plan_type: record.plan_type.parse()?,
        duration_days: record.duration_days,
        price_usd: record.price_usd,
        description: record.description.clone(),
        highlights: record.highlights.clone(),
        itinerary: record
            .itinerary
            .iter()
            .map(|day| ItineraryDay {
                day: day.day,
                title: day.title.clone(),
                description: day.description.clone(),
            })
            .collect(),
        inclusions: record.inclusions.clone(),
        exclusions: record.exclusions.clone(),
    })?)
}

fn identity_from_record(record: &IdentityRecord) -> Result<StoredIdentity, SeedError> {
    let role = match record.role {
        RoleRecord::User => Role::User,
        RoleRecord::Admin => Role::Admin,
    };
    let profile = UserProfile::new(
        record.id.clone(),
        record.name.clone(),
        EmailAddress::new(&record.email)?,
        role,
        Some(record.avatar.clone()),
    )?;
    Ok(StoredIdentity::new(profile, DEMO_SHARED_SECRET))
}

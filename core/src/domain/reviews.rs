//! Review submission over the catalogue.
//!
//! The catalogue's bundled reviews are immutable; reviews submitted at
//! runtime go through the [`ReviewStore`] port instead, so a durable
//! adapter can replace the in-memory one without touching this service.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;
use uuid::Uuid;

use super::catalogue::{Catalogue, CatalogueValidationError, Review, ReviewDraft};
use super::ports::{Notifier, ReviewStore, ReviewStoreError};

const REVIEW_SUBMITTED_MESSAGE: &str = "Review submitted successfully!";

/// Errors returned by review submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReviewError {
    /// The destination id matched nothing in the catalogue.
    #[error("unknown destination '{id}'")]
    UnknownDestination { id: String },
    /// The review payload failed validation.
    #[error(transparent)]
    Validation(#[from] CatalogueValidationError),
    /// The review store failed.
    #[error(transparent)]
    Store(#[from] ReviewStoreError),
}

/// Accepts and serves traveller reviews for catalogue destinations.
pub struct ReviewService<R> {
    catalogue: Arc<Catalogue>,
    store: Arc<R>,
    notifier: Arc<dyn Notifier>,
    clock: Arc<dyn Clock>,
}

impl<R> ReviewService<R>
where
    R: ReviewStore,
{
    /// Creates the service over a catalogue and a review store.
    pub fn new(
        catalogue: Arc<Catalogue>,
        store: Arc<R>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalogue,
            store,
            notifier,
            clock,
        }
    }

    /// Validates and stores a review for a destination.
    ///
    /// The review gets a fresh id and today's date from the injected clock.
    /// On success the created review is returned and a success signal
    /// reaches the notification surface.
    pub fn submit(
        &self,
        destination_id: &str,
        author: &str,
        rating: u8,
        comment: &str,
    ) -> Result<Review, ReviewError> {
        if self.catalogue.destination(destination_id).is_none() {
            return Err(ReviewError::UnknownDestination {
                id: destination_id.to_owned(),
            });
        }

        let review = Review::new(ReviewDraft {
            id: Uuid::new_v4().to_string(),
            author: author.to_owned(),
            rating,
            comment: comment.to_owned(),
            date: self.clock.utc().date_naive(),
        })?;

        self.store.append(destination_id, review.clone())?;
        self.notifier.success(REVIEW_SUBMITTED_MESSAGE);
        Ok(review)
    }

    /// All reviews for a destination: the bundled ones first, then
    /// submissions in arrival order.
    pub fn reviews_for(&self, destination_id: &str) -> Result<Vec<Review>, ReviewError> {
        let Some(destination) = self.catalogue.destination(destination_id) else {
            return Err(ReviewError::UnknownDestination {
                id: destination_id.to_owned(),
            });
        };

        let mut reviews = destination.reviews.clone();
        reviews.extend(self.store.for_destination(destination_id)?);
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use chrono::{DateTime, Utc};
    use mockable::MockClock;
    use rstest::rstest;

    use super::*;
    use crate::outbound::{InMemoryReviewStore, RecordingNotifier, Signal};
    use crate::seed;

    fn fixed_clock(iso: &str) -> MockClock {
        let instant: DateTime<Utc> = iso.parse().expect("valid timestamp");
        let mut clock = MockClock::new();
        clock.expect_utc().returning(move || instant);
        clock
    }

    fn service_with(
        notifier: Arc<RecordingNotifier>,
    ) -> ReviewService<InMemoryReviewStore> {
        let catalogue = seed::builtin_catalogue().expect("bundled catalogue loads");
        ReviewService::new(
            Arc::new(catalogue),
            Arc::new(InMemoryReviewStore::default()),
            notifier,
            Arc::new(fixed_clock("2025-06-01T09:30:00Z")),
        )
    }

    #[rstest]
    fn submit_appends_a_dated_review() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(Arc::clone(&notifier));

        let review = service
            .submit("phewa-lake", "Asha Traveller", 5, "Still water, huge mountains.")
            .expect("review accepted");

        assert_eq!(review.date.to_string(), "2025-06-01");
        assert_eq!(review.rating, 5);

        let all = service.reviews_for("phewa-lake").expect("reviews listed");
        assert_eq!(all.last().map(|r| r.id.as_str()), Some(review.id.as_str()));
        assert!(
            notifier
                .signals()
                .contains(&Signal::Success("Review submitted successfully!".to_owned()))
        );
    }

    #[rstest]
    fn bundled_reviews_come_first() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(notifier);

        let before = service.reviews_for("phewa-lake").expect("reviews listed");
        service
            .submit("phewa-lake", "Asha Traveller", 4, "Go at sunrise.")
            .expect("review accepted");
        let after = service.reviews_for("phewa-lake").expect("reviews listed");

        assert_eq!(after.len(), before.len() + 1);
        let bundled_ids: Vec<_> = before.iter().map(|r| r.id.as_str()).collect();
        let leading_ids: Vec<_> = after
            .iter()
            .take(before.len())
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(leading_ids, bundled_ids);
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    fn submit_rejects_out_of_range_ratings(#[case] rating: u8) {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(notifier);

        let err = service
            .submit("phewa-lake", "Asha Traveller", rating, "hm")
            .expect_err("rating must be rejected");
        assert!(matches!(
            err,
            ReviewError::Validation(CatalogueValidationError::StarRatingOutOfRange { .. })
        ));
    }

    #[rstest]
    fn submit_rejects_unknown_destinations() {
        let notifier = Arc::new(RecordingNotifier::default());
        let service = service_with(Arc::clone(&notifier));

        let err = service
            .submit("atlantis", "Asha Traveller", 5, "Lovely myth.")
            .expect_err("destination must be rejected");
        assert_eq!(
            err,
            ReviewError::UnknownDestination {
                id: "atlantis".to_owned(),
            }
        );
        assert!(notifier.signals().is_empty());
    }
}

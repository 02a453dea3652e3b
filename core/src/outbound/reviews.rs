//! In-memory review store.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::catalogue::Review;
use crate::domain::ports::{ReviewStore, ReviewStoreError};

/// Append-only review log keyed by destination id.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    reviews: Mutex<HashMap<String, Vec<Review>>>,
}

impl ReviewStore for InMemoryReviewStore {
    fn append(&self, destination_id: &str, review: Review) -> Result<(), ReviewStoreError> {
        let mut reviews = self
            .reviews
            .lock()
            .map_err(|_| ReviewStoreError::backend("review log lock poisoned"))?;
        reviews
            .entry(destination_id.to_owned())
            .or_default()
            .push(review);
        Ok(())
    }

    fn for_destination(&self, destination_id: &str) -> Result<Vec<Review>, ReviewStoreError> {
        let reviews = self
            .reviews
            .lock()
            .map_err(|_| ReviewStoreError::backend("review log lock poisoned"))?;
        Ok(reviews.get(destination_id).cloned().unwrap_or_default())
    }
}

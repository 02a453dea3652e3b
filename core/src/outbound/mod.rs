//! Adapters for the domain ports.
//!
//! One file per concern: the demo identity store, the two session slot
//! implementations, the review log, and the notification sinks.

mod identity;
mod notify;
mod reviews;
mod session_slot;

pub use identity::InMemoryIdentityStore;
pub use notify::{RecordingNotifier, Signal, TracingNotifier};
pub use reviews::InMemoryReviewStore;
pub use session_slot::{InMemorySessionStore, JsonFileSessionStore};

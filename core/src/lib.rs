//! WanderNepal application core.
//!
//! The content site around this crate is presentation only; everything with
//! behaviour lives here: the read-only content catalogue, the search/filter
//! engine over it, the demo session lifecycle with its persisted slot, and
//! review submission. Collaborators the core cannot own (identity lookup,
//! durable storage, the toast surface) are ports with bundled in-memory and
//! file-backed adapters.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod seed;

//! Trading session handling for the tick-labeler system.
//!
//! This crate handles:
//! - Time-of-day session classification (day / night / outside)
//! - Anchoring session boundaries to calendar dates (wrap-aware)
//! - Normalizing tick series down to in-session ticks

pub mod classifier;
pub mod normalizer;

pub use classifier::SessionClassifier;
pub use normalizer::SessionNormalizer;

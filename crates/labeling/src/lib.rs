//! Label construction for the tick-labeler system.
//!
//! This crate handles:
//! - Forward as-of joining over time-ordered tick series
//! - Binary up/down label generation with missing propagation
//! - End-to-end pipeline orchestration (normalize, join, label)

pub mod forward_join;
pub mod labeler;
pub mod pipeline;

pub use forward_join::{forward_join, ForwardJoiner};
pub use labeler::LabelGenerator;
pub use pipeline::LabelPipeline;

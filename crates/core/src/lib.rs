//! Core types and configuration for the tick-labeler system.
//!
//! This crate provides shared types used across all other crates:
//! - Tick and session data types
//! - Configuration structures (session boundaries, label parameters)
//! - Common error types

pub mod config;
pub mod error;
pub mod types;

pub use config::{parse_duration, LabelConfig, PipelineConfig, SessionConfig};
pub use error::{Error, Result};
pub use types::*;

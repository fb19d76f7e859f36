//! Data models for the arXiv search tool.
//!
//! Field names are snake_case and enum values use the exact strings the
//! upstream API expects.

mod enums;
mod inputs;
mod outcome;

pub use enums::{DateType, SearchField, Subject};
pub use inputs::SearchRequest;
pub use outcome::{FailureResult, FailureStatus, SearchOutcome};

#![forbid(unsafe_code)]

//! Aster-plot gallery data model + loaders (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (identical inputs give identical models)
//! - all reference data is loaded and merged before any layout or drawing

pub mod error;
pub mod loader;
pub mod model;
pub mod name;
pub mod topics;
pub mod university;

pub use error::{Error, Result};
pub use loader::load_dataset;
pub use model::{Author, Dataset, TopicRow};
pub use name::{NameParts, split_display_name};
pub use university::University;

#[cfg(test)]
mod tests;

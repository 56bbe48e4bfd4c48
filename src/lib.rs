//! MCTHelper Library
//!
//! In-memory reference data for trainers: course details, summaries,
//! lecture preparation, qualification tracking and technology catalogs.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod registry;

pub use catalog::{Catalog, LoadReport};
pub use error::{HelperError, Result};

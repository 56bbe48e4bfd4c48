//! Reference-data registries
//!
//! Five independent in-memory stores, each keyed by string identifier:
//!
//! ```text
//! CourseRegistry         course_id            -> Course
//! SummaryRegistry        course_id            -> Summary
//! PrepRegistry           course_id            -> PrepMaterial
//! QualificationRegistry  trainer_id/course_id -> Qualification
//! TechRegistry           tech_id              -> Technology
//!                        path_id              -> LearningPath
//! ```
//!
//! Records are create-or-replace only. Typed `add` calls take a complete record;
//! `add_value` accepts untyped JSON and rejects anything missing a required field.

mod course;
mod prep;
mod qualification;
mod summary;
mod tech;

pub use course::{Course, CourseRegistry};
pub use prep::{PrepMaterial, PrepRegistry, PREP_CHECKLIST};
pub use qualification::{
    ExpiryCheck, ExpiryStatus, Qualification, QualificationRegistry, QualificationStatus,
    RenewalRequirements, EXPIRY_WARNING_DAYS,
};
pub use summary::{Summary, SummaryRegistry};
pub use tech::{LearningPath, TechRegistry, TechUpdate, Technology};

use crate::error::{HelperError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A record paired with the identifier it is stored under
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tagged<T> {
    pub id: String,
    #[serde(flatten)]
    pub record: T,
}

impl<T> Tagged<T> {
    pub fn new(id: impl Into<String>, record: T) -> Self {
        Self {
            id: id.into(),
            record,
        }
    }
}

/// Reject empty identifiers
pub(crate) fn require_id(entity: &'static str, id: &str) -> Result<()> {
    if id.is_empty() {
        return Err(HelperError::EmptyIdentifier { entity });
    }
    Ok(())
}

/// Decode an untyped record, mapping missing or mistyped fields to a validation error
pub(crate) fn decode_record<T: DeserializeOwned>(
    entity: &'static str,
    id: &str,
    value: serde_json::Value,
) -> Result<T> {
    require_id(entity, id)?;

    serde_json::from_value(value).map_err(|e| HelperError::InvalidRecord {
        entity,
        id: id.to_string(),
        cause: e.to_string(),
    })
}

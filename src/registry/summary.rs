//! Summary Registry

use super::{decode_record, require_id};
use crate::error::Result;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ENTITY: &str = "summary";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub overview: String,
    pub key_points: Vec<String>,
    pub prerequisites: Vec<String>,
    pub target_audience: String,
}

/// One summary per course; re-adding overwrites
#[derive(Debug, Default)]
pub struct SummaryRegistry {
    summaries: DashMap<String, Summary>,
}

impl SummaryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, course_id: &str, summary: Summary) -> Result<()> {
        require_id(ENTITY, course_id)?;

        self.summaries.insert(course_id.to_string(), summary);
        debug!("Stored summary: {}", course_id);
        Ok(())
    }

    pub fn add_value(&self, course_id: &str, value: serde_json::Value) -> Result<()> {
        let summary = decode_record(ENTITY, course_id, value).inspect_err(|e| {
            warn!("Rejected summary '{}': {}", course_id, e);
        })?;
        self.add(course_id, summary)
    }

    pub fn get(&self, course_id: &str) -> Option<Summary> {
        self.summaries.get(course_id).map(|s| s.clone())
    }

    /// Key learning points, empty if the course has no summary
    pub fn key_points(&self, course_id: &str) -> Vec<String> {
        self.summaries
            .get(course_id)
            .map(|s| s.key_points.clone())
            .unwrap_or_default()
    }

    /// Prerequisites, empty if the course has no summary
    pub fn prerequisites(&self, course_id: &str) -> Vec<String> {
        self.summaries
            .get(course_id)
            .map(|s| s.prerequisites.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.summaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.summaries.is_empty()
    }
}

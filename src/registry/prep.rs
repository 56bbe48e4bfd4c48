//! Lecture Preparation Registry
//!
//! Slides, labs, demos and per-module timing for each course.

use super::{decode_record, require_id};
use crate::error::Result;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

const ENTITY: &str = "prep material";

/// Standard preparation tasks, returned for every course with stored materials
pub const PREP_CHECKLIST: [&str; 6] = [
    "Review all slide decks",
    "Test all lab exercises",
    "Practice demonstrations",
    "Verify all resources are accessible",
    "Review timing for each module",
    "Prepare Q&A scenarios",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepMaterial {
    pub slides: Vec<String>,
    pub labs: Vec<String>,
    pub demos: Vec<String>,
    pub resources: Vec<String>,
    /// Module name -> suggested time
    pub timing: BTreeMap<String, String>,
}

#[derive(Debug, Default)]
pub struct PrepRegistry {
    materials: DashMap<String, PrepMaterial>,
}

impl PrepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, course_id: &str, material: PrepMaterial) -> Result<()> {
        require_id(ENTITY, course_id)?;

        self.materials.insert(course_id.to_string(), material);
        debug!("Stored prep material: {}", course_id);
        Ok(())
    }

    pub fn add_value(&self, course_id: &str, value: serde_json::Value) -> Result<()> {
        let material = decode_record(ENTITY, course_id, value).inspect_err(|e| {
            warn!("Rejected prep material '{}': {}", course_id, e);
        })?;
        self.add(course_id, material)
    }

    pub fn get(&self, course_id: &str) -> Option<PrepMaterial> {
        self.materials.get(course_id).map(|m| m.clone())
    }

    /// The standard checklist if materials exist for the course, else empty.
    /// Content does not depend on what was stored.
    pub fn checklist(&self, course_id: &str) -> Vec<String> {
        if !self.materials.contains_key(course_id) {
            return Vec::new();
        }
        PREP_CHECKLIST.iter().map(|item| item.to_string()).collect()
    }

    pub fn timing_guide(&self, course_id: &str) -> BTreeMap<String, String> {
        self.materials
            .get(course_id)
            .map(|m| m.timing.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }
}

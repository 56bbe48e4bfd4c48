//! Course Registry
//!
//! Course metadata keyed by course identifier, with keyword search.

use super::{decode_record, require_id, Tagged};
use crate::error::{HelperError, Result};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const ENTITY: &str = "course";

/// Course metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub name: String,
    pub description: String,
    /// Length in days
    pub duration: u32,
    /// Beginner/Intermediate/Advanced
    pub level: String,
    pub topics: Vec<String>,
}

#[derive(Debug, Default)]
pub struct CourseRegistry {
    courses: DashMap<String, Course>,
}

impl CourseRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a course, replacing any previous record under the same id
    pub fn add(&self, course_id: &str, course: Course) -> Result<()> {
        require_id(ENTITY, course_id)?;

        if course.duration == 0 {
            warn!("Rejected course '{}': zero duration", course_id);
            return Err(HelperError::InvalidField {
                entity: ENTITY,
                id: course_id.to_string(),
                field: "duration",
                message: "must be a positive number of days".to_string(),
            });
        }

        if self.courses.insert(course_id.to_string(), course).is_some() {
            debug!("Replaced course: {}", course_id);
        } else {
            debug!("Added course: {}", course_id);
        }
        Ok(())
    }

    /// Store a course from untyped JSON
    pub fn add_value(&self, course_id: &str, value: serde_json::Value) -> Result<()> {
        let course = decode_record(ENTITY, course_id, value).inspect_err(|e| {
            warn!("Rejected course '{}': {}", course_id, e);
        })?;
        self.add(course_id, course)
    }

    pub fn get(&self, course_id: &str) -> Option<Course> {
        self.courses.get(course_id).map(|c| c.clone())
    }

    /// Courses whose name or description contains `keyword`, ignoring case
    pub fn search(&self, keyword: &str) -> Vec<Tagged<Course>> {
        if keyword.is_empty() {
            return Vec::new();
        }

        let needle = keyword.to_lowercase();
        let mut results: Vec<Tagged<Course>> = self
            .courses
            .iter()
            .filter(|entry| {
                let course = entry.value();
                course.name.to_lowercase().contains(&needle)
                    || course.description.to_lowercase().contains(&needle)
            })
            .map(|entry| Tagged::new(entry.key().clone(), entry.value().clone()))
            .collect();

        results.sort_by(|a, b| a.id.cmp(&b.id));
        results
    }

    pub fn list_all(&self) -> Vec<Tagged<Course>> {
        let mut courses: Vec<Tagged<Course>> = self
            .courses
            .iter()
            .map(|entry| Tagged::new(entry.key().clone(), entry.value().clone()))
            .collect();

        courses.sort_by(|a, b| a.id.cmp(&b.id));
        courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

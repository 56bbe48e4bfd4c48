//! Qualification Registry
//!
//! Certification records per trainer and course, with expiry classification
//! and the standard renewal requirements.

use super::{decode_record, require_id};
use crate::error::Result;
use chrono::{Local, NaiveDate};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

const ENTITY: &str = "qualification";

/// Qualifications expiring within this many days are flagged
pub const EXPIRY_WARNING_DAYS: i64 = 90;

const DATE_FORMAT: &str = "%Y-%m-%d";

const RENEWAL_REQUIREMENTS: [&str; 4] = [
    "Complete latest course update training",
    "Pass renewal assessment",
    "Submit proof of teaching activity",
    "Complete continuing education credits",
];
const RENEWAL_PERIOD: &str = "12 months";
const RENEWAL_NOTICE_PERIOD: &str = "90 days before expiry";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationStatus {
    Active,
    Expired,
    Pending,
}

/// A trainer's certification for one course.
///
/// Dates are kept as supplied (`YYYY-MM-DD`) and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Qualification {
    pub certification_date: String,
    pub expiry_date: String,
    pub status: QualificationStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpiryStatus {
    Valid,
    ExpiringSoon,
    Expired,
    NotFound,
    Error,
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpiryStatus::Valid => write!(f, "valid"),
            ExpiryStatus::ExpiringSoon => write!(f, "expiring_soon"),
            ExpiryStatus::Expired => write!(f, "expired"),
            ExpiryStatus::NotFound => write!(f, "not_found"),
            ExpiryStatus::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpiryCheck {
    pub status: ExpiryStatus,
    pub days_remaining: Option<i64>,
}

impl ExpiryCheck {
    fn without_days(status: ExpiryStatus) -> Self {
        Self {
            status,
            days_remaining: None,
        }
    }

    /// Classify a signed day count
    pub fn from_days_remaining(days: i64) -> Self {
        let status = if days < 0 {
            ExpiryStatus::Expired
        } else if days <= EXPIRY_WARNING_DAYS {
            ExpiryStatus::ExpiringSoon
        } else {
            ExpiryStatus::Valid
        };

        Self {
            status,
            days_remaining: Some(days),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenewalRequirements {
    pub course_id: String,
    pub requirements: Vec<String>,
    pub renewal_period: String,
    pub notice_period: String,
}

#[derive(Debug, Default)]
pub struct QualificationRegistry {
    qualifications: DashMap<String, BTreeMap<String, Qualification>>,
}

impl QualificationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, trainer_id: &str, course_id: &str, qualification: Qualification) -> Result<()> {
        require_id("trainer", trainer_id)?;
        require_id("course", course_id)?;

        self.qualifications
            .entry(trainer_id.to_string())
            .or_default()
            .insert(course_id.to_string(), qualification);

        debug!("Stored qualification: trainer={}, course={}", trainer_id, course_id);
        Ok(())
    }

    pub fn add_value(&self, trainer_id: &str, course_id: &str, value: serde_json::Value) -> Result<()> {
        require_id("trainer", trainer_id)?;
        require_id("course", course_id)?;

        let qualification = decode_record(ENTITY, course_id, value).inspect_err(|e| {
            warn!("Rejected qualification '{}/{}': {}", trainer_id, course_id, e);
        })?;
        self.add(trainer_id, course_id, qualification)
    }

    /// All of a trainer's qualifications by course, empty if the trainer is unknown
    pub fn get_all(&self, trainer_id: &str) -> BTreeMap<String, Qualification> {
        self.qualifications
            .get(trainer_id)
            .map(|q| q.clone())
            .unwrap_or_default()
    }

    pub fn get(&self, trainer_id: &str, course_id: &str) -> Option<Qualification> {
        self.qualifications
            .get(trainer_id)
            .and_then(|q| q.get(course_id).cloned())
    }

    /// Classify a qualification's expiry against the local current date
    pub fn check_expiry(&self, trainer_id: &str, course_id: &str) -> ExpiryCheck {
        self.check_expiry_on(trainer_id, course_id, Local::now().date_naive())
    }

    pub fn check_expiry_on(&self, trainer_id: &str, course_id: &str, today: NaiveDate) -> ExpiryCheck {
        let Some(qualification) = self.get(trainer_id, course_id) else {
            return ExpiryCheck::without_days(ExpiryStatus::NotFound);
        };

        match parse_iso_date(&qualification.expiry_date) {
            Some(expiry) => ExpiryCheck::from_days_remaining((expiry - today).num_days()),
            None => {
                warn!(
                    "Unparsable expiry date '{}' for trainer={}, course={}",
                    qualification.expiry_date, trainer_id, course_id
                );
                ExpiryCheck::without_days(ExpiryStatus::Error)
            }
        }
    }

    /// Standard renewal requirements; identical for every course
    pub fn renewal_requirements(&self, course_id: &str) -> RenewalRequirements {
        RenewalRequirements {
            course_id: course_id.to_string(),
            requirements: RENEWAL_REQUIREMENTS.iter().map(|r| r.to_string()).collect(),
            renewal_period: RENEWAL_PERIOD.to_string(),
            notice_period: RENEWAL_NOTICE_PERIOD.to_string(),
        }
    }

    /// Number of trainers with at least one qualification
    pub fn trainer_count(&self) -> usize {
        self.qualifications.len()
    }
}

/// Parse a strict `YYYY-MM-DD` date. chrono alone tolerates padding and signed years.
fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return None;
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

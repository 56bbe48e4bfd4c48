//! Catalog
//!
//! Bundles the five registries and fills them from the built-in sample data
//! or a JSON seed file:
//!
//! ```json
//! {
//!   "courses":        { "<course_id>": { ... } },
//!   "summaries":      { "<course_id>": { ... } },
//!   "prep_materials": { "<course_id>": { ... } },
//!   "qualifications": { "<trainer_id>": { "<course_id>": { ... } } },
//!   "technologies":   { "<tech_id>": { ... } },
//!   "learning_paths": { "<path_id>": { ... } }
//! }
//! ```
//!
//! Every section is optional. Entries missing required fields are skipped and counted.

use crate::error::{HelperError, Result};
use crate::registry::{
    Course, CourseRegistry, LearningPath, PrepMaterial, PrepRegistry, Qualification,
    QualificationRegistry, QualificationStatus, Summary, SummaryRegistry, TechRegistry,
    Technology,
};
use chrono::{Duration, Local};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Default)]
pub struct Catalog {
    pub courses: CourseRegistry,
    pub summaries: SummaryRegistry,
    pub prep: PrepRegistry,
    pub qualifications: QualificationRegistry,
    pub tech: TechRegistry,
}

/// Outcome of loading a seed catalog
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub rejected: usize,
}

impl LoadReport {
    fn record(&mut self, result: Result<()>) {
        match result {
            Ok(()) => self.loaded += 1,
            Err(_) => self.rejected += 1,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeedCatalog {
    courses: BTreeMap<String, JsonValue>,
    summaries: BTreeMap<String, JsonValue>,
    prep_materials: BTreeMap<String, JsonValue>,
    qualifications: BTreeMap<String, BTreeMap<String, JsonValue>>,
    technologies: BTreeMap<String, JsonValue>,
    learning_paths: BTreeMap<String, JsonValue>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with demonstration records
    pub fn with_sample_data() -> Result<Self> {
        let catalog = Self::new();
        catalog.load_sample_data()?;
        Ok(catalog)
    }

    pub fn load_sample_data(&self) -> Result<()> {
        self.courses.add(
            "AZ-900",
            Course {
                name: "Microsoft Azure Fundamentals".to_string(),
                description: "Introduction to cloud services and Azure".to_string(),
                duration: 1,
                level: "Beginner".to_string(),
                topics: strings(&["Cloud Concepts", "Azure Services", "Security", "Pricing"]),
            },
        )?;

        self.summaries.add(
            "AZ-900",
            Summary {
                overview: "This course provides foundational knowledge of cloud services and Azure."
                    .to_string(),
                key_points: strings(&[
                    "Understand cloud computing concepts",
                    "Learn core Azure services",
                    "Understand Azure security and compliance",
                    "Understand Azure pricing and support",
                ]),
                prerequisites: strings(&["Basic understanding of IT concepts"]),
                target_audience: "IT professionals new to cloud computing".to_string(),
            },
        )?;

        self.prep.add(
            "AZ-900",
            PrepMaterial {
                slides: strings(&["Module 1: Cloud Concepts", "Module 2: Azure Services"]),
                labs: strings(&["Lab 1: Create a VM", "Lab 2: Configure Storage"]),
                demos: strings(&["Demo 1: Azure Portal Tour", "Demo 2: Resource Groups"]),
                resources: strings(&["Microsoft Learn", "Azure Documentation"]),
                timing: [("Module 1", "2 hours"), ("Module 2", "3 hours")]
                    .into_iter()
                    .map(|(module, time)| (module.to_string(), time.to_string()))
                    .collect(),
            },
        )?;

        let expiry = Local::now().date_naive() + Duration::days(200);
        self.qualifications.add(
            "TRAINER-001",
            "AZ-900",
            Qualification {
                certification_date: "2024-01-01".to_string(),
                expiry_date: expiry.format("%Y-%m-%d").to_string(),
                status: QualificationStatus::Active,
            },
        )?;

        self.tech.add_technology(
            "azure-ai",
            Technology {
                name: "Azure AI Services".to_string(),
                category: "AI".to_string(),
                description: "Comprehensive AI and machine learning platform".to_string(),
                latest_version: "2024.1".to_string(),
                resources: strings(&[
                    "Azure AI Documentation",
                    "Microsoft Learn - AI Path",
                    "Azure AI Blog",
                ]),
            },
        )?;

        self.tech.add_learning_path(
            "ai-expert",
            LearningPath {
                title: "Azure AI Expert Path".to_string(),
                technologies: strings(&["azure-ai"]),
                modules: strings(&[
                    "Introduction to Azure AI",
                    "Computer Vision",
                    "Natural Language Processing",
                    "Machine Learning",
                    "Advanced AI Solutions",
                ]),
                duration: "8 weeks".to_string(),
                level: "Advanced".to_string(),
            },
        )?;

        info!("Loaded sample catalog data");
        Ok(())
    }

    /// Load a JSON seed file into the registries
    pub fn load_file(&self, path: &Path) -> Result<LoadReport> {
        let content = fs::read_to_string(path).map_err(|e| HelperError::CatalogLoad {
            path: path.display().to_string(),
            cause: e.to_string(),
        })?;

        let seed: SeedCatalog =
            serde_json::from_str(&content).map_err(|e| HelperError::CatalogLoad {
                path: path.display().to_string(),
                cause: e.to_string(),
            })?;

        let report = self.apply(seed);
        info!(
            "Loaded catalog from {} ({} records, {} rejected)",
            path.display(),
            report.loaded,
            report.rejected
        );
        Ok(report)
    }

    /// Load an already-parsed seed document
    pub fn load_value(&self, value: JsonValue) -> Result<LoadReport> {
        let seed: SeedCatalog =
            serde_json::from_value(value).map_err(|e| HelperError::CatalogLoad {
                path: "<inline>".to_string(),
                cause: e.to_string(),
            })?;
        Ok(self.apply(seed))
    }

    fn apply(&self, seed: SeedCatalog) -> LoadReport {
        let mut report = LoadReport::default();

        for (id, value) in seed.courses {
            report.record(self.courses.add_value(&id, value));
        }
        for (id, value) in seed.summaries {
            report.record(self.summaries.add_value(&id, value));
        }
        for (id, value) in seed.prep_materials {
            report.record(self.prep.add_value(&id, value));
        }
        for (trainer_id, courses) in seed.qualifications {
            for (course_id, value) in courses {
                report.record(self.qualifications.add_value(&trainer_id, &course_id, value));
            }
        }
        for (id, value) in seed.technologies {
            report.record(self.tech.add_technology_value(&id, value));
        }
        for (id, value) in seed.learning_paths {
            report.record(self.tech.add_learning_path_value(&id, value));
        }

        report
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

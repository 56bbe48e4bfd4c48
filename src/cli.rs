//! Command-line surface
//!
//! Each subcommand maps to one catalog lookup and a formatted print.
//! Unknown ids print a message; they are not errors.

use crate::catalog::Catalog;
use crate::registry::ExpiryStatus;
use clap::{Parser, Subcommand};
use std::io::{self, Write};

#[derive(Debug, Parser)]
#[command(name = "mcthelper")]
#[command(about = "MCTHelper - Support tool for Microsoft Certified Trainers", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// List all available courses
    ListCourses,
    /// Show course details
    CourseDetails {
        /// Course ID
        course_id: String,
    },
    /// Show course summary
    Summary {
        /// Course ID
        course_id: String,
    },
    /// Show preparation checklist
    PrepChecklist {
        /// Course ID
        course_id: String,
    },
    /// Show latest technology updates
    LatestTech,
    /// Search courses by name or description
    Search {
        /// Keyword (case-insensitive)
        keyword: String,
    },
    /// List technologies in a category
    TechCategory {
        /// Category, e.g. AI or DevOps
        category: String,
    },
    /// Show a learning path
    LearningPath {
        /// Learning path ID
        path_id: String,
    },
    /// Check when a trainer's qualification expires
    CheckExpiry {
        /// Trainer ID
        trainer_id: String,
        /// Course ID
        course_id: String,
    },
    /// Show qualification renewal requirements
    Renewal {
        /// Course ID
        course_id: String,
    },
}

pub fn run<W: Write>(command: &Commands, catalog: &Catalog, out: &mut W) -> io::Result<()> {
    match command {
        Commands::ListCourses => list_courses(catalog, out),
        Commands::CourseDetails { course_id } => course_details(catalog, course_id, out),
        Commands::Summary { course_id } => summary(catalog, course_id, out),
        Commands::PrepChecklist { course_id } => prep_checklist(catalog, course_id, out),
        Commands::LatestTech => latest_tech(catalog, out),
        Commands::Search { keyword } => search(catalog, keyword, out),
        Commands::TechCategory { category } => tech_category(catalog, category, out),
        Commands::LearningPath { path_id } => learning_path(catalog, path_id, out),
        Commands::CheckExpiry {
            trainer_id,
            course_id,
        } => check_expiry(catalog, trainer_id, course_id, out),
        Commands::Renewal { course_id } => renewal(catalog, course_id, out),
    }
}

fn list_courses<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let courses = catalog.courses.list_all();
    if courses.is_empty() {
        return writeln!(out, "No courses available.");
    }

    writeln!(out, "\n=== Available Courses ===")?;
    for course in courses {
        writeln!(out, "\nCourse ID: {}", course.id)?;
        writeln!(out, "Name: {}", course.record.name)?;
        writeln!(out, "Level: {}", course.record.level)?;
        writeln!(out, "Duration: {} day(s)", course.record.duration)?;
    }
    Ok(())
}

fn course_details<W: Write>(catalog: &Catalog, course_id: &str, out: &mut W) -> io::Result<()> {
    let Some(course) = catalog.courses.get(course_id) else {
        return writeln!(out, "Course {} not found.", course_id);
    };

    writeln!(out, "\n=== Course Details: {} ===", course_id)?;
    writeln!(out, "Name: {}", course.name)?;
    writeln!(out, "Description: {}", course.description)?;
    writeln!(out, "Level: {}", course.level)?;
    writeln!(out, "Duration: {} day(s)", course.duration)?;
    writeln!(out, "Topics: {}", course.topics.join(", "))
}

fn summary<W: Write>(catalog: &Catalog, course_id: &str, out: &mut W) -> io::Result<()> {
    let Some(summary) = catalog.summaries.get(course_id) else {
        return writeln!(out, "Summary for course {} not found.", course_id);
    };

    writeln!(out, "\n=== Summary: {} ===", course_id)?;
    writeln!(out, "Overview: {}", summary.overview)?;
    writeln!(out, "\nKey Points:")?;
    for point in &summary.key_points {
        writeln!(out, "  - {}", point)?;
    }
    writeln!(out, "\nPrerequisites:")?;
    for prereq in &summary.prerequisites {
        writeln!(out, "  - {}", prereq)?;
    }
    writeln!(out, "\nTarget Audience: {}", summary.target_audience)
}

fn prep_checklist<W: Write>(catalog: &Catalog, course_id: &str, out: &mut W) -> io::Result<()> {
    let checklist = catalog.prep.checklist(course_id);
    if checklist.is_empty() {
        return writeln!(out, "No preparation materials found for course {}.", course_id);
    }

    writeln!(out, "\n=== Preparation Checklist: {} ===", course_id)?;
    for (i, item) in checklist.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, item)?;
    }

    let timing = catalog.prep.timing_guide(course_id);
    if !timing.is_empty() {
        writeln!(out, "\nTiming:")?;
        for (module, time) in &timing {
            writeln!(out, "  {}: {}", module, time)?;
        }
    }
    Ok(())
}

fn latest_tech<W: Write>(catalog: &Catalog, out: &mut W) -> io::Result<()> {
    let updates = catalog.tech.latest_updates();
    if updates.is_empty() {
        return writeln!(out, "No technology information available.");
    }

    writeln!(out, "\n=== Latest Technologies ===")?;
    for tech in updates {
        writeln!(out, "\n{} (v{})", tech.name, tech.version)?;
        writeln!(out, "Category: {}", tech.category)?;
    }
    Ok(())
}

fn search<W: Write>(catalog: &Catalog, keyword: &str, out: &mut W) -> io::Result<()> {
    let results = catalog.courses.search(keyword);
    if results.is_empty() {
        return writeln!(out, "No courses match '{}'.", keyword);
    }

    writeln!(out, "\n=== Courses matching '{}' ===", keyword)?;
    for course in results {
        writeln!(out, "  - {}: {} ({})", course.id, course.record.name, course.record.level)?;
    }
    Ok(())
}

fn tech_category<W: Write>(catalog: &Catalog, category: &str, out: &mut W) -> io::Result<()> {
    let techs = catalog.tech.by_category(category);
    if techs.is_empty() {
        return writeln!(out, "No technologies found in category {}.", category);
    }

    writeln!(out, "\n=== {} Technologies ===", category)?;
    for tech in techs {
        writeln!(out, "  - {} v{}", tech.record.name, tech.record.latest_version)?;
    }
    Ok(())
}

fn learning_path<W: Write>(catalog: &Catalog, path_id: &str, out: &mut W) -> io::Result<()> {
    let Some(path) = catalog.tech.get_learning_path(path_id) else {
        return writeln!(out, "Learning path {} not found.", path_id);
    };

    writeln!(out, "\n=== Learning Path: {} ===", path.title)?;
    writeln!(out, "Duration: {}", path.duration)?;
    writeln!(out, "Level: {}", path.level)?;
    writeln!(out, "Technologies: {}", path.technologies.join(", "))?;
    writeln!(out, "\nModules:")?;
    for (i, module) in path.modules.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, module)?;
    }
    Ok(())
}

fn check_expiry<W: Write>(
    catalog: &Catalog,
    trainer_id: &str,
    course_id: &str,
    out: &mut W,
) -> io::Result<()> {
    let check = catalog.qualifications.check_expiry(trainer_id, course_id);

    match (check.status, check.days_remaining) {
        (ExpiryStatus::NotFound, _) => writeln!(
            out,
            "No qualification found for trainer {} on course {}.",
            trainer_id, course_id
        ),
        (ExpiryStatus::Error, _) => writeln!(
            out,
            "Qualification for trainer {} on course {} has an invalid expiry date.",
            trainer_id, course_id
        ),
        (status, Some(days)) => writeln!(
            out,
            "{} / {}: {} ({} days remaining)",
            trainer_id, course_id, status, days
        ),
        (status, None) => writeln!(out, "{} / {}: {}", trainer_id, course_id, status),
    }
}

fn renewal<W: Write>(catalog: &Catalog, course_id: &str, out: &mut W) -> io::Result<()> {
    let renewal = catalog.qualifications.renewal_requirements(course_id);

    writeln!(out, "\n=== Renewal Requirements: {} ===", renewal.course_id)?;
    for requirement in &renewal.requirements {
        writeln!(out, "  - {}", requirement)?;
    }
    writeln!(out, "\nRenewal period: {}", renewal.renewal_period)?;
    writeln!(out, "Notice period: {}", renewal.notice_period)
}

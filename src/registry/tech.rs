//! Technology Registry
//!
//! Technology entries and learning paths. The two live in separate namespaces;
//! technology ids listed in a learning path are not checked against stored entries.

use super::{decode_record, require_id, Tagged};
use crate::error::Result;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technology {
    pub name: String,
    /// Cloud/AI/DevOps/Security/...
    pub category: String,
    pub description: String,
    pub latest_version: String,
    pub resources: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPath {
    pub title: String,
    pub technologies: Vec<String>,
    pub modules: Vec<String>,
    /// Free text estimate, e.g. "8 weeks"
    pub duration: String,
    pub level: String,
}

/// Projection of a technology used for update listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechUpdate {
    pub id: String,
    pub name: String,
    pub version: String,
    pub category: String,
}

#[derive(Debug, Default)]
pub struct TechRegistry {
    technologies: DashMap<String, Technology>,
    learning_paths: DashMap<String, LearningPath>,
}

impl TechRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_technology(&self, tech_id: &str, technology: Technology) -> Result<()> {
        require_id("technology", tech_id)?;

        self.technologies.insert(tech_id.to_string(), technology);
        debug!("Stored technology: {}", tech_id);
        Ok(())
    }

    pub fn add_technology_value(&self, tech_id: &str, value: serde_json::Value) -> Result<()> {
        let technology = decode_record("technology", tech_id, value).inspect_err(|e| {
            warn!("Rejected technology '{}': {}", tech_id, e);
        })?;
        self.add_technology(tech_id, technology)
    }

    pub fn get_technology(&self, tech_id: &str) -> Option<Technology> {
        self.technologies.get(tech_id).map(|t| t.clone())
    }

    /// Technologies whose category equals `category`, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<Tagged<Technology>> {
        let wanted = category.to_lowercase();

        let mut matches: Vec<Tagged<Technology>> = self
            .technologies
            .iter()
            .filter(|entry| entry.value().category.to_lowercase() == wanted)
            .map(|entry| Tagged::new(entry.key().clone(), entry.value().clone()))
            .collect();

        matches.sort_by(|a, b| a.id.cmp(&b.id));
        matches
    }

    pub fn add_learning_path(&self, path_id: &str, path: LearningPath) -> Result<()> {
        require_id("learning path", path_id)?;

        self.learning_paths.insert(path_id.to_string(), path);
        debug!("Stored learning path: {}", path_id);
        Ok(())
    }

    pub fn add_learning_path_value(&self, path_id: &str, value: serde_json::Value) -> Result<()> {
        let path = decode_record("learning path", path_id, value).inspect_err(|e| {
            warn!("Rejected learning path '{}': {}", path_id, e);
        })?;
        self.add_learning_path(path_id, path)
    }

    pub fn get_learning_path(&self, path_id: &str) -> Option<LearningPath> {
        self.learning_paths.get(path_id).map(|p| p.clone())
    }

    /// Every technology's name and latest version, ordered by name
    pub fn latest_updates(&self) -> Vec<TechUpdate> {
        let mut updates: Vec<TechUpdate> = self
            .technologies
            .iter()
            .map(|entry| {
                let tech = entry.value();
                TechUpdate {
                    id: entry.key().clone(),
                    name: tech.name.clone(),
                    version: tech.latest_version.clone(),
                    category: tech.category.clone(),
                }
            })
            .collect();

        updates.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        updates
    }

    pub fn technology_count(&self) -> usize {
        self.technologies.len()
    }

    pub fn learning_path_count(&self) -> usize {
        self.learning_paths.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn technology(name: &str, category: &str, version: &str) -> Technology {
        Technology {
            name: name.to_string(),
            category: category.to_string(),
            description: format!("{} services", name),
            latest_version: version.to_string(),
            resources: vec!["Doc 1".to_string()],
        }
    }

    fn learning_path() -> LearningPath {
        LearningPath {
            title: "AI Fundamentals".to_string(),
            technologies: vec!["azure-ai".to_string(), "not-registered".to_string()],
            modules: vec!["Module 1".to_string(), "Module 2".to_string()],
            duration: "4 weeks".to_string(),
            level: "Beginner".to_string(),
        }
    }

    #[test]
    fn test_add_and_get_technology() {
        let registry = TechRegistry::new();
        let tech = technology("Azure AI", "AI", "2024.1");

        registry.add_technology("azure-ai", tech.clone()).unwrap();
        assert_eq!(registry.get_technology("azure-ai"), Some(tech));
        assert!(registry.get_technology("NOTFOUND").is_none());
    }

    #[test]
    fn test_add_technology_invalid() {
        let registry = TechRegistry::new();
        assert!(registry
            .add_technology("", technology("Azure AI", "AI", "2024.1"))
            .is_err());
        assert!(registry
            .add_technology_value("azure-ai", json!({ "name": "Azure AI", "category": "AI" }))
            .is_err());
        assert_eq!(registry.technology_count(), 0);
    }

    #[test]
    fn test_add_technology_replaces() {
        let registry = TechRegistry::new();
        registry
            .add_technology("azure-ai", technology("Azure AI", "AI", "2024.1"))
            .unwrap();
        registry
            .add_technology("azure-ai", technology("Azure AI Foundry", "AI", "2024.2"))
            .unwrap();

        assert_eq!(registry.technology_count(), 1);
        assert_eq!(
            registry.get_technology("azure-ai"),
            Some(technology("Azure AI Foundry", "AI", "2024.2"))
        );
        assert_eq!(registry.latest_updates()[0].version, "2024.2");
    }

    #[test]
    fn test_by_category() {
        let registry = TechRegistry::new();
        registry
            .add_technology("azure-ai", technology("Azure AI", "AI", "2024.1"))
            .unwrap();
        registry
            .add_technology("azure-ml", technology("Azure ML", "ai", "2024.2"))
            .unwrap();
        registry
            .add_technology("azure-devops", technology("Azure DevOps", "DevOps", "2024.1"))
            .unwrap();

        let ai = registry.by_category("ai");
        assert_eq!(ai.len(), 2);
        assert_eq!(ai[0].id, "azure-ai");
        assert_eq!(ai[1].id, "azure-ml");

        assert_eq!(registry.by_category("AI").len(), 2);
        assert_eq!(registry.by_category("devops")[0].id, "azure-devops");
    }

    #[test]
    fn test_by_category_exact_match_only() {
        let registry = TechRegistry::new();
        registry
            .add_technology("azure-ai", technology("Azure AI", "AI", "2024.1"))
            .unwrap();

        assert!(registry.by_category("A").is_empty());
        assert!(registry.by_category("Security").is_empty());
    }

    #[test]
    fn test_learning_paths() {
        let registry = TechRegistry::new();
        registry.add_learning_path("ai-path", learning_path()).unwrap();

        assert_eq!(registry.get_learning_path("ai-path"), Some(learning_path()));
        assert!(registry.get_learning_path("NOTFOUND").is_none());
        // separate namespace from technologies
        assert!(registry.get_technology("ai-path").is_none());
        assert_eq!(registry.learning_path_count(), 1);
    }

    #[test]
    fn test_add_learning_path_replaces() {
        let registry = TechRegistry::new();
        registry.add_learning_path("ai-path", learning_path()).unwrap();

        let mut revised = learning_path();
        revised.title = "AI Fundamentals (revised)".to_string();
        revised.modules = vec!["Module 1".to_string()];
        registry.add_learning_path("ai-path", revised.clone()).unwrap();

        assert_eq!(registry.learning_path_count(), 1);
        assert_eq!(registry.get_learning_path("ai-path"), Some(revised));
    }

    #[test]
    fn test_add_learning_path_invalid() {
        let registry = TechRegistry::new();
        assert!(registry.add_learning_path("", learning_path()).is_err());
        assert!(registry
            .add_learning_path_value("ai-path", json!({ "title": "AI Fundamentals" }))
            .is_err());
        assert_eq!(registry.learning_path_count(), 0);
    }

    #[test]
    fn test_add_learning_path_value() {
        let registry = TechRegistry::new();
        registry
            .add_learning_path_value(
                "ai-expert",
                json!({
                    "title": "Azure AI Expert",
                    "technologies": ["azure-ai", "azure-ml"],
                    "modules": ["AI Fundamentals", "Machine Learning"],
                    "duration": "8 weeks",
                    "level": "Advanced"
                }),
            )
            .unwrap();

        assert_eq!(registry.get_learning_path("ai-expert").unwrap().duration, "8 weeks");
    }

    #[test]
    fn test_latest_updates() {
        let registry = TechRegistry::new();
        registry
            .add_technology("azure-ml", technology("Azure ML", "AI", "2024.2"))
            .unwrap();
        registry
            .add_technology("azure-ai", technology("Azure AI", "AI", "2024.1"))
            .unwrap();

        let updates = registry.latest_updates();
        let names: Vec<&str> = updates.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Azure AI", "Azure ML"]);
        assert_eq!(updates[0].version, "2024.1");
        assert_eq!(updates[0].id, "azure-ai");
        assert_eq!(updates[1].category, "AI");
    }

    #[test]
    fn test_latest_updates_case_sensitive_order() {
        let registry = TechRegistry::new();
        registry
            .add_technology("lower", technology("azure", "Cloud", "1"))
            .unwrap();
        registry
            .add_technology("upper", technology("Bicep", "Cloud", "1"))
            .unwrap();

        let names: Vec<String> = registry.latest_updates().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["Bicep", "azure"]);
    }
}

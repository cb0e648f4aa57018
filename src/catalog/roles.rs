//! Role catalog: job-role requirement profiles consumed by the engine

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Requirement profile for one job role. Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleProfile {
    pub title: String,
    pub must_have_skills: Vec<String>,
    pub good_to_have_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: String,
    /// Optional per-skill importance multipliers on top of the taxonomy
    /// category weight. Skills absent from the map default to 1.0.
    #[serde(default)]
    pub importance: HashMap<String, f64>,
}

impl RoleProfile {
    pub fn importance_of(&self, canonical_name: &str) -> f64 {
        self.importance.get(canonical_name).copied().unwrap_or(1.0)
    }

    /// Required and preferred skills together, must-haves first.
    pub fn all_skills(&self) -> Vec<String> {
        let mut skills = self.must_have_skills.clone();
        skills.extend(self.good_to_have_skills.iter().cloned());
        skills
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleEntries {
    pub roles: Vec<RoleProfile>,
}

/// Case-insensitive role lookup over the loaded catalog.
pub struct RoleCatalog {
    roles: Vec<RoleProfile>,
}

impl RoleCatalog {
    pub fn with_defaults() -> Self {
        Self {
            roles: Self::default_roles(),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let entries: RoleEntries = toml::from_str(&content)
            .map_err(|e| SkillGapError::Catalog(format!("Failed to parse role catalog: {}", e)))?;
        if entries.roles.is_empty() {
            return Err(SkillGapError::Catalog(
                "role catalog contains no roles".to_string(),
            ));
        }
        Ok(Self {
            roles: entries.roles,
        })
    }

    pub fn find(&self, title: &str) -> Option<&RoleProfile> {
        let needle = title.trim().to_lowercase();
        self.roles
            .iter()
            .find(|role| role.title.to_lowercase() == needle)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.title.as_str()).collect()
    }

    pub fn roles(&self) -> &[RoleProfile] {
        &self.roles
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    fn default_roles() -> Vec<RoleProfile> {
        fn strings(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        vec![
            RoleProfile {
                title: "Backend Developer".to_string(),
                must_have_skills: strings(&["python", "sql", "rest api", "git"]),
                good_to_have_skills: strings(&["docker", "redis", "kafka", "aws"]),
                importance: HashMap::from([("python".to_string(), 1.5), ("sql".to_string(), 1.2)]),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Frontend Developer".to_string(),
                must_have_skills: strings(&["javascript", "html", "css", "react"]),
                good_to_have_skills: strings(&["typescript", "next.js", "graphql", "jest"]),
                importance: HashMap::from([("react".to_string(), 1.5)]),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Full Stack Developer".to_string(),
                must_have_skills: strings(&[
                    "javascript",
                    "react",
                    "node.js",
                    "sql",
                    "rest api",
                ]),
                good_to_have_skills: strings(&["typescript", "mongodb", "docker", "aws"]),
                importance: HashMap::new(),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Data Scientist".to_string(),
                must_have_skills: strings(&[
                    "python",
                    "statistics",
                    "machine learning",
                    "pandas",
                    "sql",
                ]),
                good_to_have_skills: strings(&["tensorflow", "pytorch", "spark", "tableau"]),
                importance: HashMap::from([("machine learning".to_string(), 1.5)]),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Machine Learning Engineer".to_string(),
                must_have_skills: strings(&[
                    "python",
                    "machine learning",
                    "deep learning",
                    "pytorch",
                ]),
                good_to_have_skills: strings(&["mlops", "docker", "kubernetes", "aws"]),
                importance: HashMap::from([("deep learning".to_string(), 1.4)]),
                experience_level: "senior".to_string(),
            },
            RoleProfile {
                title: "DevOps Engineer".to_string(),
                must_have_skills: strings(&["linux", "docker", "kubernetes", "ci/cd"]),
                good_to_have_skills: strings(&["terraform", "ansible", "prometheus", "aws"]),
                importance: HashMap::from([("kubernetes".to_string(), 1.5)]),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Data Engineer".to_string(),
                must_have_skills: strings(&["python", "sql", "etl", "spark"]),
                good_to_have_skills: strings(&["airflow", "kafka", "aws", "data engineering"]),
                importance: HashMap::new(),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Mobile Developer".to_string(),
                must_have_skills: strings(&["kotlin", "android"]),
                good_to_have_skills: strings(&["flutter", "react native", "swift", "ios"]),
                importance: HashMap::new(),
                experience_level: "mid".to_string(),
            },
            RoleProfile {
                title: "Security Engineer".to_string(),
                must_have_skills: strings(&[
                    "network security",
                    "penetration testing",
                    "linux",
                ]),
                good_to_have_skills: strings(&["cryptography", "owasp", "python", "aws"]),
                importance: HashMap::new(),
                experience_level: "senior".to_string(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        let catalog = RoleCatalog::with_defaults();
        assert!(catalog.find("backend developer").is_some());
        assert!(catalog.find("  Backend Developer ").is_some());
        assert!(catalog.find("Chief Astronaut").is_none());
    }

    #[test]
    fn importance_defaults_to_one() {
        let catalog = RoleCatalog::with_defaults();
        let role = catalog.find("Backend Developer").unwrap();
        assert_eq!(role.importance_of("python"), 1.5);
        assert_eq!(role.importance_of("git"), 1.0);
    }

    #[test]
    fn all_skills_lists_must_haves_first() {
        let catalog = RoleCatalog::with_defaults();
        let role = catalog.find("Frontend Developer").unwrap();
        let all = role.all_skills();
        assert_eq!(&all[..4], &role.must_have_skills[..]);
        assert_eq!(all.len(), 8);
    }

    #[test]
    fn catalog_roundtrip_through_toml() {
        let catalog = RoleCatalog::with_defaults();
        let entries = RoleEntries {
            roles: catalog.roles().to_vec(),
        };
        let serialized = toml::to_string_pretty(&entries).unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.toml");
        std::fs::write(&path, serialized).unwrap();

        let loaded = RoleCatalog::load_from(&path).unwrap();
        assert_eq!(loaded.role_count(), catalog.role_count());
        assert!(loaded.find("Data Scientist").is_some());
    }
}

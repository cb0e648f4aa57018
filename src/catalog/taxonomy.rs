//! Skill taxonomy: categories, market weights, and skill classification

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Fixed category set for skill classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Devops,
    MachineLearning,
    DataScience,
    WebDevelopment,
    MobileDevelopment,
    Database,
    Cloud,
    Security,
    SoftSkills,
    Tools,
    Frameworks,
    Other,
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Devops => "devops",
            SkillCategory::MachineLearning => "machine_learning",
            SkillCategory::DataScience => "data_science",
            SkillCategory::WebDevelopment => "web_development",
            SkillCategory::MobileDevelopment => "mobile_development",
            SkillCategory::Database => "database",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Security => "security",
            SkillCategory::SoftSkills => "soft_skills",
            SkillCategory::Tools => "tools",
            SkillCategory::Frameworks => "frameworks",
            SkillCategory::Other => "other",
        };
        write!(f, "{}", name)
    }
}

impl SkillCategory {
    pub fn all() -> &'static [SkillCategory] {
        &[
            SkillCategory::Programming,
            SkillCategory::Devops,
            SkillCategory::MachineLearning,
            SkillCategory::DataScience,
            SkillCategory::WebDevelopment,
            SkillCategory::MobileDevelopment,
            SkillCategory::Database,
            SkillCategory::Cloud,
            SkillCategory::Security,
            SkillCategory::SoftSkills,
            SkillCategory::Tools,
            SkillCategory::Frameworks,
            SkillCategory::Other,
        ]
    }

    pub fn description(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "General-purpose programming languages",
            SkillCategory::Devops => "CI/CD, infrastructure automation, and operations",
            SkillCategory::MachineLearning => "ML frameworks, model development, and MLOps",
            SkillCategory::DataScience => "Data analysis, statistics, and data tooling",
            SkillCategory::WebDevelopment => "Frontend and backend web technologies",
            SkillCategory::MobileDevelopment => "iOS, Android, and cross-platform mobile",
            SkillCategory::Database => "Relational and NoSQL data stores",
            SkillCategory::Cloud => "Cloud platforms and managed services",
            SkillCategory::Security => "Application and infrastructure security",
            SkillCategory::SoftSkills => "Communication, leadership, and collaboration",
            SkillCategory::Tools => "Developer tooling and productivity software",
            SkillCategory::Frameworks => "Application frameworks and libraries",
            SkillCategory::Other => "Skills outside the known taxonomy",
        }
    }

    /// Static market-value multiplier used during gap scoring.
    pub fn weight(&self) -> f64 {
        match self {
            SkillCategory::MachineLearning => 0.95,
            SkillCategory::Cloud => 0.9,
            SkillCategory::Security => 0.9,
            SkillCategory::Devops => 0.85,
            SkillCategory::DataScience => 0.85,
            SkillCategory::Programming => 0.8,
            SkillCategory::Database => 0.75,
            SkillCategory::WebDevelopment => 0.7,
            SkillCategory::MobileDevelopment => 0.7,
            SkillCategory::Frameworks => 0.65,
            SkillCategory::Tools => 0.5,
            SkillCategory::SoftSkills => 0.4,
            SkillCategory::Other => Taxonomy::DEFAULT_WEIGHT,
        }
    }
}

/// Category metadata for presentation layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub category: SkillCategory,
    pub description: String,
    pub weight: f64,
    pub sample_skills: Vec<String>,
}

/// Immutable skill -> category mapping loaded once per process.
pub struct Taxonomy {
    classification: HashMap<String, SkillCategory>,
}

impl Taxonomy {
    /// Weight assigned to skills outside the known taxonomy: the midpoint,
    /// so unknown skills neither dominate nor vanish from weighted scores.
    pub const DEFAULT_WEIGHT: f64 = 0.5;

    pub fn with_defaults() -> Self {
        let mut classification = HashMap::new();
        for (category, skills) in Self::default_classification() {
            for skill in skills {
                classification.insert(skill.to_string(), category);
            }
        }
        Self { classification }
    }

    /// Classify a canonical skill name. Unknown skills fall into `Other`
    /// with the default weight rather than failing; the vocabulary is open.
    pub fn classify(&self, canonical_name: &str) -> (SkillCategory, f64) {
        match self.classification.get(canonical_name) {
            Some(category) => (*category, category.weight()),
            None => (SkillCategory::Other, Self::DEFAULT_WEIGHT),
        }
    }

    pub fn category_of(&self, canonical_name: &str) -> SkillCategory {
        self.classify(canonical_name).0
    }

    pub fn weight_of(&self, canonical_name: &str) -> f64 {
        self.classify(canonical_name).1
    }

    pub fn is_known(&self, canonical_name: &str) -> bool {
        self.classification.contains_key(canonical_name)
    }

    pub fn skill_count(&self) -> usize {
        self.classification.len()
    }

    /// Category metadata with a handful of sample skills each.
    pub fn categories(&self) -> Vec<CategoryInfo> {
        SkillCategory::all()
            .iter()
            .map(|category| {
                let mut sample_skills: Vec<String> = self
                    .classification
                    .iter()
                    .filter(|&(_, c)| c == category)
                    .map(|(s, _)| s.clone())
                    .collect();
                sample_skills.sort();
                sample_skills.truncate(5);

                CategoryInfo {
                    category: *category,
                    description: category.description().to_string(),
                    weight: category.weight(),
                    sample_skills,
                }
            })
            .collect()
    }

    fn default_classification() -> Vec<(SkillCategory, Vec<&'static str>)> {
        vec![
            (
                SkillCategory::Programming,
                vec![
                    "python", "javascript", "typescript", "java", "c", "c++", "c#", "go", "rust",
                    "ruby", "php", "swift", "kotlin", "scala", "haskell", "clojure", "r", "matlab",
                    "perl", "elixir", "dart",
                ],
            ),
            (
                SkillCategory::Devops,
                vec![
                    "docker", "kubernetes", "terraform", "ansible", "jenkins", "ci/cd",
                    "github actions", "gitlab ci", "helm", "containers", "microservices",
                    "infrastructure as code", "prometheus", "grafana", "nginx",
                ],
            ),
            (
                SkillCategory::MachineLearning,
                vec![
                    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
                    "keras", "natural language processing", "computer vision", "transformers",
                    "reinforcement learning", "mlops", "hugging face", "llm",
                ],
            ),
            (
                SkillCategory::DataScience,
                vec![
                    "pandas", "numpy", "data analysis", "statistics", "jupyter", "spark",
                    "hadoop", "kafka", "airflow", "data visualization", "tableau", "power bi",
                    "etl", "data engineering",
                ],
            ),
            (
                SkillCategory::WebDevelopment,
                vec![
                    "html", "css", "sass", "react", "vue", "angular", "svelte", "node.js",
                    "express", "next.js", "rest api", "graphql", "grpc", "websockets", "tailwind",
                    "bootstrap", "jquery", "webpack",
                ],
            ),
            (
                SkillCategory::MobileDevelopment,
                vec![
                    "android", "ios", "react native", "flutter", "swiftui", "jetpack compose",
                    "xamarin",
                ],
            ),
            (
                SkillCategory::Database,
                vec![
                    "sql", "postgresql", "mysql", "mongodb", "redis", "elasticsearch",
                    "cassandra", "dynamodb", "sqlite", "oracle", "neo4j", "database design",
                ],
            ),
            (
                SkillCategory::Cloud,
                vec![
                    "aws", "azure", "google cloud", "lambda", "s3", "ec2", "cloudformation",
                    "serverless", "cloud architecture",
                ],
            ),
            (
                SkillCategory::Security,
                vec![
                    "penetration testing", "cryptography", "owasp", "network security",
                    "application security", "oauth", "identity management", "vulnerability assessment",
                ],
            ),
            (
                SkillCategory::SoftSkills,
                vec![
                    "communication", "leadership", "teamwork", "problem solving",
                    "critical thinking", "time management", "project management", "mentoring",
                    "collaboration", "presentation", "agile", "scrum",
                ],
            ),
            (
                SkillCategory::Tools,
                vec![
                    "git", "linux", "bash", "vim", "jira", "confluence", "vscode", "intellij",
                    "powershell", "excel",
                ],
            ),
            (
                SkillCategory::Frameworks,
                vec![
                    "django", "flask", "fastapi", "spring boot", "rails", ".net", "laravel",
                    "pytest", "junit", "selenium", "cypress", "jest",
                ],
            ),
        ]
    }
}

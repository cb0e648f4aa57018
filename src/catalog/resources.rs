//! Learning-resource and project-suggestion catalogs
//!
//! Static lookups feeding the roadmap generator and project recommender:
//! estimated learning hours, resource links per skill, and canned project
//! ideas keyed by skill with category-level fallbacks.

use crate::catalog::taxonomy::SkillCategory;
use std::collections::HashMap;

pub struct ResourceCatalog {
    hours: HashMap<String, u32>,
    resources: HashMap<String, Vec<String>>,
    projects_by_skill: HashMap<String, Vec<String>>,
    projects_by_category: HashMap<SkillCategory, Vec<String>>,
}

impl ResourceCatalog {
    pub fn with_defaults() -> Self {
        Self {
            hours: Self::default_hours(),
            resources: Self::default_resources(),
            projects_by_skill: Self::default_projects_by_skill(),
            projects_by_category: Self::default_projects_by_category(),
        }
    }

    /// Estimated learning hours for a skill, if catalogued.
    pub fn hours_for(&self, canonical_name: &str) -> Option<u32> {
        self.hours.get(canonical_name).copied()
    }

    /// Learning resources for a skill, with a generic fallback so the
    /// roadmap never ships an empty resource list.
    pub fn resources_for(&self, canonical_name: &str) -> Vec<String> {
        match self.resources.get(canonical_name) {
            Some(links) => links.clone(),
            None => vec![
                format!("Official {} documentation", canonical_name),
                format!("Hands-on {} tutorial or course", canonical_name),
            ],
        }
    }

    /// Project suggestions for a skill; falls back to its category so every
    /// missing skill gets at least one suggestion.
    pub fn projects_for(&self, canonical_name: &str, category: SkillCategory) -> Vec<String> {
        if let Some(projects) = self.projects_by_skill.get(canonical_name) {
            return projects.clone();
        }
        match self.projects_by_category.get(&category) {
            Some(projects) => projects.clone(),
            None => vec![format!(
                "Build a small portfolio project that exercises {}",
                canonical_name
            )],
        }
    }

    pub fn entry_count(&self) -> usize {
        self.hours.len()
    }

    fn default_hours() -> HashMap<String, u32> {
        let table: Vec<(&str, u32)> = vec![
            ("python", 80),
            ("javascript", 80),
            ("typescript", 40),
            ("java", 90),
            ("go", 60),
            ("rust", 100),
            ("sql", 50),
            ("html", 25),
            ("css", 35),
            ("react", 60),
            ("vue", 50),
            ("angular", 70),
            ("node.js", 50),
            ("next.js", 30),
            ("express", 25),
            ("django", 45),
            ("flask", 30),
            ("fastapi", 25),
            ("spring boot", 60),
            ("rest api", 30),
            ("graphql", 30),
            ("docker", 35),
            ("kubernetes", 70),
            ("terraform", 45),
            ("ansible", 35),
            ("ci/cd", 30),
            ("jenkins", 25),
            ("linux", 60),
            ("bash", 30),
            ("git", 20),
            ("aws", 80),
            ("azure", 70),
            ("google cloud", 70),
            ("machine learning", 120),
            ("deep learning", 100),
            ("statistics", 80),
            ("tensorflow", 60),
            ("pytorch", 60),
            ("scikit-learn", 40),
            ("pandas", 35),
            ("numpy", 25),
            ("spark", 55),
            ("kafka", 40),
            ("airflow", 30),
            ("etl", 40),
            ("postgresql", 40),
            ("mysql", 35),
            ("mongodb", 35),
            ("redis", 25),
            ("elasticsearch", 40),
            ("kotlin", 55),
            ("swift", 60),
            ("android", 80),
            ("ios", 80),
            ("flutter", 60),
            ("react native", 50),
            ("network security", 70),
            ("penetration testing", 90),
            ("cryptography", 80),
            ("communication", 20),
            ("leadership", 40),
            ("agile", 15),
            ("scrum", 15),
        ];
        table
            .into_iter()
            .map(|(skill, hours)| (skill.to_string(), hours))
            .collect()
    }

    fn default_resources() -> HashMap<String, Vec<String>> {
        let table: Vec<(&str, Vec<&str>)> = vec![
            (
                "python",
                vec!["Python official tutorial (docs.python.org)", "Automate the Boring Stuff"],
            ),
            (
                "javascript",
                vec!["MDN JavaScript Guide", "javascript.info"],
            ),
            ("typescript", vec!["TypeScript Handbook"]),
            ("react", vec!["react.dev tutorial", "Epic React workshops"]),
            ("node.js", vec!["Node.js official guides"]),
            ("sql", vec!["SQLBolt interactive lessons", "Use The Index, Luke"]),
            ("docker", vec!["Docker getting-started guide", "Play with Docker labs"]),
            (
                "kubernetes",
                vec!["Kubernetes the Hard Way", "kubernetes.io tutorials"],
            ),
            ("terraform", vec!["HashiCorp Learn: Terraform"]),
            ("aws", vec!["AWS Skill Builder", "AWS Well-Architected labs"]),
            (
                "machine learning",
                vec!["Andrew Ng's Machine Learning course", "Hands-On ML with Scikit-Learn"],
            ),
            (
                "deep learning",
                vec!["fast.ai Practical Deep Learning", "Deep Learning Specialization"],
            ),
            ("pytorch", vec!["PyTorch official tutorials"]),
            ("tensorflow", vec!["TensorFlow developer certificate path"]),
            ("pandas", vec!["pandas Getting Started guide"]),
            ("spark", vec!["Spark: The Definitive Guide"]),
            ("postgresql", vec!["PostgreSQL official tutorial"]),
            ("git", vec!["Pro Git book (git-scm.com)"]),
            ("linux", vec!["Linux Journey", "The Linux Command Line"]),
            ("rest api", vec!["REST API design best practices guides"]),
            ("graphql", vec!["graphql.org learn section"]),
        ];
        table
            .into_iter()
            .map(|(skill, links)| {
                (
                    skill.to_string(),
                    links.into_iter().map(|l| l.to_string()).collect(),
                )
            })
            .collect()
    }

    fn default_projects_by_skill() -> HashMap<String, Vec<String>> {
        let table: Vec<(&str, Vec<&str>)> = vec![
            (
                "react",
                vec!["Build a kanban board with drag-and-drop and local persistence"],
            ),
            (
                "node.js",
                vec!["Implement a URL shortener service with rate limiting"],
            ),
            (
                "docker",
                vec!["Containerize an existing project with a multi-stage build"],
            ),
            (
                "kubernetes",
                vec!["Deploy a two-service app to a local cluster with health checks and autoscaling"],
            ),
            (
                "machine learning",
                vec!["Train and evaluate a churn-prediction model on a public dataset"],
            ),
            (
                "deep learning",
                vec!["Fine-tune a small image classifier and publish an error analysis"],
            ),
            (
                "sql",
                vec!["Design a normalized schema for an e-commerce domain and write analytics queries"],
            ),
            (
                "spark",
                vec!["Build a batch pipeline aggregating a multi-gigabyte public dataset"],
            ),
            (
                "kafka",
                vec!["Stream click events through a producer/consumer pair with replay"],
            ),
            (
                "terraform",
                vec!["Provision a small cloud environment entirely from code"],
            ),
            (
                "rest api",
                vec!["Design and document a versioned CRUD API with authentication"],
            ),
        ];
        table
            .into_iter()
            .map(|(skill, projects)| {
                (
                    skill.to_string(),
                    projects.into_iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }

    fn default_projects_by_category() -> HashMap<SkillCategory, Vec<String>> {
        let table: Vec<(SkillCategory, Vec<&str>)> = vec![
            (
                SkillCategory::Programming,
                vec!["Solve a week of algorithm katas and publish the solutions with tests"],
            ),
            (
                SkillCategory::Devops,
                vec!["Set up a CI pipeline that lints, tests, and deploys a sample app"],
            ),
            (
                SkillCategory::MachineLearning,
                vec!["Reproduce a published ML result on a small dataset"],
            ),
            (
                SkillCategory::DataScience,
                vec!["Run an exploratory analysis on an open dataset and write it up"],
            ),
            (
                SkillCategory::WebDevelopment,
                vec!["Build and deploy a responsive single-page application"],
            ),
            (
                SkillCategory::MobileDevelopment,
                vec!["Ship a small offline-first mobile app to a device"],
            ),
            (
                SkillCategory::Database,
                vec!["Benchmark two storage engines on the same workload"],
            ),
            (
                SkillCategory::Cloud,
                vec!["Deploy a serverless API with infrastructure defined as code"],
            ),
            (
                SkillCategory::Security,
                vec!["Complete a structured capture-the-flag track and document findings"],
            ),
            (
                SkillCategory::SoftSkills,
                vec!["Lead a brown-bag session on a technical topic and collect feedback"],
            ),
            (
                SkillCategory::Tools,
                vec!["Automate a repetitive personal workflow end to end"],
            ),
            (
                SkillCategory::Frameworks,
                vec!["Rebuild a small existing app on the target framework"],
            ),
        ];
        table.into_iter()
            .map(|(category, projects)| {
                (
                    category,
                    projects.into_iter().map(|p| p.to_string()).collect(),
                )
            })
            .collect()
    }
}

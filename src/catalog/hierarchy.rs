//! Static skill-implication relation used by the hierarchical match pass
//!
//! Possessing an advanced skill satisfies a requirement for the more basic
//! skills it implies: knowing kubernetes implies working docker knowledge,
//! deep learning implies machine learning, and so on.

use std::collections::{HashMap, HashSet};

pub struct SkillHierarchy {
    implied_by: HashMap<String, HashSet<String>>,
}

impl SkillHierarchy {
    pub fn with_defaults() -> Self {
        Self::from_pairs(Self::default_pairs())
    }

    /// Build the relation from (advanced, implied-basic) pairs, taking the
    /// transitive closure so deep learning -> machine learning -> statistics
    /// collapses into direct lookups.
    pub fn from_pairs(pairs: Vec<(&str, &str)>) -> Self {
        let mut implied_by: HashMap<String, HashSet<String>> = HashMap::new();
        for (advanced, basic) in pairs {
            implied_by
                .entry(advanced.to_lowercase())
                .or_default()
                .insert(basic.to_lowercase());
        }

        // Transitive closure; the relation is small and acyclic, so a
        // fixpoint iteration converges in a handful of rounds.
        loop {
            let mut grew = false;
            let snapshot: Vec<(String, HashSet<String>)> = implied_by
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            for (advanced, basics) in &snapshot {
                let mut additions = HashSet::new();
                for basic in basics {
                    if let Some(further) = implied_by.get(basic) {
                        for f in further {
                            if f != advanced && !basics.contains(f) {
                                additions.insert(f.clone());
                            }
                        }
                    }
                }
                if !additions.is_empty() {
                    implied_by
                        .entry(advanced.clone())
                        .or_default()
                        .extend(additions);
                    grew = true;
                }
            }
            if !grew {
                break;
            }
        }

        Self { implied_by }
    }

    /// Does possessing `advanced` satisfy a requirement for `basic`?
    pub fn implies(&self, advanced: &str, basic: &str) -> bool {
        self.implied_by
            .get(advanced)
            .is_some_and(|basics| basics.contains(basic))
    }

    /// All skills a given skill implies, if any.
    pub fn implied_skills(&self, advanced: &str) -> Option<&HashSet<String>> {
        self.implied_by.get(advanced)
    }

    pub fn relation_count(&self) -> usize {
        self.implied_by.values().map(|s| s.len()).sum()
    }

    fn default_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("deep learning", "machine learning"),
            ("machine learning", "statistics"),
            ("natural language processing", "machine learning"),
            ("computer vision", "deep learning"),
            ("transformers", "deep learning"),
            ("reinforcement learning", "machine learning"),
            ("tensorflow", "machine learning"),
            ("pytorch", "machine learning"),
            ("kubernetes", "docker"),
            ("kubernetes", "containers"),
            ("docker", "containers"),
            ("helm", "kubernetes"),
            ("terraform", "infrastructure as code"),
            ("cloudformation", "infrastructure as code"),
            ("react", "javascript"),
            ("vue", "javascript"),
            ("angular", "javascript"),
            ("next.js", "react"),
            ("react native", "react"),
            ("typescript", "javascript"),
            ("node.js", "javascript"),
            ("express", "node.js"),
            ("django", "python"),
            ("flask", "python"),
            ("fastapi", "python"),
            ("pandas", "python"),
            ("scikit-learn", "python"),
            ("pyspark", "spark"),
            ("spring boot", "java"),
            ("rails", "ruby"),
            ("swiftui", "swift"),
            ("jetpack compose", "kotlin"),
            ("postgresql", "sql"),
            ("mysql", "sql"),
            ("graphql", "rest api"),
        ]
    }
}

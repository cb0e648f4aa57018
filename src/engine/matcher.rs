//! Intelligent skill matching: exact, fuzzy, and hierarchical passes
//!
//! Each pass runs over the unmatched remainder of the required set and
//! consumes what it matches, so a required skill lands in exactly one
//! bucket. That closed partition is the load-bearing invariant here.

use crate::catalog::ReferenceData;
use crate::engine::normalizer::SkillSet;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use strsim::{jaro_winkler, levenshtein};

/// A fuzzy pairing of a required skill with the closest user skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub user_skill: String,
    /// Normalized similarity in [0, 1] that cleared the threshold.
    pub confidence: f64,
}

/// Outcome of matching a user skill set against a required skill set.
///
/// Every required skill appears in exactly one of the four buckets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MatchResult {
    pub exact: BTreeSet<String>,
    pub fuzzy: BTreeMap<String, FuzzyMatch>,
    /// required skill -> advanced user skill that implies it.
    pub hierarchical: BTreeMap<String, String>,
    pub missing: BTreeSet<String>,
}

impl MatchResult {
    /// All required skills considered covered, across match kinds.
    pub fn matched_required(&self) -> BTreeSet<String> {
        self.exact
            .iter()
            .chain(self.fuzzy.keys())
            .chain(self.hierarchical.keys())
            .cloned()
            .collect()
    }

    pub fn matched_count(&self) -> usize {
        self.exact.len() + self.fuzzy.len() + self.hierarchical.len()
    }

    /// The closed-partition invariant: buckets are disjoint and cover the
    /// required set exactly. Exercised by the test suite; a violation is a
    /// matcher defect, not a runtime condition.
    pub fn partition_holds(&self, required: &SkillSet) -> bool {
        if self.matched_count() + self.missing.len() != required.len() {
            return false;
        }
        let mut seen = BTreeSet::new();
        for skill in self
            .exact
            .iter()
            .chain(self.fuzzy.keys())
            .chain(self.hierarchical.keys())
            .chain(self.missing.iter())
        {
            if !required.contains(skill) || !seen.insert(skill.clone()) {
                return false;
            }
        }
        true
    }
}

pub struct SkillMatcher {
    fuzzy_threshold: f64,
}

impl SkillMatcher {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self {
            fuzzy_threshold: fuzzy_threshold.clamp(0.0, 1.0),
        }
    }

    /// Match two normalized skill sets.
    pub fn match_skills(
        &self,
        user: &SkillSet,
        required: &SkillSet,
        data: &ReferenceData,
    ) -> MatchResult {
        let mut result = MatchResult::default();
        let mut open_required: BTreeSet<String> = required.clone();
        let mut open_user: BTreeSet<String> = user.clone();

        // Pass 1: canonical-name equality.
        for skill in required {
            if open_user.contains(skill) {
                result.exact.insert(skill.clone());
                open_required.remove(skill);
                open_user.remove(skill);
            }
        }

        // Pass 2: string similarity, best pair first. A user skill is
        // consumed by its match so one misspelling cannot satisfy two
        // requirements.
        for (req, user_skill, similarity) in
            self.ranked_fuzzy_candidates(&open_required, &open_user)
        {
            if !open_required.contains(&req) || !open_user.contains(&user_skill) {
                continue;
            }
            open_required.remove(&req);
            open_user.remove(&user_skill);
            result.fuzzy.insert(
                req,
                FuzzyMatch {
                    user_skill,
                    confidence: similarity,
                },
            );
        }

        // Pass 3: an advanced user skill satisfies the basics it implies.
        // Implication is not exclusive, so the user skill is not consumed:
        // kubernetes legitimately covers both docker and containers.
        let remaining: Vec<String> = open_required.iter().cloned().collect();
        for req in remaining {
            let covering = open_user
                .iter()
                .chain(result.exact.iter())
                .find(|u| data.hierarchy.implies(u.as_str(), &req));
            if let Some(covering) = covering {
                result.hierarchical.insert(req.clone(), covering.clone());
                open_required.remove(&req);
            }
        }

        result.missing = open_required;
        result
    }

    /// All (required, user) pairs clearing the threshold, ordered by
    /// descending similarity, then ascending edit distance, then
    /// alphabetically. Fully deterministic.
    fn ranked_fuzzy_candidates(
        &self,
        open_required: &BTreeSet<String>,
        open_user: &BTreeSet<String>,
    ) -> Vec<(String, String, f64)> {
        let mut candidates: Vec<(String, String, f64, usize)> = Vec::new();
        for req in open_required {
            for user_skill in open_user {
                let similarity = jaro_winkler(req, user_skill);
                if similarity >= self.fuzzy_threshold {
                    let distance = levenshtein(req, user_skill);
                    candidates.push((req.clone(), user_skill.clone(), similarity, distance));
                }
            }
        }

        candidates.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.3.cmp(&b.3))
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.0.cmp(&b.0))
        });

        candidates
            .into_iter()
            .map(|(req, user_skill, similarity, _)| (req, user_skill, similarity))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ReferenceData;

    fn skill_set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_pass_consumes_equal_names() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        let user = skill_set(&["python", "sql", "git"]);
        let required = skill_set(&["python", "sql", "docker"]);
        let result = matcher.match_skills(&user, &required, &data);

        assert!(result.exact.contains("python"));
        assert!(result.exact.contains("sql"));
        assert!(result.missing.contains("docker"));
        assert!(result.partition_holds(&required));
    }

    #[test]
    fn fuzzy_pass_catches_close_spellings() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        // A near-miss spelling the alias table does not know.
        let user = skill_set(&["postgresql9"]);
        let required = skill_set(&["postgresql"]);
        let result = matcher.match_skills(&user, &required, &data);

        let fuzzy = result.fuzzy.get("postgresql").expect("fuzzy match expected");
        assert_eq!(fuzzy.user_skill, "postgresql9");
        assert!(fuzzy.confidence >= 0.8);
        assert!(result.partition_holds(&required));
    }

    #[test]
    fn fuzzy_match_consumes_the_user_skill() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        // One near-miss user skill cannot satisfy two similar requirements.
        let user = skill_set(&["postgresql9"]);
        let required = skill_set(&["postgresql", "postgresql10"]);
        let result = matcher.match_skills(&user, &required, &data);

        assert_eq!(result.fuzzy.len(), 1);
        assert_eq!(result.missing.len(), 1);
        assert!(result.partition_holds(&required));
    }

    #[test]
    fn hierarchical_pass_lets_advanced_skills_cover_basics() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        let user = skill_set(&["kubernetes", "deep learning"]);
        let required = skill_set(&["docker", "machine learning", "containers"]);
        let result = matcher.match_skills(&user, &required, &data);

        assert_eq!(result.hierarchical.get("docker").unwrap(), "kubernetes");
        assert_eq!(
            result.hierarchical.get("machine learning").unwrap(),
            "deep learning"
        );
        // One advanced skill may cover several implied basics.
        assert_eq!(result.hierarchical.get("containers").unwrap(), "kubernetes");
        assert!(result.missing.is_empty());
        assert!(result.partition_holds(&required));
    }

    #[test]
    fn exactly_matched_skills_still_imply_basics() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        let user = skill_set(&["react"]);
        let required = skill_set(&["react", "javascript"]);
        let result = matcher.match_skills(&user, &required, &data);

        assert!(result.exact.contains("react"));
        assert_eq!(result.hierarchical.get("javascript").unwrap(), "react");
        assert!(result.partition_holds(&required));
    }

    #[test]
    fn empty_inputs_yield_empty_results() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        let empty = SkillSet::new();
        let required = skill_set(&["python"]);

        let result = matcher.match_skills(&empty, &required, &data);
        assert_eq!(result.missing, required);
        assert!(result.partition_holds(&required));

        let result = matcher.match_skills(&required, &empty, &data);
        assert_eq!(result.matched_count(), 0);
        assert!(result.partition_holds(&empty));
    }

    #[test]
    fn partition_holds_for_mixed_matching() {
        let data = ReferenceData::with_defaults().unwrap();
        let matcher = SkillMatcher::new(0.8);

        let user = skill_set(&["python", "javascripts", "kubernetes", "communication"]);
        let required = skill_set(&["python", "javascript", "docker", "aws", "sql"]);
        let result = matcher.match_skills(&user, &required, &data);

        assert!(result.partition_holds(&required));
        assert!(result.exact.contains("python"));
        assert!(result.fuzzy.contains_key("javascript"));
        assert!(result.hierarchical.contains_key("docker"));
        assert!(result.missing.contains("aws"));
        assert!(result.missing.contains("sql"));
    }
}

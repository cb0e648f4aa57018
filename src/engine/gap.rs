//! Gap scoring: weighted match percentages, star rating, category breakdown

use crate::catalog::{ReferenceData, SkillCategory};
use crate::config::GapConfig;
use crate::engine::matcher::MatchResult;
use crate::engine::NormalizedRole;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Full gap report for one (candidate, role) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapReport {
    pub role_title: String,
    /// Weighted coverage of required + preferred skills, 0-100.
    pub match_percentage: f64,
    /// Weighted coverage of must-have skills only, 0-100. Vacuously 100
    /// for roles declaring no must-haves.
    pub essential_match_percentage: f64,
    pub star_rating: u8,
    pub missing_by_category: BTreeMap<SkillCategory, Vec<String>>,
    /// Required skills the candidate covers with an exact canonical match.
    pub common_skills: Vec<String>,
    /// Required skills not exactly covered; the wording the candidate
    /// should mirror when presenting themselves for this role.
    pub role_specific_skills: Vec<String>,
    /// Effective weight (taxonomy weight x role importance) per role skill.
    pub importance_scores: BTreeMap<String, f64>,
    /// Fraction of required skills covered per category, 0-1.
    pub category_coverage: BTreeMap<SkillCategory, f64>,
}

pub struct GapScorer {
    config: GapConfig,
}

impl GapScorer {
    pub fn new(config: GapConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        result: &MatchResult,
        role: &NormalizedRole,
        data: &ReferenceData,
    ) -> GapReport {
        let matched = result.matched_required();
        let all_skills = role.all_skills();

        let weight_of = |skill: &str| data.taxonomy.weight_of(skill) * role.importance_of(skill);

        let match_percentage = Self::weighted_percentage(
            all_skills.iter().map(String::as_str),
            |s| matched.contains(s),
            &weight_of,
        );
        let essential_match_percentage = Self::weighted_percentage(
            role.must_have.iter().map(String::as_str),
            |s| matched.contains(s),
            &weight_of,
        );

        let mut missing_by_category: BTreeMap<SkillCategory, Vec<String>> = BTreeMap::new();
        for skill in &result.missing {
            missing_by_category
                .entry(data.taxonomy.category_of(skill))
                .or_default()
                .push(skill.clone());
        }

        let mut category_required: BTreeMap<SkillCategory, (usize, usize)> = BTreeMap::new();
        for skill in &all_skills {
            let entry = category_required
                .entry(data.taxonomy.category_of(skill))
                .or_insert((0, 0));
            entry.1 += 1;
            if matched.contains(skill) {
                entry.0 += 1;
            }
        }
        let category_coverage = category_required
            .into_iter()
            .map(|(category, (covered, total))| (category, covered as f64 / total as f64))
            .collect();

        let common_skills: Vec<String> = result.exact.iter().cloned().collect();
        let role_specific_skills: Vec<String> = all_skills
            .iter()
            .filter(|s| !result.exact.contains(*s))
            .cloned()
            .collect();

        let importance_scores = all_skills
            .iter()
            .map(|s| (s.clone(), weight_of(s)))
            .collect();

        GapReport {
            role_title: role.title.clone(),
            match_percentage,
            essential_match_percentage,
            star_rating: self.star_rating(match_percentage),
            missing_by_category,
            common_skills,
            role_specific_skills,
            importance_scores,
            category_coverage,
        }
    }

    /// Weighted coverage percentage. An empty skill list is vacuously
    /// satisfied: 100, never a division by zero.
    fn weighted_percentage<'a>(
        skills: impl Iterator<Item = &'a str>,
        is_matched: impl Fn(&str) -> bool,
        weight_of: &impl Fn(&str) -> f64,
    ) -> f64 {
        let mut covered = 0.0;
        let mut total = 0.0;
        for skill in skills {
            let weight = weight_of(skill);
            total += weight;
            if is_matched(skill) {
                covered += weight;
            }
        }
        if total <= 0.0 {
            return 100.0;
        }
        (covered / total * 100.0).clamp(0.0, 100.0)
    }

    fn star_rating(&self, match_percentage: f64) -> u8 {
        let bands = &self.config.star_bands;
        if match_percentage >= bands[0] {
            5
        } else if match_percentage >= bands[1] {
            4
        } else if match_percentage >= bands[2] {
            3
        } else if match_percentage >= bands[3] {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::engine::matcher::SkillMatcher;
    use crate::engine::normalizer::SkillSet;

    fn skill_set(items: &[&str]) -> SkillSet {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn role(must: &[&str], good: &[&str]) -> NormalizedRole {
        NormalizedRole {
            title: "Test Role".to_string(),
            must_have: skill_set(must),
            good_to_have: skill_set(good),
            importance: Default::default(),
            experience_level: String::new(),
        }
    }

    fn score_for(user: &[&str], must: &[&str], good: &[&str]) -> GapReport {
        let data = ReferenceData::with_defaults().unwrap();
        let config = Config::default();
        let matcher = SkillMatcher::new(config.matching.fuzzy_threshold);
        let scorer = GapScorer::new(config.gap);

        let role = role(must, good);
        let user = skill_set(user);
        let required: SkillSet = role.all_skills().into_iter().collect();
        let result = matcher.match_skills(&user, &required, &data);
        scorer.score(&result, &role, &data)
    }

    #[test]
    fn full_coverage_scores_one_hundred_and_five_stars() {
        let report = score_for(&["python", "sql"], &["python", "sql"], &[]);
        assert_eq!(report.match_percentage, 100.0);
        assert_eq!(report.essential_match_percentage, 100.0);
        assert_eq!(report.star_rating, 5);
        assert!(report.role_specific_skills.is_empty());
    }

    #[test]
    fn empty_role_is_vacuously_satisfied() {
        let report = score_for(&["python"], &[], &[]);
        assert_eq!(report.match_percentage, 100.0);
        assert_eq!(report.essential_match_percentage, 100.0);
    }

    #[test]
    fn missing_must_haves_drag_the_essential_score() {
        // Same-category skills so weighting does not skew the halves.
        let report = score_for(&["python"], &["python", "java"], &[]);
        assert!(report.essential_match_percentage > 0.0);
        assert!(report.essential_match_percentage < 100.0);
        assert!(report.missing_by_category.values().flatten().any(|s| s == "java"));
    }

    #[test]
    fn scores_stay_in_bounds() {
        let report = score_for(&[], &["python", "docker", "aws"], &["sql"]);
        assert!((0.0..=100.0).contains(&report.match_percentage));
        assert!((0.0..=100.0).contains(&report.essential_match_percentage));
        assert!((1..=5).contains(&report.star_rating));
        assert_eq!(report.star_rating, 1);
    }

    #[test]
    fn category_coverage_tracks_matches() {
        let report = score_for(&["python"], &["python", "java", "docker"], &[]);
        let programming = report
            .category_coverage
            .get(&SkillCategory::Programming)
            .copied()
            .unwrap();
        assert!((programming - 0.5).abs() < 1e-9);
        let devops = report
            .category_coverage
            .get(&SkillCategory::Devops)
            .copied()
            .unwrap();
        assert_eq!(devops, 0.0);
    }

    #[test]
    fn importance_override_shifts_the_weighting() {
        let data = ReferenceData::with_defaults().unwrap();
        let config = Config::default();
        let matcher = SkillMatcher::new(config.matching.fuzzy_threshold);
        let scorer = GapScorer::new(config.gap);

        let mut role = role(&["python", "java"], &[]);
        role.importance.insert("python".to_string(), 3.0);

        let user = skill_set(&["python"]);
        let required: SkillSet = role.all_skills().into_iter().collect();
        let result = matcher.match_skills(&user, &required, &data);
        let report = scorer.score(&result, &role, &data);

        // python carries triple importance, so covering it alone clears 50%.
        assert!(report.match_percentage > 50.0);
        assert_eq!(report.importance_scores.get("python").copied().unwrap(), 0.8 * 3.0);
    }
}

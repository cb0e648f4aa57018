//! ATS / resume compatibility scoring
//!
//! Role-independent 0-100 score composed from additive terms. Each term is
//! capped before summing so no single factor can dominate.

use crate::catalog::ReferenceData;
use crate::config::AtsConfig;
use crate::engine::normalizer::SkillSet;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsCategory {
    Excellent,
    Good,
    Average,
    Poor,
}

impl fmt::Display for AtsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AtsCategory::Excellent => "Excellent",
            AtsCategory::Good => "Good",
            AtsCategory::Average => "Average",
            AtsCategory::Poor => "Poor",
        };
        write!(f, "{}", label)
    }
}

/// How complete the supplied profile was; a score computed from skills
/// alone is weaker evidence than one backed by experience and projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AtsConfidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    pub score: f64,
    pub category: AtsCategory,
    pub confidence: AtsConfidence,
    pub breakdown: AtsBreakdown,
}

/// Per-term contributions after capping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsBreakdown {
    pub base: f64,
    pub skill_points: f64,
    pub experience_points: f64,
    pub high_value_bonus: f64,
    pub high_value_skills: Vec<String>,
}

pub struct AtsScorer {
    config: AtsConfig,
}

impl AtsScorer {
    pub fn new(config: AtsConfig) -> Self {
        Self { config }
    }

    pub fn score(
        &self,
        skills: &SkillSet,
        experience_years: f64,
        certifications: &[String],
        projects_count: u32,
        data: &ReferenceData,
    ) -> AtsScore {
        let cfg = &self.config;

        let skill_points =
            (skills.len() as f64 * cfg.points_per_skill).min(cfg.skill_cap);
        let experience_points =
            (experience_years.max(0.0) * cfg.points_per_year).min(cfg.experience_cap);

        let high_value_skills: Vec<String> = skills
            .iter()
            .filter(|s| data.taxonomy.weight_of(s) >= cfg.high_value_weight_threshold)
            .cloned()
            .collect();
        let high_value_bonus =
            (high_value_skills.len() as f64 * cfg.high_value_bonus).min(cfg.high_value_cap);

        let score = (cfg.base_score + skill_points + experience_points + high_value_bonus)
            .clamp(0.0, 100.0);

        AtsScore {
            score,
            category: self.category(score),
            confidence: Self::confidence(experience_years, certifications, projects_count),
            breakdown: AtsBreakdown {
                base: cfg.base_score,
                skill_points,
                experience_points,
                high_value_bonus,
                high_value_skills,
            },
        }
    }

    fn category(&self, score: f64) -> AtsCategory {
        let bands = &self.config.category_bands;
        if score >= bands[0] {
            AtsCategory::Excellent
        } else if score >= bands[1] {
            AtsCategory::Good
        } else if score >= bands[2] {
            AtsCategory::Average
        } else {
            AtsCategory::Poor
        }
    }

    fn confidence(
        experience_years: f64,
        certifications: &[String],
        projects_count: u32,
    ) -> AtsConfidence {
        let signals = [
            experience_years > 0.0,
            !certifications.is_empty(),
            projects_count > 0,
        ]
        .iter()
        .filter(|present| **present)
        .count();

        match signals {
            3 => AtsConfidence::High,
            1 | 2 => AtsConfidence::Medium,
            _ => AtsConfidence::Low,
        }
    }
}

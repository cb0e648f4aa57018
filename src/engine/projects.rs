//! Project recommendations for missing skills

use crate::catalog::{ReferenceData, SkillCategory};
use crate::engine::gap::GapReport;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSuggestion {
    pub skill: String,
    pub category: SkillCategory,
    pub projects: Vec<String>,
}

pub struct ProjectRecommender;

impl ProjectRecommender {
    /// One suggestion set per missing skill. The catalog falls back to
    /// category-level ideas, so no skill is ever left without a suggestion.
    pub fn recommend(gap: &GapReport, data: &ReferenceData) -> Vec<ProjectSuggestion> {
        let mut suggestions = Vec::new();
        for (category, skills) in &gap.missing_by_category {
            for skill in skills {
                suggestions.push(ProjectSuggestion {
                    skill: skill.clone(),
                    category: *category,
                    projects: data.resources.projects_for(skill, *category),
                });
            }
        }
        suggestions.sort_by(|a, b| a.skill.cmp(&b.skill));
        suggestions
    }
}

//! Learning-roadmap generation from the gap report

use crate::catalog::{ReferenceData, SkillCategory};
use crate::config::RoadmapConfig;
use crate::engine::gap::GapReport;
use serde::{Deserialize, Serialize};

/// One prioritized step in the learning plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub skill: String,
    pub category: SkillCategory,
    /// Category weight scaled by how poorly that category is covered.
    pub priority: f64,
    pub estimated_hours: u32,
    pub resources: Vec<String>,
}

pub struct RoadmapGenerator {
    config: RoadmapConfig,
}

impl RoadmapGenerator {
    pub fn new(config: RoadmapConfig) -> Self {
        Self { config }
    }

    /// Build the plan for every missing skill, most valuable gap first.
    /// Ordering is deterministic: priority, then category weight, then name.
    pub fn generate(&self, gap: &GapReport, data: &ReferenceData) -> Vec<RoadmapEntry> {
        let mut entries: Vec<RoadmapEntry> = Vec::new();

        for (category, skills) in &gap.missing_by_category {
            let coverage = gap.category_coverage.get(category).copied().unwrap_or(0.0);
            for skill in skills {
                let weight = data.taxonomy.weight_of(skill);
                let estimated_hours = data
                    .resources
                    .hours_for(skill)
                    .unwrap_or(self.config.default_hours)
                    .max(1);

                entries.push(RoadmapEntry {
                    skill: skill.clone(),
                    category: *category,
                    priority: weight * (1.0 - coverage),
                    estimated_hours,
                    resources: data.resources.resources_for(skill),
                });
            }
        }

        entries.sort_by(|a, b| {
            b.priority
                .partial_cmp(&a.priority)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.category
                        .weight()
                        .partial_cmp(&a.category.weight())
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.skill.cmp(&b.skill))
        });

        entries
    }

    /// Total estimated effort across the plan.
    pub fn total_hours(entries: &[RoadmapEntry]) -> u32 {
        entries.iter().map(|e| e.estimated_hours).sum()
    }
}

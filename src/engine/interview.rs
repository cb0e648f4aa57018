//! Interview-readiness assessment derived from the gap report

use crate::engine::gap::GapReport;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterviewVerdict {
    InterviewReady,
    NearlyReady,
    NeedsPractice,
}

impl fmt::Display for InterviewVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InterviewVerdict::InterviewReady => "Interview Ready",
            InterviewVerdict::NearlyReady => "Nearly Ready",
            InterviewVerdict::NeedsPractice => "Needs Practice",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReadiness {
    pub verdict: InterviewVerdict,
    pub summary: String,
    /// Categories with outstanding must-have gaps, worst coverage first.
    pub focus_areas: Vec<String>,
}

pub struct InterviewAssessor;

impl InterviewAssessor {
    /// Derive the verdict from essential coverage and the star rating.
    /// Purely qualitative; never fails, never needs optional data.
    pub fn assess(gap: &GapReport) -> InterviewReadiness {
        let essential = gap.essential_match_percentage;
        let verdict = if essential >= 100.0 && gap.star_rating >= 4 {
            InterviewVerdict::InterviewReady
        } else if essential >= 75.0 && gap.star_rating >= 3 {
            InterviewVerdict::NearlyReady
        } else {
            InterviewVerdict::NeedsPractice
        };

        let mut focus_areas: Vec<(String, f64)> = gap
            .missing_by_category
            .iter()
            .map(|(category, _)| {
                let coverage = gap.category_coverage.get(category).copied().unwrap_or(0.0);
                (category.to_string(), coverage)
            })
            .collect();
        focus_areas.sort_by(|a, b| {
            a.1.partial_cmp(&b.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let summary = match verdict {
            InterviewVerdict::InterviewReady => format!(
                "All must-have skills for {} are covered; focus on interview practice, not new skills.",
                gap.role_title
            ),
            InterviewVerdict::NearlyReady => format!(
                "Close to the bar for {}: {:.0}% of must-have weight covered. Close the remaining gaps before applying.",
                gap.role_title, essential
            ),
            InterviewVerdict::NeedsPractice => format!(
                "Substantial gaps remain for {}: {:.0}% of must-have weight covered. Work the learning plan first.",
                gap.role_title, essential
            ),
        };

        InterviewReadiness {
            verdict,
            summary,
            focus_areas: focus_areas.into_iter().map(|(name, _)| name).collect(),
        }
    }
}

//! Role-combined scoring: blending gap and ATS signals into a readiness verdict

use crate::config::CombinedConfig;
use crate::engine::ats::AtsScore;
use crate::engine::gap::GapReport;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Readiness {
    Ready,
    AlmostReady,
    NeedsPreparation,
}

impl fmt::Display for Readiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Readiness::Ready => "Ready",
            Readiness::AlmostReady => "Almost Ready",
            Readiness::NeedsPreparation => "Needs Preparation",
        };
        write!(f, "{}", label)
    }
}

/// Combined fit of one candidate against one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleFit {
    pub role_title: String,
    /// Weighted average of the ATS score and the gap match percentage.
    pub combined_score: f64,
    pub readiness: Readiness,
    pub gap: GapReport,
    pub ats: AtsScore,
}

pub struct CombinedScorer {
    config: CombinedConfig,
}

impl CombinedScorer {
    pub fn new(config: CombinedConfig) -> Self {
        Self { config }
    }

    pub fn combine(&self, gap: GapReport, ats: AtsScore) -> RoleFit {
        let combined_score = (ats.score * self.config.ats_weight
            + gap.match_percentage * self.config.gap_weight)
            .clamp(0.0, 100.0);

        RoleFit {
            role_title: gap.role_title.clone(),
            combined_score,
            readiness: self.readiness(combined_score),
            gap,
            ats,
        }
    }

    /// Rank fits for one candidate across several roles: descending by
    /// combined score, ties broken by essential match percentage.
    pub fn rank(&self, mut fits: Vec<RoleFit>) -> Vec<RoleFit> {
        fits.sort_by(|a, b| {
            b.combined_score
                .partial_cmp(&a.combined_score)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| {
                    b.gap
                        .essential_match_percentage
                        .partial_cmp(&a.gap.essential_match_percentage)
                        .unwrap_or(std::cmp::Ordering::Equal)
                })
                .then_with(|| a.role_title.cmp(&b.role_title))
        });
        fits
    }

    fn readiness(&self, combined_score: f64) -> Readiness {
        let bands = &self.config.readiness_bands;
        if combined_score >= bands[0] {
            Readiness::Ready
        } else if combined_score >= bands[1] {
            Readiness::AlmostReady
        } else {
            Readiness::NeedsPreparation
        }
    }
}

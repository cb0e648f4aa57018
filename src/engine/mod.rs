//! Analysis engine: the operation family exposed to callers
//!
//! Stateless per call. Every operation runs against an immutable
//! reference-data snapshot taken at entry, so catalog reloads never tear a
//! running analysis.

pub mod ats;
pub mod combined;
pub mod gap;
pub mod interview;
pub mod matcher;
pub mod normalizer;
pub mod projects;
pub mod roadmap;

use crate::catalog::{CatalogHandle, ReferenceData, RoleProfile};
use crate::config::Config;
use crate::error::{Result, SkillGapError};
use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub use ats::{AtsCategory, AtsConfidence, AtsScore, AtsScorer};
pub use combined::{CombinedScorer, Readiness, RoleFit};
pub use gap::{GapReport, GapScorer};
pub use interview::{InterviewAssessor, InterviewReadiness, InterviewVerdict};
pub use matcher::{FuzzyMatch, MatchResult, SkillMatcher};
pub use normalizer::{NormalizeOutcome, NormalizeStats, SkillNormalizer, SkillSet};
pub use projects::{ProjectRecommender, ProjectSuggestion};
pub use roadmap::{RoadmapEntry, RoadmapGenerator};

/// Candidate inputs supplied by the caller: raw skills plus the experience
/// descriptor the resume/profile layers extracted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub raw_skills: Vec<String>,
    #[serde(default)]
    pub experience_years: f64,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub projects_count: u32,
}

/// A role's requirements after skill normalization, ready for matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizedRole {
    pub title: String,
    pub must_have: SkillSet,
    pub good_to_have: SkillSet,
    pub importance: HashMap<String, f64>,
    pub experience_level: String,
}

impl NormalizedRole {
    pub fn importance_of(&self, canonical_name: &str) -> f64 {
        self.importance.get(canonical_name).copied().unwrap_or(1.0)
    }

    /// Must-have and good-to-have skills, deduplicated, must-haves first.
    pub fn all_skills(&self) -> Vec<String> {
        let mut skills: Vec<String> = self.must_have.iter().cloned().collect();
        for skill in &self.good_to_have {
            if !self.must_have.contains(skill) {
                skills.push(skill.clone());
            }
        }
        skills
    }
}

/// Headline verdict for one (candidate, role) analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleMatchConfidence {
    pub role_title: String,
    pub combined_score: f64,
    pub readiness: Readiness,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub engine_version: String,
    pub known_skills: usize,
    pub catalog_roles: usize,
}

/// Complete analysis of one candidate against one role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub role_match_confidence: RoleMatchConfidence,
    pub skill_gap_analysis: GapReport,
    pub scoring_analysis: AtsScore,
    pub learning_roadmap: Vec<RoadmapEntry>,
    pub project_recommendations: Vec<ProjectSuggestion>,
    pub interview_readiness: InterviewReadiness,
    pub metadata: ReportMetadata,
}

/// Coordinates the pipeline components over a shared catalog handle.
pub struct AnalysisEngine {
    catalog: CatalogHandle,
    normalizer: SkillNormalizer,
    matcher: SkillMatcher,
    gap_scorer: GapScorer,
    ats_scorer: AtsScorer,
    combined_scorer: CombinedScorer,
    roadmap_generator: RoadmapGenerator,
}

impl AnalysisEngine {
    pub fn new(catalog: CatalogHandle, config: Config) -> Self {
        Self {
            catalog,
            normalizer: SkillNormalizer::new(),
            matcher: SkillMatcher::new(config.matching.fuzzy_threshold),
            gap_scorer: GapScorer::new(config.gap.clone()),
            ats_scorer: AtsScorer::new(config.ats.clone()),
            combined_scorer: CombinedScorer::new(config.combined.clone()),
            roadmap_generator: RoadmapGenerator::new(config.roadmap.clone()),
        }
    }

    pub fn with_defaults() -> Result<Self> {
        Ok(Self::new(CatalogHandle::with_defaults()?, Config::default()))
    }

    /// Current reference-data snapshot. Calls that need consistency across
    /// several steps take one snapshot up front and reuse it.
    pub fn snapshot(&self) -> Arc<ReferenceData> {
        self.catalog.snapshot()
    }

    /// Rebuild reference data from its sources and swap it in atomically.
    pub fn reload_catalog(&self) -> Result<()> {
        self.catalog.reload()
    }

    /// Full pipeline for one candidate against one role.
    pub fn analyze(&self, profile: &CandidateProfile, role_title: &str) -> Result<AnalysisReport> {
        let title = role_title.trim();
        if title.is_empty() {
            return Err(SkillGapError::InvalidInput(
                "role title must not be blank".to_string(),
            ));
        }

        let data = self.snapshot();
        let user = self.normalized_profile_skills(profile, &data)?;
        let role = self.lookup_role(title, &data)?;

        info!(
            "Analyzing {} user skills against role '{}'",
            user.len(),
            role.title
        );

        let required: SkillSet = role.all_skills().into_iter().collect();
        let match_result = self.matcher.match_skills(&user, &required, &data);
        debug_assert!(match_result.partition_holds(&required));

        let gap = self.gap_scorer.score(&match_result, &role, &data);
        let ats = self.ats_scorer.score(
            &user,
            profile.experience_years,
            &profile.certifications,
            profile.projects_count,
            &data,
        );
        let learning_roadmap = self.roadmap_generator.generate(&gap, &data);
        let project_recommendations = ProjectRecommender::recommend(&gap, &data);
        let interview_readiness = InterviewAssessor::assess(&gap);

        let fit = self.combined_scorer.combine(gap, ats);
        debug!(
            "Role '{}': combined {:.1}, readiness {}",
            fit.role_title, fit.combined_score, fit.readiness
        );

        Ok(AnalysisReport {
            role_match_confidence: RoleMatchConfidence {
                role_title: fit.role_title.clone(),
                combined_score: fit.combined_score,
                readiness: fit.readiness,
            },
            skill_gap_analysis: fit.gap,
            scoring_analysis: fit.ats,
            learning_roadmap,
            project_recommendations,
            interview_readiness,
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                known_skills: data.taxonomy.skill_count(),
                catalog_roles: data.roles.role_count(),
            },
        })
    }

    /// Normalize raw skill labels; reports resolution stats alongside.
    pub fn normalize(&self, raw_skills: &[String]) -> NormalizeOutcome {
        let data = self.snapshot();
        self.normalizer.normalize(raw_skills, &data)
    }

    /// Raw matching without scoring.
    pub fn match_skills(&self, user_skills: &[String], required_skills: &[String]) -> MatchResult {
        let data = self.snapshot();
        let user = self.normalizer.normalize(user_skills, &data).skills;
        let required = self.normalizer.normalize(required_skills, &data).skills;
        self.matcher.match_skills(&user, &required, &data)
    }

    /// Role-independent resume compatibility score.
    pub fn ats_score(&self, profile: &CandidateProfile) -> Result<AtsScore> {
        let data = self.snapshot();
        let user = self.normalized_profile_skills(profile, &data)?;
        Ok(self.ats_scorer.score(
            &user,
            profile.experience_years,
            &profile.certifications,
            profile.projects_count,
            &data,
        ))
    }

    /// Rank the candidate against several roles (all catalog roles when
    /// `role_titles` is empty): descending combined score, ties broken by
    /// essential match percentage.
    pub fn rank_roles(
        &self,
        profile: &CandidateProfile,
        role_titles: &[String],
    ) -> Result<Vec<RoleFit>> {
        let data = self.snapshot();
        let user = self.normalized_profile_skills(profile, &data)?;

        let roles: Vec<NormalizedRole> = if role_titles.is_empty() {
            data.roles
                .roles()
                .iter()
                .map(|r| self.normalize_role(r, &data))
                .collect()
        } else {
            role_titles
                .iter()
                .map(|title| self.lookup_role(title.trim(), &data))
                .collect::<Result<Vec<_>>>()?
        };

        let ats = self.ats_scorer.score(
            &user,
            profile.experience_years,
            &profile.certifications,
            profile.projects_count,
            &data,
        );

        let fits = roles
            .into_iter()
            .map(|role| {
                let required: SkillSet = role.all_skills().into_iter().collect();
                let match_result = self.matcher.match_skills(&user, &required, &data);
                let gap = self.gap_scorer.score(&match_result, &role, &data);
                self.combined_scorer.combine(gap, ats.clone())
            })
            .collect();

        Ok(self.combined_scorer.rank(fits))
    }

    fn normalized_profile_skills(
        &self,
        profile: &CandidateProfile,
        data: &ReferenceData,
    ) -> Result<SkillSet> {
        if profile.raw_skills.iter().all(|s| s.trim().is_empty()) {
            return Err(SkillGapError::InvalidInput(
                "at least one skill is required".to_string(),
            ));
        }
        let outcome = self.normalizer.normalize(&profile.raw_skills, data);
        if outcome.skills.is_empty() {
            return Err(SkillGapError::InvalidInput(
                "no usable skills after normalization".to_string(),
            ));
        }
        Ok(outcome.skills)
    }

    fn lookup_role(&self, title: &str, data: &ReferenceData) -> Result<NormalizedRole> {
        let role = data
            .roles
            .find(title)
            .ok_or_else(|| SkillGapError::RoleNotFound(title.to_string()))?;
        Ok(self.normalize_role(role, data))
    }

    /// Canonicalize a catalog role's skill lists and importance keys so the
    /// matcher and scorers only ever see canonical names.
    fn normalize_role(&self, role: &RoleProfile, data: &ReferenceData) -> NormalizedRole {
        let must_have = self.normalizer.normalize(&role.must_have_skills, data).skills;
        let good_to_have = self
            .normalizer
            .normalize(&role.good_to_have_skills, data)
            .skills;

        let importance = role
            .importance
            .iter()
            .map(|(skill, weight)| {
                let key = skill.trim().to_lowercase();
                let canonical = data.aliases.resolve(&key).unwrap_or(&key).to_string();
                (canonical, *weight)
            })
            .collect();

        NormalizedRole {
            title: role.title.clone(),
            must_have,
            good_to_have,
            importance,
            experience_level: role.experience_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn profile(skills: &[&str]) -> CandidateProfile {
        CandidateProfile {
            raw_skills: strings(skills),
            experience_years: 2.0,
            education: None,
            certifications: vec![],
            projects_count: 3,
        }
    }

    #[test]
    fn unknown_role_is_a_named_error() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let err = engine
            .analyze(&profile(&["python"]), "Chief Astronaut")
            .unwrap_err();
        assert!(matches!(err, SkillGapError::RoleNotFound(_)));
    }

    #[test]
    fn blank_title_and_empty_skills_are_rejected() {
        let engine = AnalysisEngine::with_defaults().unwrap();

        let err = engine.analyze(&profile(&["python"]), "  ").unwrap_err();
        assert!(matches!(err, SkillGapError::InvalidInput(_)));

        let err = engine
            .analyze(&profile(&[]), "Backend Developer")
            .unwrap_err();
        assert!(matches!(err, SkillGapError::InvalidInput(_)));
    }

    #[test]
    fn analyze_produces_a_complete_report() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let report = engine
            .analyze(
                &profile(&["Python", "SQL", "git", "docker"]),
                "backend developer",
            )
            .unwrap();

        assert_eq!(report.skill_gap_analysis.role_title, "Backend Developer");
        assert!((0.0..=100.0).contains(&report.role_match_confidence.combined_score));
        assert!((0.0..=100.0).contains(&report.scoring_analysis.score));
        // Every missing skill shows up in the roadmap and projects.
        let missing: usize = report
            .skill_gap_analysis
            .missing_by_category
            .values()
            .map(|v| v.len())
            .sum();
        assert_eq!(report.learning_roadmap.len(), missing);
        assert_eq!(report.project_recommendations.len(), missing);
    }

    #[test]
    fn rank_roles_orders_by_fit() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let backend_leaning = profile(&["python", "sql", "rest api", "git", "docker", "redis"]);

        let fits = engine.rank_roles(&backend_leaning, &[]).unwrap();
        assert!(!fits.is_empty());
        assert!(fits
            .windows(2)
            .all(|w| w[0].combined_score >= w[1].combined_score));
        assert_eq!(fits[0].role_title, "Backend Developer");
    }

    #[test]
    fn rank_roles_rejects_unknown_titles() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let err = engine
            .rank_roles(&profile(&["python"]), &strings(&["Nonexistent Role"]))
            .unwrap_err();
        assert!(matches!(err, SkillGapError::RoleNotFound(_)));
    }

    #[test]
    fn reload_does_not_disturb_analysis() {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let before = engine
            .analyze(&profile(&["python", "sql"]), "Backend Developer")
            .unwrap();
        engine.reload_catalog().unwrap();
        let after = engine
            .analyze(&profile(&["python", "sql"]), "Backend Developer")
            .unwrap();
        assert_eq!(
            before.skill_gap_analysis.match_percentage,
            after.skill_gap_analysis.match_percentage
        );
    }
}

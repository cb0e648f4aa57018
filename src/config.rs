//! Configuration management for the skill-gap analyzer
//!
//! All scoring constants (thresholds, bands, term caps) live here rather than
//! as hard-coded numbers in the engine, so deployments can tune them without
//! code changes.

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub matching: MatchingConfig,
    pub gap: GapConfig,
    pub ats: AtsConfig,
    pub combined: CombinedConfig,
    pub roadmap: RoadmapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum normalized similarity for a fuzzy match.
    pub fuzzy_threshold: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapConfig {
    /// Star-rating band floors, highest first: match_percentage >= floor
    /// earns the corresponding number of stars (5 down to 2); below the
    /// last floor is 1 star.
    pub star_bands: [f64; 4],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsConfig {
    pub base_score: f64,
    pub points_per_skill: f64,
    pub skill_cap: f64,
    pub points_per_year: f64,
    pub experience_cap: f64,
    /// Per-skill bonus for skills in high-weight taxonomy categories.
    pub high_value_bonus: f64,
    pub high_value_cap: f64,
    /// Category weight at or above which a skill counts as high-value.
    pub high_value_weight_threshold: f64,
    /// Band floors for Excellent / Good / Average; below the last is Poor.
    pub category_bands: [f64; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedConfig {
    pub ats_weight: f64,
    pub gap_weight: f64,
    /// Readiness band floors: Ready, then Almost Ready; below is
    /// Needs Preparation.
    pub readiness_bands: [f64; 2],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapConfig {
    /// Learning-hours estimate for skills absent from the resource catalog.
    pub default_hours: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            matching: MatchingConfig {
                fuzzy_threshold: 0.8,
            },
            gap: GapConfig {
                star_bands: [80.0, 60.0, 40.0, 20.0],
            },
            ats: AtsConfig {
                base_score: 40.0,
                points_per_skill: 3.0,
                skill_cap: 30.0,
                points_per_year: 5.0,
                experience_cap: 20.0,
                high_value_bonus: 2.5,
                high_value_cap: 10.0,
                high_value_weight_threshold: 0.8,
                category_bands: [85.0, 70.0, 50.0],
            },
            combined: CombinedConfig {
                ats_weight: 0.5,
                gap_weight: 0.5,
                readiness_bands: [80.0, 60.0],
            },
            roadmap: RoadmapConfig { default_hours: 40 },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                SkillGapError::Configuration(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            SkillGapError::Configuration(format!("Failed to serialize config: {}", e))
        })?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the scoring math cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.matching.fuzzy_threshold) {
            return Err(SkillGapError::Configuration(
                "fuzzy_threshold must lie in [0, 1]".to_string(),
            ));
        }
        let weight_sum = self.combined.ats_weight + self.combined.gap_weight;
        if (weight_sum - 1.0).abs() > 1e-6 {
            return Err(SkillGapError::Configuration(format!(
                "combined weights must sum to 1.0, got {}",
                weight_sum
            )));
        }
        if self.roadmap.default_hours == 0 {
            return Err(SkillGapError::Configuration(
                "default_hours must be positive".to_string(),
            ));
        }
        if !self.gap.star_bands.windows(2).all(|w| w[0] > w[1]) {
            return Err(SkillGapError::Configuration(
                "star_bands must be strictly descending".to_string(),
            ));
        }
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skill-gap-analyzer")
            .join("config.toml")
    }
}

//! Skill normalization: raw free-text labels to canonical skill sets

use crate::catalog::ReferenceData;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Deduplicated set of canonical skill names. Ordered for deterministic
/// iteration downstream.
pub type SkillSet = BTreeSet<String>;

/// How each raw entry resolved during normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeStats {
    /// Tokens that were already canonical names.
    pub exact: usize,
    /// Tokens resolved through the alias table.
    pub alias: usize,
    /// Skills recovered from inside longer phrases.
    pub extracted: usize,
    /// Unknown tokens passed through as their own canonical form.
    pub unresolved: usize,
    /// Empty or unusable entries dropped.
    pub discarded: usize,
}

/// Result of a normalization call: the skill set plus resolution stats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeOutcome {
    pub skills: SkillSet,
    pub stats: NormalizeStats,
}

pub struct SkillNormalizer {
    whitespace: Regex,
}

impl Default for SkillNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkillNormalizer {
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").expect("Invalid whitespace regex"),
        }
    }

    /// Normalize raw skill labels into a canonical skill set.
    ///
    /// Never fails: malformed entries are dropped, unknown skills pass
    /// through in cleaned form, and an all-empty input yields an empty set.
    /// Idempotent: normalizing an already-normalized set is a no-op.
    pub fn normalize(&self, raw_skills: &[String], data: &ReferenceData) -> NormalizeOutcome {
        let mut skills = SkillSet::new();
        let mut stats = NormalizeStats::default();

        for raw in raw_skills {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                stats.discarded += 1;
                continue;
            }
            let lower = trimmed.to_lowercase();
            let lowered = self.whitespace.replace_all(&lower, " ");

            // Resolve before splitting: canonical names like "ci/cd" contain
            // separator characters themselves.
            if let Some(canonical) = data.aliases.resolve(&lowered) {
                if canonical == lowered {
                    stats.exact += 1;
                } else {
                    stats.alias += 1;
                }
                skills.insert(canonical.to_string());
                continue;
            }

            for token in lowered.split(['/', ',', ';']) {
                let cleaned = Self::clean_token(token);
                if cleaned.is_empty() || !Self::is_usable(&cleaned) {
                    stats.discarded += 1;
                    continue;
                }

                if let Some(canonical) = data.aliases.resolve(&cleaned) {
                    if canonical == cleaned {
                        stats.exact += 1;
                    } else {
                        stats.alias += 1;
                    }
                    skills.insert(canonical.to_string());
                    continue;
                }

                // Longer phrases may carry known skills inside them
                // ("3 years of kubernetes administration").
                let embedded = data.aliases.extract_embedded(&cleaned);
                if !embedded.is_empty() {
                    stats.extracted += 1;
                    skills.extend(embedded);
                    continue;
                }

                stats.unresolved += 1;
                skills.insert(cleaned);
            }
        }

        NormalizeOutcome { skills, stats }
    }

    /// Strip punctuation that only ever separates or decorates, keeping the
    /// characters real skill names use ("c++", "c#", "node.js", ".net").
    fn clean_token(token: &str) -> String {
        let kept: String = token
            .chars()
            .filter(|c| {
                c.is_alphanumeric() || matches!(c, '+' | '#' | '.' | '-' | '&' | ' ')
            })
            .collect();
        kept.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .trim_matches(|c| matches!(c, '-' | '&'))
            .trim_end_matches('.')
            .to_string()
    }

    /// A usable token carries at least one alphabetic word.
    fn is_usable(token: &str) -> bool {
        token
            .unicode_words()
            .any(|word| word.chars().any(|c| c.is_alphabetic()))
    }
}

//! Console and JSON rendering of engine reports

use crate::engine::{
    AnalysisReport, AtsScore, MatchResult, NormalizeOutcome, RoleFit,
};
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Serialize any report type as pretty JSON for machine consumers.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn stars(rating: u8) -> String {
    let filled = "★".repeat(rating as usize);
    let empty = "☆".repeat(5usize.saturating_sub(rating as usize));
    format!("{}{}", filled, empty)
}

fn score_line(label: &str, score: f64) -> String {
    let rendered = format!("{:.1}", score);
    let colored_score = if score >= 80.0 {
        rendered.green()
    } else if score >= 60.0 {
        rendered.yellow()
    } else {
        rendered.red()
    };
    format!("  {:<28} {}\n", label, colored_score)
}

/// Human-readable rendering of a full analysis report.
pub fn render_report(report: &AnalysisReport, detailed: bool) -> String {
    let mut out = String::new();
    let gap = &report.skill_gap_analysis;

    out.push_str(&format!(
        "\n{}\n",
        format!("Analysis: {}", gap.role_title).bold().underline()
    ));
    out.push_str(&score_line(
        "Combined score",
        report.role_match_confidence.combined_score,
    ));
    out.push_str(&score_line("Skill match", gap.match_percentage));
    out.push_str(&score_line(
        "Essential match",
        gap.essential_match_percentage,
    ));
    out.push_str(&score_line("ATS score", report.scoring_analysis.score));
    out.push_str(&format!(
        "  {:<28} {} ({})\n",
        "Rating",
        stars(gap.star_rating).yellow(),
        report.scoring_analysis.category
    ));
    out.push_str(&format!(
        "  {:<28} {}\n",
        "Readiness",
        report.role_match_confidence.readiness.to_string().bold()
    ));

    if !gap.common_skills.is_empty() {
        out.push_str(&format!(
            "\n{} {}\n",
            "Matched skills:".green().bold(),
            gap.common_skills.join(", ")
        ));
    }

    let missing_total: usize = gap.missing_by_category.values().map(|v| v.len()).sum();
    if missing_total > 0 {
        out.push_str(&format!("\n{}\n", "Missing skills:".red().bold()));
        for (category, skills) in &gap.missing_by_category {
            out.push_str(&format!("  {}: {}\n", category, skills.join(", ")));
        }
    }

    if !report.learning_roadmap.is_empty() {
        out.push_str(&format!("\n{}\n", "Learning roadmap:".bold()));
        for entry in &report.learning_roadmap {
            out.push_str(&format!(
                "  [{:.2}] {} (~{}h)\n",
                entry.priority, entry.skill, entry.estimated_hours
            ));
            if detailed {
                for resource in &entry.resources {
                    out.push_str(&format!("        - {}\n", resource));
                }
            }
        }
    }

    if detailed && !report.project_recommendations.is_empty() {
        out.push_str(&format!("\n{}\n", "Project ideas:".bold()));
        for suggestion in &report.project_recommendations {
            for project in &suggestion.projects {
                out.push_str(&format!("  {}: {}\n", suggestion.skill, project));
            }
        }
    }

    out.push_str(&format!(
        "\n{} {}\n",
        "Interview readiness:".bold(),
        report.interview_readiness.verdict
    ));
    out.push_str(&format!("  {}\n", report.interview_readiness.summary));
    if !report.interview_readiness.focus_areas.is_empty() {
        out.push_str(&format!(
            "  Focus areas: {}\n",
            report.interview_readiness.focus_areas.join(", ")
        ));
    }

    out
}

pub fn render_normalize(outcome: &NormalizeOutcome) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Normalized skills:".bold()));
    for skill in &outcome.skills {
        out.push_str(&format!("  {}\n", skill));
    }
    let stats = &outcome.stats;
    out.push_str(&format!(
        "\n{} exact, {} alias-resolved, {} extracted, {} unresolved, {} discarded\n",
        stats.exact, stats.alias, stats.extracted, stats.unresolved, stats.discarded
    ));
    out
}

pub fn render_match(result: &MatchResult) -> String {
    let mut out = String::new();
    if !result.exact.is_empty() {
        out.push_str(&format!("{}\n", "Exact matches:".green().bold()));
        for skill in &result.exact {
            out.push_str(&format!("  {}\n", skill));
        }
    }
    if !result.fuzzy.is_empty() {
        out.push_str(&format!("{}\n", "Fuzzy matches:".yellow().bold()));
        for (required, m) in &result.fuzzy {
            out.push_str(&format!(
                "  {} ~ {} ({:.0}%)\n",
                required,
                m.user_skill,
                m.confidence * 100.0
            ));
        }
    }
    if !result.hierarchical.is_empty() {
        out.push_str(&format!("{}\n", "Covered via advanced skills:".cyan().bold()));
        for (required, covering) in &result.hierarchical {
            out.push_str(&format!("  {} <- {}\n", required, covering));
        }
    }
    if !result.missing.is_empty() {
        out.push_str(&format!("{}\n", "Missing:".red().bold()));
        for skill in &result.missing {
            out.push_str(&format!("  {}\n", skill));
        }
    }
    out
}

pub fn render_ats(score: &AtsScore) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {:.1} ({}, confidence: {:?})\n",
        "ATS score:".bold(),
        score.score,
        score.category,
        score.confidence
    ));
    let b = &score.breakdown;
    out.push_str(&format!(
        "  base {:.0} + skills {:.1} + experience {:.1} + bonus {:.1}\n",
        b.base, b.skill_points, b.experience_points, b.high_value_bonus
    ));
    if !b.high_value_skills.is_empty() {
        out.push_str(&format!(
            "  high-value skills: {}\n",
            b.high_value_skills.join(", ")
        ));
    }
    out
}

pub fn render_rankings(fits: &[RoleFit]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", "Role ranking:".bold()));
    for (index, fit) in fits.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<28} {:>5.1}  {}\n",
            index + 1,
            fit.role_title,
            fit.combined_score,
            fit.readiness
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AnalysisEngine, CandidateProfile};

    fn sample_report() -> AnalysisReport {
        let engine = AnalysisEngine::with_defaults().unwrap();
        let profile = CandidateProfile {
            raw_skills: vec!["python".to_string(), "sql".to_string()],
            experience_years: 2.0,
            education: None,
            certifications: vec![],
            projects_count: 1,
        };
        engine.analyze(&profile, "Backend Developer").unwrap()
    }

    #[test]
    fn console_rendering_mentions_the_key_sections() {
        let report = sample_report();
        let rendered = render_report(&report, true);
        assert!(rendered.contains("Backend Developer"));
        assert!(rendered.contains("Learning roadmap"));
        assert!(rendered.contains("Interview readiness"));
    }

    #[test]
    fn json_rendering_is_valid_json() {
        let report = sample_report();
        let json = render_json(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("skill_gap_analysis").is_some());
        assert!(parsed.get("scoring_analysis").is_some());
    }
}

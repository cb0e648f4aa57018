//! Integration tests for the skill-gap analysis engine

use skill_gap_analyzer::catalog::ReferenceData;
use skill_gap_analyzer::engine::{
    AnalysisEngine, CandidateProfile, SkillMatcher, SkillNormalizer, SkillSet,
};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn skill_set(items: &[&str]) -> SkillSet {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile(skills: &[&str]) -> CandidateProfile {
    CandidateProfile {
        raw_skills: strings(skills),
        experience_years: 2.0,
        education: None,
        certifications: vec![],
        projects_count: 2,
    }
}

#[test]
fn match_partition_invariant_holds_across_inputs() {
    let data = ReferenceData::with_defaults().unwrap();
    let matcher = SkillMatcher::new(0.8);

    let cases: Vec<(Vec<&str>, Vec<&str>)> = vec![
        (vec![], vec![]),
        (vec!["python"], vec![]),
        (vec![], vec!["python", "sql"]),
        (vec!["python", "sql"], vec!["python", "sql"]),
        (
            vec!["python", "javascripts", "kubernetes"],
            vec!["python", "javascript", "docker", "aws"],
        ),
        (
            vec!["deep learning", "react", "postgresql"],
            vec!["machine learning", "javascript", "sql", "mongodb"],
        ),
        (
            vec!["communication", "c++", "git"],
            vec!["c++", "git", "leadership", "rust"],
        ),
    ];

    for (user, required) in cases {
        let user = skill_set(&user);
        let required = skill_set(&required);
        let result = matcher.match_skills(&user, &required, &data);

        assert!(
            result.partition_holds(&required),
            "partition violated for required={:?}: {:?}",
            required,
            result
        );
        assert_eq!(result.matched_count() + result.missing.len(), required.len());
    }
}

#[test]
fn normalization_is_idempotent() {
    let data = ReferenceData::with_defaults().unwrap();
    let normalizer = SkillNormalizer::new();

    let inputs = strings(&[
        "Python",
        " JS ",
        "K8s",
        "CI/CD",
        "Node.JS",
        "c++",
        "Machine Learning, Deep Learning",
        "some completely unknown skill",
        "",
        "   ",
    ]);

    let once = normalizer.normalize(&inputs, &data);
    let again: Vec<String> = once.skills.iter().cloned().collect();
    let twice = normalizer.normalize(&again, &data);

    assert_eq!(once.skills, twice.skills);
}

#[test]
fn covering_a_missing_skill_raises_the_match_percentage() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let before = engine
        .analyze(&profile(&["python", "sql"]), "Backend Developer")
        .unwrap();
    let after = engine
        .analyze(&profile(&["python", "sql", "rest api"]), "Backend Developer")
        .unwrap();

    assert!(
        after.skill_gap_analysis.match_percentage > before.skill_gap_analysis.match_percentage
    );
}

#[test]
fn scores_always_stay_in_bounds() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let profiles = vec![
        profile(&["python"]),
        profile(&["zzz unknown skill"]),
        profile(&[
            "python", "sql", "docker", "kubernetes", "aws", "react", "node.js", "git", "linux",
            "machine learning", "deep learning", "terraform",
        ]),
    ];

    let data = engine.snapshot();
    for p in &profiles {
        for title in data.roles.titles() {
            let report = engine.analyze(p, title).unwrap();
            let gap = &report.skill_gap_analysis;
            assert!((0.0..=100.0).contains(&gap.match_percentage));
            assert!((0.0..=100.0).contains(&gap.essential_match_percentage));
            assert!((1..=5).contains(&gap.star_rating));
            assert!((0.0..=100.0).contains(&report.scoring_analysis.score));
            assert!((0.0..=100.0).contains(&report.role_match_confidence.combined_score));
        }
    }
}

#[test]
fn role_without_must_haves_is_vacuously_essential() {
    use skill_gap_analyzer::config::Config;
    use skill_gap_analyzer::engine::{GapScorer, NormalizedRole};

    let data = ReferenceData::with_defaults().unwrap();
    let config = Config::default();
    let matcher = SkillMatcher::new(config.matching.fuzzy_threshold);
    let scorer = GapScorer::new(config.gap);

    let role = NormalizedRole {
        title: "Preferences Only".to_string(),
        must_have: SkillSet::new(),
        good_to_have: skill_set(&["python", "sql"]),
        importance: Default::default(),
        experience_level: String::new(),
    };
    let user = skill_set(&["javascript"]);
    let required: SkillSet = role.all_skills().into_iter().collect();
    let result = matcher.match_skills(&user, &required, &data);
    let report = scorer.score(&result, &role, &data);

    assert_eq!(report.essential_match_percentage, 100.0);
}

#[test]
fn scenario_python_js_sql_against_web_stack() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let result = engine.match_skills(
        &strings(&["python", "js", "sql"]),
        &strings(&["Python", "JavaScript", "React", "Node.js", "MongoDB"]),
    );

    assert!(result.exact.contains("python"));
    assert!(result.exact.contains("javascript"));
    assert_eq!(result.exact.len(), 2);
    assert!(result.missing.contains("react"));
    assert!(result.missing.contains("node.js"));
    assert!(result.missing.contains("mongodb"));
    // 2 of 5 before weighting.
    assert_eq!(result.matched_count(), 2);
    assert_eq!(result.missing.len(), 3);
}

#[test]
fn scenario_ats_terms_cap_and_clamp() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let profile = CandidateProfile {
        raw_skills: strings(&[
            "python", "sql", "docker", "git", "linux", "react", "redis", "kafka", "spark",
            "pandas",
        ]),
        experience_years: 3.5,
        education: Some("BSc".to_string()),
        certifications: strings(&["aws certified"]),
        projects_count: 5,
    };

    let score = engine.ats_score(&profile).unwrap();
    assert_eq!(score.breakdown.base, 40.0);
    assert_eq!(score.breakdown.skill_points, 30.0);
    assert_eq!(score.breakdown.experience_points, 17.5);
    assert!(score.breakdown.high_value_bonus <= 10.0);
    assert!(score.score <= 100.0);
}

#[test]
fn scenario_normalize_collapses_aliases_and_duplicates() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let outcome = engine.normalize(&strings(&["Python", "python ", "PYTHON", " js"]));
    assert_eq!(outcome.skills, skill_set(&["python", "javascript"]));
}

#[test]
fn analyze_report_is_internally_consistent() {
    let engine = AnalysisEngine::with_defaults().unwrap();
    let report = engine
        .analyze(&profile(&["python", "pandas", "sql"]), "Data Scientist")
        .unwrap();

    let gap = &report.skill_gap_analysis;
    let missing: usize = gap.missing_by_category.values().map(|v| v.len()).sum();
    assert_eq!(report.learning_roadmap.len(), missing);
    assert_eq!(report.project_recommendations.len(), missing);
    assert!(report
        .learning_roadmap
        .windows(2)
        .all(|w| w[0].priority >= w[1].priority));
    assert!(report.learning_roadmap.iter().all(|e| e.estimated_hours > 0));
    assert!(report
        .learning_roadmap
        .iter()
        .all(|e| !e.resources.is_empty()));
}

#[test]
fn ranking_prefers_the_role_the_skills_fit() {
    let engine = AnalysisEngine::with_defaults().unwrap();

    let devops_leaning = profile(&["linux", "docker", "kubernetes", "ci/cd", "terraform"]);
    let fits = engine.rank_roles(&devops_leaning, &[]).unwrap();

    assert_eq!(fits[0].role_title, "DevOps Engineer");
    assert!(fits
        .windows(2)
        .all(|w| w[0].combined_score >= w[1].combined_score));
}

//! Skill-gap analyzer: command-line entry point

use clap::Parser;
use log::error;
use skill_gap_analyzer::catalog::{CatalogHandle, CatalogSources};
use skill_gap_analyzer::cli::{self, Cli, Commands, OutputFormat};
use skill_gap_analyzer::engine::{AnalysisEngine, CandidateProfile};
use skill_gap_analyzer::error::{Result, SkillGapError};
use skill_gap_analyzer::output::formatter;
use skill_gap_analyzer::Config;
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if let Err(e) = run(cli) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config_file {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let sources = CatalogSources {
        aliases_path: cli.aliases_file.clone(),
        roles_path: cli.roles_file.clone(),
    };
    let engine = AnalysisEngine::new(CatalogHandle::new(sources)?, config);

    match cli.command {
        Commands::Analyze {
            skills,
            role,
            experience_years,
            certifications,
            projects,
            education,
            output,
            detailed,
        } => {
            let format = parse_format(&output)?;
            let profile = CandidateProfile {
                raw_skills: skills,
                experience_years,
                education,
                certifications,
                projects_count: projects,
            };
            let report = engine.analyze(&profile, &role)?;
            match format {
                OutputFormat::Console => print!("{}", formatter::render_report(&report, detailed)),
                OutputFormat::Json => println!("{}", formatter::render_json(&report)?),
            }
        }

        Commands::Normalize { skills, output } => {
            let format = parse_format(&output)?;
            let outcome = engine.normalize(&skills);
            match format {
                OutputFormat::Console => print!("{}", formatter::render_normalize(&outcome)),
                OutputFormat::Json => println!("{}", formatter::render_json(&outcome)?),
            }
        }

        Commands::Match {
            user,
            required,
            output,
        } => {
            let format = parse_format(&output)?;
            let result = engine.match_skills(&user, &required);
            match format {
                OutputFormat::Console => print!("{}", formatter::render_match(&result)),
                OutputFormat::Json => println!("{}", formatter::render_json(&result)?),
            }
        }

        Commands::Ats {
            skills,
            experience_years,
            certifications,
            projects,
            education,
            roles,
            output,
        } => {
            let format = parse_format(&output)?;
            let profile = CandidateProfile {
                raw_skills: skills,
                experience_years,
                education,
                certifications,
                projects_count: projects,
            };
            let score = engine.ats_score(&profile)?;
            match format {
                OutputFormat::Console => print!("{}", formatter::render_ats(&score)),
                OutputFormat::Json => println!("{}", formatter::render_json(&score)?),
            }

            if let Some(titles) = roles {
                let fits = engine.rank_roles(&profile, &titles)?;
                match format {
                    OutputFormat::Console => print!("\n{}", formatter::render_rankings(&fits)),
                    OutputFormat::Json => println!("{}", formatter::render_json(&fits)?),
                }
            }
        }

        Commands::Roles => {
            let data = engine.snapshot();
            println!("Available roles:");
            for role in data.roles.roles() {
                println!(
                    "  {} ({} must-have, {} preferred)",
                    role.title,
                    role.must_have_skills.len(),
                    role.good_to_have_skills.len()
                );
            }
        }

        Commands::Categories => {
            let data = engine.snapshot();
            println!("Skill categories:");
            for info in data.taxonomy.categories() {
                println!(
                    "  {:<20} weight {:.2}  {}",
                    info.category.to_string(),
                    info.weight,
                    info.description
                );
            }
        }
    }

    Ok(())
}

fn parse_format(raw: &str) -> Result<OutputFormat> {
    cli::parse_output_format(raw).map_err(SkillGapError::InvalidInput)
}

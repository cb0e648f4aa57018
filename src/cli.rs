//! Command-line interface definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skill-gap-analyzer")]
#[command(about = "Rank your skills against job-role requirements")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Load the role catalog from a TOML file instead of the built-ins
    #[arg(long, global = true)]
    pub roles_file: Option<PathBuf>,

    /// Merge extra skill aliases from a TOML file
    #[arg(long, global = true)]
    pub aliases_file: Option<PathBuf>,

    /// Load scoring configuration from a TOML file
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full gap analysis of your skills against one role
    Analyze {
        /// Comma-separated skill list
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        /// Target role title from the catalog
        #[arg(short, long)]
        role: String,

        /// Years of professional experience
        #[arg(long, default_value_t = 0.0)]
        experience_years: f64,

        /// Comma-separated certifications
        #[arg(long, value_delimiter = ',')]
        certifications: Vec<String>,

        /// Number of completed projects
        #[arg(long, default_value_t = 0)]
        projects: u32,

        /// Highest education level, free text
        #[arg(long)]
        education: Option<String>,

        /// Output format: console or json
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Include resources and project ideas in console output
        #[arg(short, long)]
        detailed: bool,
    },

    /// Normalize a raw skill list and show resolution stats
    Normalize {
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Match two skill lists without scoring
    Match {
        /// Your skills, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        user: Vec<String>,

        /// Required skills, comma-separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        required: Vec<String>,

        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Resume compatibility score, optionally ranked against roles
    Ats {
        #[arg(short, long, value_delimiter = ',', required = true)]
        skills: Vec<String>,

        #[arg(long, default_value_t = 0.0)]
        experience_years: f64,

        #[arg(long, value_delimiter = ',')]
        certifications: Vec<String>,

        #[arg(long, default_value_t = 0)]
        projects: u32,

        #[arg(long)]
        education: Option<String>,

        /// Role titles to rank against; leave empty to rank every
        /// catalog role, or pass none at all to skip ranking
        #[arg(short, long, value_delimiter = ',')]
        roles: Option<Vec<String>>,

        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// List the roles in the catalog
    Roles,

    /// List taxonomy categories and their weights
    Categories,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Console,
    Json,
}

pub fn parse_output_format(raw: &str) -> Result<OutputFormat, String> {
    match raw.to_lowercase().as_str() {
        "console" | "text" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        other => Err(format!(
            "Unsupported output format '{}'; expected console or json",
            other
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_parsing() {
        assert_eq!(parse_output_format("console").unwrap(), OutputFormat::Console);
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert!(parse_output_format("yaml").is_err());
    }

    #[test]
    fn cli_parses_an_analyze_invocation() {
        let cli = Cli::try_parse_from([
            "skill-gap-analyzer",
            "analyze",
            "--skills",
            "python,sql,git",
            "--role",
            "Backend Developer",
            "--experience-years",
            "3.5",
        ])
        .unwrap();

        match cli.command {
            Commands::Analyze {
                skills,
                role,
                experience_years,
                ..
            } => {
                assert_eq!(skills.len(), 3);
                assert_eq!(role, "Backend Developer");
                assert_eq!(experience_years, 3.5);
            }
            _ => panic!("expected analyze command"),
        }
    }
}

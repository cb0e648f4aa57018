//! Skill-gap analysis and role-readiness scoring engine
//!
//! Turns free-text skill lists into normalized skill sets, matches them
//! against role requirements, and derives gap reports, resume-compatibility
//! scores, learning roadmaps, and readiness verdicts. The engine is pure
//! over its inputs plus static reference data; callers own persistence,
//! transport, and document extraction.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;

pub use config::Config;
pub use engine::{AnalysisEngine, AnalysisReport, CandidateProfile};
pub use error::{Result, SkillGapError};

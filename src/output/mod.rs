//! Report rendering for the CLI surface

pub mod formatter;

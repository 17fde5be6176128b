//! CLI-specific output
//!
//! Formatting of load outcomes and the final mount point for the terminal.

pub mod report;

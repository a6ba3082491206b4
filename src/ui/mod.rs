//! Terminal output for a release run.
//!
//! `formatter` builds the strings; this module decides where they go.
//! Progress goes to stdout, warnings and errors to stderr.

pub mod formatter;

use crate::analyzer::BumpFlags;
use crate::boundary::BoundaryWarning;
use crate::config::BumpLabelGroups;
use crate::domain::BumpKind;
use crate::output::ReleaseOutputs;

pub fn display_error(message: &str) {
    eprintln!("{}", formatter::error_line(message));
}

pub fn display_success(message: &str) {
    println!("{}", formatter::success_line(message));
}

pub fn display_status(message: &str) {
    println!("{}", formatter::status_line(message));
}

pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", formatter::warning_line(warning));
}

/// Show the configured label groups and which of them fired.
pub fn display_bump_decision(groups: &BumpLabelGroups, flags: &BumpFlags) {
    println!("\n{}", formatter::label_groups_block(groups));
    println!("  triggered: {}", formatter::bump_flags_line(flags));
}

pub fn display_version_change(previous_tag: &str, version: &str, bump: BumpKind) {
    println!("\n{}", formatter::version_change_block(previous_tag, version, bump));
}

pub fn display_release_notes(notes: &str) {
    println!("\n{}\n{}", console::style("Release notes:").bold(), notes);
}

pub fn display_outputs(outputs: &ReleaseOutputs) {
    println!("\n{}", formatter::outputs_block(outputs));
}

//! Pure formatting functions for UI output.
//!
//! Everything here returns a `String`; printing happens in the parent module.

use console::style;

use crate::analyzer::BumpFlags;
use crate::boundary::BoundaryWarning;
use crate::config::BumpLabelGroups;
use crate::domain::BumpKind;
use crate::output::ReleaseOutputs;

/// Red error prefix followed by the message.
pub fn error_line(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Green checkmark followed by the message.
pub fn success_line(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Yellow arrow followed by the message.
pub fn status_line(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Yellow warning marker followed by the warning text.
pub fn warning_line(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// One line per bump kind listing its configured labels.
pub fn label_groups_block(groups: &BumpLabelGroups) -> String {
    let mut lines = vec![style("Bump label groups:").bold().to_string()];
    for kind in BumpKind::PRECEDENCE {
        let mut labels: Vec<&str> = groups.labels_for(kind).iter().map(String::as_str).collect();
        labels.sort_unstable();
        lines.push(format!("  {}-bump-labels: [{}]", kind, labels.join(", ")));
    }
    lines.push(format!("  default-bump: {}", groups.default));
    lines.join("\n")
}

/// The triggered flags in precedence order, e.g. `major=false minor=true ...`.
pub fn bump_flags_line(flags: &BumpFlags) -> String {
    BumpKind::PRECEDENCE
        .iter()
        .map(|kind| format!("{}={}", kind, flags.is_set(*kind)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The proposed version change.
pub fn version_change_block(previous_tag: &str, version: &str, bump: BumpKind) -> String {
    format!(
        "{}\n  From: {}\n  To:   {} ({} bump)",
        style("Computed Version:").bold(),
        style(previous_tag).red(),
        style(version).green(),
        bump
    )
}

/// Every output value, notes indented under their key.
pub fn outputs_block(outputs: &ReleaseOutputs) -> String {
    let notes: Vec<String> = outputs
        .release_notes
        .lines()
        .map(|line| format!("    {}", line))
        .collect();

    format!(
        "{}\n  version:      {}\n  tag_name:     {}\n  release_name: {}\n  release_notes:\n{}",
        style("Release outputs:").bold(),
        outputs.version,
        outputs.tag_name,
        outputs.release_name,
        notes.join("\n")
    )
}

use crate::config::ReleaseNoteSection;
use crate::domain::PullRequest;

/// Text emitted when no pull request lands in any section.
pub const NO_NOTABLE_CHANGES: &str = "_No notable changes._";

/// Formats a single release-notes entry
pub fn format_entry(pr: &PullRequest) -> String {
    format!("- {} (#{})", pr.title, pr.number)
}

/// Groups pull requests into the configured sections and renders them.
///
/// Sections keep their configured order and entries keep the order of
/// `pull_requests`. A pull request matching several sections is listed in
/// each of them. Sections without entries are omitted.
///
/// Entries are grouped by section position, not by title: two sections that
/// share a title render as two headings, each listing only its own matches,
/// rather than one merged list repeated under both.
pub fn compose(pull_requests: &[PullRequest], sections: &[ReleaseNoteSection]) -> String {
    let mut grouped: Vec<Vec<String>> = vec![Vec::new(); sections.len()];

    for pr in pull_requests {
        for (index, section) in sections.iter().enumerate() {
            if pr.has_any_label(&section.labels) {
                grouped[index].push(format_entry(pr));
            }
        }
    }

    let notes: Vec<String> = sections
        .iter()
        .zip(grouped)
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(section, entries)| format!("## {}\n{}", section.title, entries.join("\n")))
        .collect();

    if notes.is_empty() {
        NO_NOTABLE_CHANGES.to_string()
    } else {
        notes.join("\n\n")
    }
}

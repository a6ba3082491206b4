//! Release drafting workflow
//!
//! Sequences the collaborators and the pure release rules:
//! tags → merge commits → pull requests → bump → version → placeholders →
//! release notes → outputs. Nothing is emitted unless every step succeeds.

use crate::analyzer::{compose, BumpClassifier};
use crate::boundary::BoundaryWarning;
use crate::config::Config;
use crate::domain::{find_latest_tag, select_merged_since, BumpKind, PullRequest, SemanticVersion, NO_TAG};
use crate::error::Result;
use crate::git::Repository;
use crate::github::PullRequestSource;
use crate::output::{OutputSink, ReleaseOutputs};
use crate::ui;

/// How the workflow may reach pull requests
pub enum PullRequestAccess<'a> {
    Available(&'a dyn PullRequestSource),
    Unavailable(BoundaryWarning),
}

/// Result of a successful release run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Tag the new version was computed from (`0.0.0` if none)
    pub previous_tag: String,

    /// Bump kind applied to the previous version
    pub bump: BumpKind,

    /// Pull requests merged since the previous tag
    pub pull_requests: Vec<PullRequest>,

    /// Values handed to the output sink
    pub outputs: ReleaseOutputs,

    /// Non-fatal gaps encountered along the way
    pub warnings: Vec<BoundaryWarning>,
}

/// Main release workflow
///
/// 1. Find the latest version tag
/// 2. Collect pull requests merged since that tag
/// 3. Classify the bump kind from their labels
/// 4. Bump the previous version
/// 5. Substitute the computed version into `tag` and `title`
/// 6. Compose the release notes
/// 7. Emit the outputs
///
/// # Returns
///
/// The run's outputs and diagnostics, or the first fatal error
pub fn run_release_workflow(
    mut config: Config,
    repo: &dyn Repository,
    pulls: PullRequestAccess<'_>,
    sink: &mut dyn OutputSink,
) -> Result<WorkflowResult> {
    ui::display_status("Starting release preparation...");
    tracing::debug!(?config, "loaded configuration");
    let groups = config.label_groups()?;

    let previous_tag = find_latest_tag(repo.list_tags_newest_first()?);
    ui::display_status(&format!("Latest tag: {}", previous_tag));

    let mut warnings = Vec::new();
    let pull_requests = match pulls {
        PullRequestAccess::Unavailable(warning) => {
            ui::display_boundary_warning(&warning);
            warnings.push(warning);
            Vec::new()
        }
        PullRequestAccess::Available(source) => {
            let since = (previous_tag != NO_TAG).then_some(previous_tag.as_str());
            let merge_commits = repo.merge_commits_since(since)?;

            if merge_commits.is_empty() {
                let warning = BoundaryWarning::NoMergeCommits {
                    since: since.map(str::to_string),
                };
                ui::display_boundary_warning(&warning);
                warnings.push(warning);
                Vec::new()
            } else {
                tracing::debug!(count = merge_commits.len(), "merge commits in range");
                select_merged_since(source.closed_pull_requests()?, &merge_commits)
            }
        }
    };
    ui::display_status(&format!("Merged pull requests: {}", pull_requests.len()));

    let classifier = BumpClassifier::new(groups);
    let flags = classifier.triggered(&pull_requests);
    ui::display_bump_decision(classifier.groups(), &flags);
    let bump = classifier.classify(&pull_requests);

    let version = SemanticVersion::parse(&previous_tag)?.bump(bump)?;
    let version_string = version.to_string();
    ui::display_version_change(&previous_tag, &version_string, bump);

    config.substitute_placeholders(&version_string);

    let release_notes = compose(&pull_requests, &config.release_notes);
    ui::display_release_notes(&release_notes);

    let outputs = ReleaseOutputs {
        version: version_string,
        tag_name: config.tag,
        release_name: config.title,
        release_notes,
    };
    sink.emit(&outputs)?;
    ui::display_success(&format!("Prepared release {}", outputs.tag_name));

    Ok(WorkflowResult {
        previous_tag,
        bump,
        pull_requests,
        outputs,
        warnings,
    })
}

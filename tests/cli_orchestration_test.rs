// tests/cli_orchestration_test.rs
use chrono::{DateTime, Utc};
use drafterino::boundary::BoundaryWarning;
use drafterino::cli::{run_release_workflow, PullRequestAccess};
use drafterino::config::{load_config, ConfigSource};
use drafterino::domain::{BumpKind, PullRequest};
use drafterino::git::{Git2Repository, Repository};
use drafterino::github::StaticPullRequests;
use drafterino::output::GithubOutputFile;
use git2::{Oid, Repository as Git2Repo, Signature, Time};
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_config() -> drafterino::config::Config {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/drafterino.yml");
    load_config(ConfigSource::File(path)).unwrap()
}

fn merged_at() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-06-01T09:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn commit(repo: &Git2Repo, update_ref: Option<&str>, time: i64, parents: &[Oid]) -> Oid {
    let sig = Signature::new("Tester", "tester@example.com", &Time::new(time, 0)).unwrap();
    let tree_id = repo.index().unwrap().write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let parents: Vec<git2::Commit> = parents
        .iter()
        .map(|oid| repo.find_commit(*oid).unwrap())
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(update_ref, &sig, &sig, "commit", &tree, &parent_refs)
        .unwrap()
}

fn merge(repo: &Git2Repo, base: Oid, time: i64) -> Oid {
    let side = commit(repo, None, time - 1, &[base]);
    commit(repo, Some("HEAD"), time, &[base, side])
}

/// History: initial, merge A (tagged v1.4.2), merge B, merge C
fn release_history() -> (TempDir, Vec<Oid>) {
    let dir = TempDir::new().unwrap();
    let repo = Git2Repo::init(dir.path()).unwrap();

    let initial = commit(&repo, Some("HEAD"), 1_000, &[]);
    let merge_a = merge(&repo, initial, 2_000);
    let tagged = repo.find_object(merge_a, None).unwrap();
    repo.tag_lightweight("v1.4.2", &tagged, false).unwrap();
    let merge_b = merge(&repo, merge_a, 3_000);
    let merge_c = merge(&repo, merge_b, 4_000);

    (dir, vec![merge_a, merge_b, merge_c])
}

#[test]
fn test_release_from_git_history_writes_outputs() {
    let (dir, merges) = release_history();
    let repo = Git2Repository::open(dir.path()).unwrap();
    let output_path = dir.path().join("github_output");

    let source = StaticPullRequests::new(vec![
        PullRequest::new(21, "Fix login redirect", ["[type] bug"])
            .merged(merges[2].to_string(), merged_at()),
        PullRequest::new(20, "Document the CLI", ["[scope] documentation"])
            .merged(merges[1].to_string(), merged_at()),
        PullRequest::new(12, "Shipped in 1.4.2", ["[type] breaking"])
            .merged(merges[0].to_string(), merged_at()),
        PullRequest::new(19, "Closed without merge", ["[type] feature"]),
    ]);

    let result = run_release_workflow(
        fixture_config(),
        &repo,
        PullRequestAccess::Available(&source),
        &mut GithubOutputFile::new(&output_path),
    )
    .unwrap();

    assert_eq!(result.previous_tag, "v1.4.2");
    assert_eq!(result.bump, BumpKind::Patch);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        written,
        "version=1.4.3\n\
         tag_name=v1.4.3\n\
         release_name=Release 1.4.3\n\
         release_notes<<EOF\n\
         ## Fixed\n\
         - Fix login redirect (#21)\n\
         \n\
         ## Docs\n\
         - Document the CLI (#20)\n\
         EOF\n"
    );
}

#[test]
fn test_release_without_github_context() {
    let (dir, _) = release_history();
    let repo = Git2Repository::open(dir.path()).unwrap();
    let output_path = dir.path().join("github_output");

    let result = run_release_workflow(
        fixture_config(),
        &repo,
        PullRequestAccess::Unavailable(BoundaryWarning::MissingGitHubContext {
            missing: vec!["token"],
        }),
        &mut GithubOutputFile::new(&output_path),
    )
    .unwrap();

    assert_eq!(result.bump, BumpKind::Post);
    assert_eq!(result.outputs.version, "1.4.2.post1");
    assert_eq!(result.outputs.tag_name, "v1.4.2.post1");
    assert_eq!(result.warnings.len(), 1);

    let written = std::fs::read_to_string(&output_path).unwrap();
    assert!(written.contains("release_notes<<EOF\n_No notable changes._\nEOF\n"));
}

#[test]
fn test_failed_run_leaves_output_untouched() {
    let (dir, _) = release_history();
    let repo = Git2Repository::open(dir.path()).unwrap();
    let output_path = dir.path().join("github_output");

    let source = StaticPullRequests::failing("401 Bad credentials");
    let result = run_release_workflow(
        fixture_config(),
        &repo,
        PullRequestAccess::Available(&source),
        &mut GithubOutputFile::new(&output_path),
    );

    assert!(result.is_err());
    assert!(!output_path.exists());
}

#[test]
fn test_release_history_fixture_shape() {
    let (dir, merges) = release_history();
    let repo = Git2Repository::open(dir.path()).unwrap();
    assert_eq!(repo.list_tags_newest_first().unwrap(), vec!["v1.4.2"]);
    assert_eq!(repo.merge_commits_since(None).unwrap().len(), merges.len());
}

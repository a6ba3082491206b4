use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::Result;

const HEREDOC_DELIMITER: &str = "EOF";

/// Values handed to the release-publishing step
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutputs {
    pub version: String,
    pub tag_name: String,
    pub release_name: String,
    pub release_notes: String,
}

impl ReleaseOutputs {
    /// Renders the outputs in the `GITHUB_OUTPUT` file format.
    ///
    /// Single-line values use `key=value`; the notes use a heredoc block.
    pub fn to_github_output(&self) -> String {
        let delimiter = heredoc_delimiter(&self.release_notes);
        format!(
            "version={}\ntag_name={}\nrelease_name={}\nrelease_notes<<{delim}\n{}\n{delim}\n",
            self.version,
            self.tag_name,
            self.release_name,
            self.release_notes,
            delim = delimiter
        )
    }
}

/// Picks a heredoc delimiter that no line of `body` equals.
fn heredoc_delimiter(body: &str) -> String {
    let mut delimiter = HEREDOC_DELIMITER.to_string();
    let mut suffix = 0;
    while body.lines().any(|line| line == delimiter) {
        suffix += 1;
        delimiter = format!("{}_{}", HEREDOC_DELIMITER, suffix);
    }
    delimiter
}

/// Destination for the final release outputs
pub trait OutputSink {
    fn emit(&mut self, outputs: &ReleaseOutputs) -> Result<()>;
}

/// Appends outputs to a `GITHUB_OUTPUT`-style file
pub struct GithubOutputFile {
    path: PathBuf,
}

impl GithubOutputFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        GithubOutputFile { path: path.into() }
    }
}

impl OutputSink for GithubOutputFile {
    fn emit(&mut self, outputs: &ReleaseOutputs) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(outputs.to_github_output().as_bytes())?;
        tracing::debug!(path = %self.path.display(), "wrote release outputs");
        Ok(())
    }
}

/// Prints outputs to stdout, for local runs and dry runs
#[derive(Debug, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, outputs: &ReleaseOutputs) -> Result<()> {
        crate::ui::display_outputs(outputs);
        Ok(())
    }
}

/// Keeps emitted outputs in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub emitted: Vec<ReleaseOutputs>,
}

impl OutputSink for MemorySink {
    fn emit(&mut self, outputs: &ReleaseOutputs) -> Result<()> {
        self.emitted.push(outputs.clone());
        Ok(())
    }
}

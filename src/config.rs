use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::BumpKind;
use crate::error::{DrafterError, Result};

/// Token replaced with the computed version in `tag` and `title`.
pub const VERSION_PLACEHOLDER: &str = "$COMPUTED_VERSION";

/// File names looked up in the working directory when no source is given.
const LOCAL_CONFIG_FILES: [&str; 3] = ["drafterino.yml", "drafterino.yaml", "drafterino.toml"];

/// File name looked up in the user configuration directory.
const USER_CONFIG_FILE: &str = "drafterino.toml";

/// Represents the complete configuration for drafterino.
///
/// Contains the label groups that drive the version bump, the tag and
/// release title templates, and the ordered release-notes sections.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    #[serde(default)]
    pub major_bump_labels: Vec<String>,

    #[serde(default)]
    pub minor_bump_labels: Vec<String>,

    #[serde(default)]
    pub patch_bump_labels: Vec<String>,

    #[serde(default)]
    pub post_bump_labels: Vec<String>,

    #[serde(default = "default_bump")]
    pub default_bump: String,

    #[serde(default = "default_tag")]
    pub tag: String,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default)]
    pub release_notes: Vec<ReleaseNoteSection>,
}

/// Returns the bump kind used when no label matches.
fn default_bump() -> String {
    BumpKind::Post.to_string()
}

/// Returns the default tag template.
fn default_tag() -> String {
    format!("v{}", VERSION_PLACEHOLDER)
}

/// Returns the default release title template.
fn default_title() -> String {
    format!("Release {}", VERSION_PLACEHOLDER)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            major_bump_labels: Vec::new(),
            minor_bump_labels: Vec::new(),
            patch_bump_labels: Vec::new(),
            post_bump_labels: Vec::new(),
            default_bump: default_bump(),
            tag: default_tag(),
            title: default_title(),
            release_notes: Vec::new(),
        }
    }
}

/// A titled release-notes section selected by label membership.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseNoteSection {
    pub title: String,

    #[serde(default)]
    pub labels: HashSet<String>,
}

impl ReleaseNoteSection {
    pub fn new<I, S>(title: impl Into<String>, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ReleaseNoteSection {
            title: title.into(),
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Label sets per bump kind plus the fallback kind.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpLabelGroups {
    pub major: HashSet<String>,
    pub minor: HashSet<String>,
    pub patch: HashSet<String>,
    pub post: HashSet<String>,
    pub default: BumpKind,
}

impl BumpLabelGroups {
    /// Groups with no labels and the given fallback kind
    pub fn empty(default: BumpKind) -> Self {
        BumpLabelGroups {
            major: HashSet::new(),
            minor: HashSet::new(),
            patch: HashSet::new(),
            post: HashSet::new(),
            default,
        }
    }

    /// The label set configured for `kind`
    pub fn labels_for(&self, kind: BumpKind) -> &HashSet<String> {
        match kind {
            BumpKind::Major => &self.major,
            BumpKind::Minor => &self.minor,
            BumpKind::Patch => &self.patch,
            BumpKind::Post => &self.post,
        }
    }
}

impl Config {
    /// Typed bump label groups.
    ///
    /// Fails with [`DrafterError::UnknownBumpKind`] if `default-bump` is not
    /// one of the four known kinds.
    pub fn label_groups(&self) -> Result<BumpLabelGroups> {
        Ok(BumpLabelGroups {
            major: label_set(&self.major_bump_labels),
            minor: label_set(&self.minor_bump_labels),
            patch: label_set(&self.patch_bump_labels),
            post: label_set(&self.post_bump_labels),
            default: self.default_bump.parse()?,
        })
    }

    /// Checks the configuration once after loading.
    pub fn validate(&self) -> Result<()> {
        self.label_groups()?;

        if let Some(position) = self
            .release_notes
            .iter()
            .position(|section| section.title.trim().is_empty())
        {
            return Err(DrafterError::config(format!(
                "release-notes section #{} has an empty title",
                position + 1
            )));
        }

        Ok(())
    }

    /// Replaces the version placeholder in `tag` and `title` in place.
    pub fn substitute_placeholders(&mut self, computed_version: &str) {
        self.tag = self.tag.replace(VERSION_PLACEHOLDER, computed_version);
        self.title = self.title.replace(VERSION_PLACEHOLDER, computed_version);
    }

    /// Parses a YAML document into a validated configuration.
    ///
    /// An empty document is a configuration error, not an empty config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Err(DrafterError::config("YAML config is empty"));
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DrafterError::config(format!("Failed to parse YAML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML document into a validated configuration.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Config = toml::from_str(text)
            .map_err(|e| DrafterError::config(format!("Failed to parse TOML config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

fn label_set(labels: &[String]) -> HashSet<String> {
    labels.iter().cloned().collect()
}

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    /// Inline YAML document (the `CONFIG` variable in a workflow)
    Inline(String),
    /// Explicit file; YAML for `.yml`/`.yaml`, TOML otherwise
    File(PathBuf),
    /// Look in the working directory, then the user config directory
    Discover,
}

/// Loads configuration from the given source.
///
/// Discovery tries, in order:
/// 1. `drafterino.yml`, `drafterino.yaml`, `drafterino.toml` in the current directory
/// 2. `drafterino.toml` in the user config directory
///
/// # Returns
/// * `Ok(Config)` - Loaded and validated configuration
/// * `Err` - If no configuration is found, or it cannot be read, parsed or validated
pub fn load_config(source: ConfigSource) -> Result<Config> {
    match source {
        ConfigSource::Inline(yaml) => Config::from_yaml(&yaml),
        ConfigSource::File(path) => load_file(&path),
        ConfigSource::Discover => {
            for name in LOCAL_CONFIG_FILES {
                let path = Path::new(name);
                if path.exists() {
                    return load_file(path);
                }
            }

            if let Some(config_dir) = dirs::config_dir() {
                let path = config_dir.join(USER_CONFIG_FILE);
                if path.exists() {
                    return load_file(&path);
                }
            }

            Err(DrafterError::config(format!(
                "no configuration found: set CONFIG, pass --config, or create one of {}",
                LOCAL_CONFIG_FILES.join(", ")
            )))
        }
    }
}

fn load_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| {
        DrafterError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yml") | Some("yaml") => Config::from_yaml(&text),
        _ => Config::from_toml(&text),
    }
}

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::boundary::BoundaryWarning;
use crate::error::{DrafterError, Result};

/// Repository coordinates and credentials needed for API calls
#[derive(Debug, Clone, PartialEq)]
pub struct GitHubContext {
    pub owner: String,
    pub repo: String,
    pub token: String,
}

/// Outcome of looking for GitHub context
#[derive(Debug, Clone, PartialEq)]
pub enum ContextResolution {
    Ready(GitHubContext),
    Missing(BoundaryWarning),
}

#[derive(Debug, Default, Deserialize)]
struct EventPayload {
    #[serde(default)]
    repository: Option<EventRepository>,
}

#[derive(Debug, Default, Deserialize)]
struct EventRepository {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    owner: Option<EventOwner>,
}

#[derive(Debug, Default, Deserialize)]
struct EventOwner {
    #[serde(default)]
    login: Option<String>,
}

impl GitHubContext {
    /// Resolves context from an event payload file and a token.
    ///
    /// A missing payload, owner, name or token is a warning, not an error.
    /// A payload that exists but cannot be read or parsed is an error.
    pub fn resolve(event_path: Option<&Path>, token: Option<&str>) -> Result<ContextResolution> {
        let path = match event_path {
            Some(path) if path.is_file() => path,
            other => {
                return Ok(ContextResolution::Missing(BoundaryWarning::NoEventPayload {
                    path: other.map(|p| p.display().to_string()),
                }))
            }
        };

        let raw = fs::read_to_string(path)?;
        let payload: EventPayload = serde_json::from_str(&raw).map_err(|e| {
            DrafterError::event(format!("Cannot parse {}: {}", path.display(), e))
        })?;

        let repository = payload.repository.unwrap_or_default();
        let owner = repository
            .owner
            .and_then(|owner| owner.login)
            .filter(|login| !login.is_empty());
        let name = repository.name.filter(|name| !name.is_empty());
        let token = token.filter(|token| !token.is_empty());

        match (owner, name, token) {
            (Some(owner), Some(repo), Some(token)) => Ok(ContextResolution::Ready(GitHubContext {
                owner,
                repo,
                token: token.to_string(),
            })),
            (owner, name, token) => {
                let mut missing = Vec::new();
                if owner.is_none() {
                    missing.push("repository owner");
                }
                if name.is_none() {
                    missing.push("repository name");
                }
                if token.is_none() {
                    missing.push("token");
                }
                Ok(ContextResolution::Missing(
                    BoundaryWarning::MissingGitHubContext { missing },
                ))
            }
        }
    }
}

//! Project slug.
//!
//! CircleCI addresses a project as `<vcs>/<organization>/<repository>`.

use crate::core::constants;
use crate::error::{Result, ValidationError};

/// A validated `<vcs>/<org>/<repo>` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSlug {
    vcs: String,
    organization: String,
    repository: String,
}

impl ProjectSlug {
    /// Build a slug from its parts.
    ///
    /// `vcs` falls back to `gh` when `None`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSlug` if a part is empty or contains `/`.
    pub fn new(vcs: Option<&str>, organization: &str, repository: &str) -> Result<Self> {
        let vcs = vcs.unwrap_or(constants::DEFAULT_VCS);
        for part in [vcs, organization, repository] {
            check_part(part)?;
        }

        Ok(Self {
            vcs: vcs.to_string(),
            organization: organization.to_string(),
            repository: repository.to_string(),
        })
    }
}

fn check_part(part: &str) -> Result<()> {
    let reason = if part.trim().is_empty() {
        "cannot be empty"
    } else if part.contains('/') {
        "cannot contain '/'"
    } else {
        return Ok(());
    };

    Err(ValidationError::InvalidSlug {
        part: part.to_string(),
        reason: reason.to_string(),
    }
    .into())
}

impl std::fmt::Display for ProjectSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.vcs, self.organization, self.repository)
    }
}

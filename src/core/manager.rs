//! Variable operations for one project.
//!
//! [`Manager`] composes the parser, the reconciler, a [`RemoteStore`] and a
//! [`Prompt`] into the user-facing operations: list, delete (by name or
//! interactively), single upsert and bulk import.
//!
//! Listing and parse failures abort an operation. Individual create or
//! delete failures are collected in the [`Report`]; the rest of the batch
//! still runs.

use tracing::{debug, info, warn};

use crate::core::domain::{Format, ProjectSlug, Source, Variable};
use crate::core::parse;
use crate::core::prompt::Prompt;
use crate::core::reconcile::{self, display_rows};
use crate::core::remote::RemoteStore;
use crate::core::validation;
use crate::error::{Error, Result, ValidationError};

/// How an operation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined the confirmation. Nothing was written.
    Cancelled,
    /// There was nothing to do.
    Nothing,
    /// Writes were attempted.
    Applied(Report),
}

/// Per-variable results of a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Names written or deleted successfully, in call order.
    pub succeeded: Vec<String>,
    /// Names whose call failed, with the error message.
    pub failed: Vec<(String, String)>,
}

impl Report {
    fn record(&mut self, name: &str, result: Result<()>) {
        match result {
            Ok(()) => self.succeeded.push(name.to_string()),
            Err(e) => self.failed.push((name.to_string(), e.to_string())),
        }
    }

    /// Whether every call succeeded.
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Operations on one project's variables.
pub struct Manager<S, P> {
    store: S,
    prompt: P,
    project: ProjectSlug,
}

impl<S: RemoteStore, P: Prompt> Manager<S, P> {
    pub fn new(store: S, prompt: P, project: ProjectSlug) -> Self {
        Self {
            store,
            prompt,
            project,
        }
    }

    pub fn project(&self) -> &ProjectSlug {
        &self.project
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    /// One listing call. Only the first page is read.
    fn snapshot(&self) -> Result<Vec<Variable>> {
        let listing = self.store.list(&self.project)?;
        if !listing.is_complete() {
            warn!(
                project = %self.project,
                listed = listing.items.len(),
                "not all variables are listed; only the first page was fetched"
            );
        }
        Ok(listing.items)
    }

    /// List the project's variables.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the listing call fails.
    pub fn list(&self) -> Result<Vec<Variable>> {
        self.snapshot()
    }

    /// Delete variables by name after confirmation.
    ///
    /// Names that don't exist remotely are shown and skipped.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoNames` for an empty request, or
    /// `RemoteError` if the listing call fails.
    pub fn delete<T: AsRef<str>>(&self, names: &[T]) -> Result<Outcome> {
        if names.is_empty() {
            return Err(ValidationError::NoNames.into());
        }

        let remote = self.snapshot()?;
        let plan = reconcile::partition_for_delete(names, &remote);
        debug!(
            found = plan.found.len(),
            not_found = plan.not_found.len(),
            "delete plan"
        );

        if !plan.not_found.is_empty() {
            self.prompt
                .present("These variables are not found.", &plan.not_found);
        }
        if plan.found.is_empty() {
            return Ok(Outcome::Nothing);
        }

        self.confirm_and_delete(&plan.found)
    }

    /// Pick variables to delete from the full list, then confirm.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the listing call fails, or `Error::Prompt`
    /// if the selection fails.
    pub fn delete_interactive(&self) -> Result<Outcome> {
        let remote = self.snapshot()?;
        if remote.is_empty() {
            return Ok(Outcome::Nothing);
        }

        let rows = display_rows(&remote);
        let chosen = self
            .prompt
            .select_many("Choose variables to be deleted.", &rows)?;
        let selected = reconcile::resolve_selection(&remote, &chosen);
        if selected.is_empty() {
            return Ok(Outcome::Nothing);
        }

        self.confirm_and_delete(&selected)
    }

    fn confirm_and_delete(&self, targets: &[Variable]) -> Result<Outcome> {
        self.prompt
            .present("These variables will be removed.", &display_rows(targets));
        if !self.prompt.confirm("Do you want to continue?")? {
            return Ok(Outcome::Cancelled);
        }

        let mut report = Report::default();
        for var in targets {
            let result = self.store.delete(&self.project, var.name());
            match &result {
                Ok(()) => info!(name = var.name(), "deleted"),
                Err(e) => debug!(name = var.name(), error = %e, "failed to delete"),
            }
            report.record(var.name(), result);
        }
        Ok(Outcome::Applied(report))
    }

    /// Create or overwrite a single variable.
    ///
    /// An existing variable is only overwritten after confirmation. A
    /// failed lookup is treated as "does not exist".
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a bad name, or `RemoteError` if the
    /// create call fails.
    pub fn upsert(&self, name: &str, value: &str) -> Result<Outcome> {
        validation::validate_name(name)?;

        let existing = match self.store.get(&self.project, name) {
            Ok(found) => found,
            Err(e) => {
                // Any lookup failure falls through to a create call.
                warn!(name, error = %e, "lookup failed; treating variable as absent");
                None
            }
        };

        if let Some(var) = existing {
            self.prompt.present(
                "This variable already exists.",
                &display_rows(std::slice::from_ref(&var)),
            );
            if !self.prompt.confirm("Do you want to overwrite?")? {
                return Ok(Outcome::Cancelled);
            }
        }

        let created = self.store.put(&self.project, name, value)?;
        info!(name = created.name(), "created");

        let mut report = Report::default();
        report.record(created.name(), Ok(()));
        Ok(Outcome::Applied(report))
    }

    /// Read, parse and apply a bulk import.
    ///
    /// `format` is checked before anything is read; an empty string means
    /// dotenv.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` for an unknown format or malformed content,
    /// `Error::ReadInput` if the file can't be read, `ValidationError` for
    /// a bad name, or `RemoteError` if the listing call fails.
    pub fn import(&self, source: &Source, format: &str) -> Result<Outcome> {
        let format: Format = format.parse()?;

        let content = match source {
            Source::File(path) => {
                std::fs::read_to_string(path).map_err(|source| Error::ReadInput {
                    path: path.clone(),
                    source,
                })?
            }
            Source::Stdin => self
                .prompt
                .read_all("Please input environment variables. (Finish to send EOF)")?,
        };
        debug!(%source, %format, bytes = content.len(), "read import");

        let desired = parse::parse(&content, format)?;
        self.upsert_many(&desired)
    }

    /// Create or overwrite every variable of `desired`.
    ///
    /// If any of them already exists, one confirmation covers the whole
    /// batch; declining writes nothing.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a bad name, or `RemoteError` if the
    /// listing call fails.
    pub fn upsert_many(&self, desired: &[Variable]) -> Result<Outcome> {
        validation::validate_desired(desired)?;
        if desired.is_empty() {
            return Ok(Outcome::Nothing);
        }

        let remote = self.snapshot()?;
        let plan = reconcile::partition_for_upsert(desired, &remote);
        debug!(
            new = plan.new.len(),
            overwrite = plan.overwrite.len(),
            "upsert plan"
        );

        if plan.needs_confirmation() {
            self.prompt
                .present("These variables already exist.", &display_rows(&plan.overwrite));
            if !self.prompt.confirm("Do you want to update all the variables?")? {
                return Ok(Outcome::Cancelled);
            }
        }

        let mut report = Report::default();
        for var in desired {
            let result = self.store.put(&self.project, var.name(), var.value());
            match &result {
                Ok(_) => info!(name = var.name(), "created"),
                Err(e) => debug!(name = var.name(), error = %e, "failed to create; continuing"),
            }
            report.record(var.name(), result.map(|_| ()));
        }
        Ok(Outcome::Applied(report))
    }
}

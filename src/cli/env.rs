//! Environment variable commands.
//!
//! ls, add, import and rm against one project.

use std::path::PathBuf;

use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::prompt::Terminal;
use crate::cli::ProjectArgs;
use crate::core::config::Config;
use crate::core::domain::Source;
use crate::core::manager::{Manager, Outcome};
use crate::core::prompt::Prompt;
use crate::core::reconcile::display_rows;
use crate::core::remote::CircleCi;
use crate::error::Result;

fn open(project: &ProjectArgs, yes: bool) -> Result<Manager<CircleCi, Terminal>> {
    let config = Config::load()?;
    let slug = project.slug(&config)?;
    let client = CircleCi::from_config(&config)?;
    let manager = Manager::new(client, Terminal::new(yes), slug);
    info!(
        project = %manager.project(),
        api = manager.store().base_url(),
        "opened project"
    );
    Ok(manager)
}

/// Print what happened; per-item failures don't fail the command.
fn report(outcome: Outcome, verb: &str, nothing: &str) {
    match outcome {
        Outcome::Cancelled => output::dimmed("Cancelled."),
        Outcome::Nothing => output::dimmed(nothing),
        Outcome::Applied(report) => {
            for name in &report.succeeded {
                output::success(&format!("{}: {}", verb, name));
            }
            for (name, error) in &report.failed {
                output::error(&format!("{}: {}", name, error));
            }
            if !report.is_clean() {
                output::warn(&format!(
                    "{} of {} variables failed",
                    report.failed.len(),
                    report.failed.len() + report.succeeded.len()
                ));
            }
        }
    }
}

/// List variables.
pub fn ls(project: &ProjectArgs, json: bool) -> Result<()> {
    let manager = open(project, false)?;
    let vars = manager.list()?;

    if json {
        output::data(&serde_json::to_string_pretty(&vars)?);
    } else if vars.is_empty() {
        output::dimmed("no variables");
    } else {
        for row in display_rows(&vars) {
            output::data(&row);
        }
    }

    Ok(())
}

/// Create or update one variable.
pub fn add(project: &ProjectArgs, name: &str, value: Option<String>, yes: bool) -> Result<()> {
    let manager = open(project, yes)?;
    let value = match value {
        Some(value) => Zeroizing::new(value),
        None => Zeroizing::new(manager.prompt().read_secret(&format!("Value for {}", name))?),
    };

    let outcome = manager.upsert(name, &value)?;
    report(outcome, "Created", "nothing to create");
    Ok(())
}

/// Create or update variables from a file or stdin.
pub fn import(project: &ProjectArgs, path: Option<PathBuf>, format: &str, yes: bool) -> Result<()> {
    let manager = open(project, yes)?;
    let outcome = manager.import(&Source::from_path(path), format)?;
    report(outcome, "Created", "nothing to import");
    Ok(())
}

/// Delete variables by name, or pick them interactively.
pub fn rm(project: &ProjectArgs, names: &[String], interactive: bool, yes: bool) -> Result<()> {
    let manager = open(project, yes)?;
    let outcome = if interactive {
        manager.delete_interactive()?
    } else {
        manager.delete(names)?
    };
    report(outcome, "Deleted", "nothing to delete");
    Ok(())
}

//! Reconciliation between a request and the remote set.
//!
//! Pure functions only: they decide which variables a delete or import
//! touches. Confirmation and API calls live in [`crate::core::manager`].

use std::collections::{HashMap, HashSet};

use crate::core::domain::Variable;

/// Requested names split by presence in the remote set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeletePlan {
    /// Remote variables to delete, in request order.
    pub found: Vec<Variable>,
    /// Requested names absent remotely, in request order.
    pub not_found: Vec<String>,
}

/// Desired variables split by presence in the remote set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpsertPlan {
    /// Desired variables with no remote counterpart.
    pub new: Vec<Variable>,
    /// Remote variables that will be overwritten, carrying the current
    /// remote value for display.
    pub overwrite: Vec<Variable>,
}

impl UpsertPlan {
    /// Whether applying the plan needs an overwrite confirmation.
    pub fn needs_confirmation(&self) -> bool {
        !self.overwrite.is_empty()
    }
}

/// Name lookup over a remote set. On duplicate names the last one wins.
fn index_by_name(remote: &[Variable]) -> HashMap<&str, &Variable> {
    remote.iter().map(|v| (v.name(), v)).collect()
}

/// Split `requested` into names that exist remotely and names that don't.
///
/// Both halves keep the order of `requested`.
pub fn partition_for_delete<S: AsRef<str>>(requested: &[S], remote: &[Variable]) -> DeletePlan {
    let lookup = index_by_name(remote);
    let mut plan = DeletePlan::default();

    for name in requested {
        let name = name.as_ref();
        match lookup.get(name) {
            Some(var) => plan.found.push((*var).clone()),
            None => plan.not_found.push(name.to_string()),
        }
    }

    plan
}

/// Split `desired` into new variables and remote variables about to be
/// overwritten.
///
/// A name repeated in `desired` is reported once in `overwrite`.
pub fn partition_for_upsert(desired: &[Variable], remote: &[Variable]) -> UpsertPlan {
    let lookup = index_by_name(remote);
    let mut plan = UpsertPlan::default();
    let mut seen: HashSet<&str> = HashSet::new();

    for var in desired {
        match lookup.get(var.name()) {
            Some(existing) => {
                if seen.insert(existing.name()) {
                    plan.overwrite.push((*existing).clone());
                }
            }
            None => plan.new.push(var.clone()),
        }
    }

    plan
}

/// Render variables as aligned `NAME  value` rows.
///
/// Names are padded to the widest name in `vars`, so rows are unique
/// whenever names are.
pub fn display_rows(vars: &[Variable]) -> Vec<String> {
    let width = vars
        .iter()
        .map(|v| v.name().chars().count())
        .max()
        .unwrap_or(0);

    vars.iter()
        .map(|v| format!("{:<width$} {}", v.name(), v.value(), width = width))
        .collect()
}

/// Map rows chosen from [`display_rows`] back to their variables.
///
/// Selection order is kept; rows that don't belong to `vars` are skipped.
pub fn resolve_selection<S: AsRef<str>>(vars: &[Variable], selected: &[S]) -> Vec<Variable> {
    let rows = display_rows(vars);
    let reverse: HashMap<&str, usize> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| (row.as_str(), i))
        .collect();

    selected
        .iter()
        .filter_map(|row| reverse.get(row.as_ref()).map(|&i| vars[i].clone()))
        .collect()
}

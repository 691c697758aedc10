//! Remote variable storage.
//!
//! Abstracts the CI provider's variable API so the reconciliation flow can
//! run against CircleCI or an in-memory double.
//!
//! ## Adding a New Provider
//!
//! 1. Implement the `RemoteStore` trait
//! 2. Add the implementation in a new file (e.g., `gitlab.rs`)
//! 3. Re-export from this module

use crate::core::domain::{Listing, ProjectSlug, Variable};
use crate::error::Result;

mod circleci;

pub use circleci::CircleCi;

/// Variable storage of a CI provider.
///
/// Every method is a single blocking round-trip. Errors carry the failing
/// operation name.
pub trait RemoteStore {
    /// Fetch the first page of the project's variables.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails.
    fn list(&self, project: &ProjectSlug) -> Result<Listing>;

    /// Fetch a single variable by name.
    ///
    /// # Returns
    ///
    /// `None` when the provider reports the variable does not exist.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` for any other failure.
    fn get(&self, project: &ProjectSlug, name: &str) -> Result<Option<Variable>>;

    /// Create a variable, or overwrite it if the name exists.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails.
    fn put(&self, project: &ProjectSlug, name: &str, value: &str) -> Result<Variable>;

    /// Delete a variable.
    ///
    /// # Errors
    ///
    /// Returns `RemoteError` if the request fails.
    fn delete(&self, project: &ProjectSlug, name: &str) -> Result<()>;
}

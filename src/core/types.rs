//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A variable name (e.g., DATABASE_URL, AWS_ACCESS_KEY_ID).
///
/// Unique key within a project.
pub type VariableName = String;

/// A variable value.
///
/// May hold a secret; remote values come back masked.
pub type VariableValue = String;

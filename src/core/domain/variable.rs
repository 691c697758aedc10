//! Variable type.
//!
//! A single project environment variable as the CI provider stores it.

use serde::{Deserialize, Serialize};

use crate::core::types::{VariableName, VariableValue};

/// A named environment variable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    name: VariableName,
    value: VariableValue,
}

impl Variable {
    /// Create a variable from a name and value
    pub fn new(name: impl Into<VariableName>, value: impl Into<VariableValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Variable name (unique within a project)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Variable value
    ///
    /// The provider masks values on read, so remote variables carry the
    /// masked form (e.g. `xxxx1234`).
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

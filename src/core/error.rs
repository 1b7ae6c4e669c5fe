//! Errors raised by the state container and the definition parser.

use thiserror::Error;

/// Errors raised when a container is used against its own schema.
///
/// These are programmer errors in the calling code; nothing inside the
/// crate retries or recovers from them.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("State '{name}' is not declared")]
    UnknownState { name: String },

    #[error("Incorrect number of arguments for state '{state}', expected: {expected}, received: {received}")]
    Arity {
        state: String,
        expected: usize,
        received: usize,
    },

    #[error("All cases are not covered in a case_of clause, missing: {}", .missing.join(", "))]
    NonExhaustive { missing: Vec<String> },
}

/// A single problem found in a state definition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaViolation {
    #[error("No states were declared")]
    Empty,

    #[error("The initial state '{name}' cannot contain data (fields: {})", .fields.join(", "))]
    InitialStateHasFields { name: String, fields: Vec<String> },

    #[error("Malformed state definition '{raw}'")]
    Malformed { raw: String },

    #[error("State name cannot be empty")]
    EmptyName,

    #[error("State '{state}' declares an empty field name")]
    EmptyFieldName { state: String },

    #[error("State name '{name}' has surrounding whitespace or contains '<', '>' or ','")]
    IllegalName { name: String },

    #[error("State '{state}' declares field '{field}' with surrounding whitespace or '<', '>' or ','")]
    IllegalFieldName { state: String, field: String },

    #[error("State '{name}' is declared more than once")]
    DuplicateState { name: String },

    #[error("State '{state}' declares field '{field}' more than once")]
    DuplicateField { state: String, field: String },
}

/// A state definition was rejected.
///
/// Carries every violation found in the definition, not only the first one.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid state definition: {}", render_violations(.violations))]
pub struct DefinitionError {
    violations: Vec<SchemaViolation>,
}

impl DefinitionError {
    pub(crate) fn new(violations: Vec<SchemaViolation>) -> Self {
        Self { violations }
    }

    /// All violations, in the order they were detected.
    pub fn violations(&self) -> &[SchemaViolation] {
        &self.violations
    }

    pub fn contains(&self, violation: &SchemaViolation) -> bool {
        self.violations.contains(violation)
    }
}

impl From<SchemaViolation> for DefinitionError {
    fn from(violation: SchemaViolation) -> Self {
        Self::new(vec![violation])
    }
}

fn render_violations(violations: &[SchemaViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

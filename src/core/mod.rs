//! Core state container types and logic.
//!
//! This module contains the pure core of the library:
//! - State descriptors and the `name<fields>` definition parser
//! - The validated, immutable `StateSet`
//! - The `Container` value with transitions, conditional callbacks and
//!   exhaustive matching
//! - Immutable transition history
//!
//! Nothing in this module mutates a value after construction.

mod clauses;
mod container;
mod data;
mod descriptor;
mod error;
mod history;
mod state_set;

pub use clauses::{Clauses, WILDCARD};
pub use container::Container;
pub use data::Data;
pub use descriptor::StateDescriptor;
pub use error::{DefinitionError, SchemaViolation, StateError};
pub use history::{StateHistory, StateTransition};
pub use state_set::StateSet;

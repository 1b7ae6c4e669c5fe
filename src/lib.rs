//! PossibleStates: an immutable algebraic state container
//!
//! A value modelled as exactly one of a fixed, named set of mutually
//! exclusive states, each optionally carrying data. Containers are pure
//! values: every transition returns a new container and leaves the old one
//! untouched.
//!
//! # Core Concepts
//!
//! - **StateSet**: the validated schema of states, declared from
//!   `name<fields>` strings or with `StatesBuilder`
//! - **Container**: the active state plus its data, with transitions,
//!   conditional callbacks and exhaustive matching
//! - **Projection**: the read-only view consumed by the `When` and `CaseOf`
//!   render projectors
//!
//! # Example
//!
//! ```rust
//! use possible_states::core::Clauses;
//! use possible_states::{define, Container};
//!
//! let ui: Container<&str> = define(["a", "b<first, second>"]).unwrap();
//!
//! let ui = ui.transition_to("b", ["foo", "bar"]).unwrap();
//! assert_eq!(ui.current(), "b");
//! assert_eq!(ui.data().get("second"), Some(&"bar"));
//!
//! let label = ui
//!     .case_of(
//!         Clauses::new()
//!             .on("a", |_| "nothing".to_string())
//!             .on("b", |data| format!("{} items", data.len())),
//!     )
//!     .unwrap();
//! assert_eq!(label, "2 items");
//!
//! assert!(ui.transition_to("b", ["foo"]).is_err());
//! ```

pub mod builder;
pub mod core;
pub mod render;

// Re-export commonly used types
pub use builder::{define, StatesBuilder};
pub use self::core::{
    Clauses, Container, Data, DefinitionError, SchemaViolation, StateDescriptor, StateError,
    StateSet,
};
pub use render::{CaseOf, Projection, When};

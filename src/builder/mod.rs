//! Constructors for state containers.
//!
//! Containers can be declared from `name<fields>` strings with [`define`], from
//! an explicit schema with [`StatesBuilder`], or as a typed enum with the
//! [`possible_states!`](crate::possible_states) macro.

pub mod macros;
pub mod states;

pub use states::StatesBuilder;

use crate::core::{Container, DefinitionError, StateSet};
use std::sync::Arc;

/// Parse state definitions and return a container in the first state.
///
/// Each definition is either `name` or `name<field, ...>`. Fails when no
/// states are given, when the first state declares fields, or when the
/// definitions are malformed or contain duplicates.
///
/// # Example
///
/// ```
/// use possible_states::{define, Container};
///
/// let ui: Container<&str> = define(["a", "b", "c"]).unwrap();
/// assert_eq!(ui.current(), "a");
///
/// let ui = ui.to("b").unwrap();
/// assert_eq!(ui.current(), "b");
///
/// assert!(define::<&str, _, _>(["a<no>"]).is_err());
/// ```
pub fn define<V, I, S>(definitions: I) -> Result<Container<V>, DefinitionError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let states = StateSet::parse(definitions)?;
    Ok(Container::from_states(Arc::new(states)))
}

//! Builder for declaring a state schema explicitly.

use crate::core::{Container, DefinitionError, StateDescriptor, StateSet};
use std::sync::Arc;

/// Builder for constructing containers from an explicit schema.
///
/// The first declared state is the initial one. Validation runs once, in
/// [`build`](Self::build) or [`build_states`](Self::build_states), and reports
/// every problem at the same time.
///
/// # Example
///
/// ```rust
/// use possible_states::builder::StatesBuilder;
/// use possible_states::Container;
///
/// let ui: Container<String> = StatesBuilder::new()
///     .state("idle")
///     .state_with("loaded", ["text"])
///     .build()
///     .unwrap();
///
/// assert_eq!(ui.current(), "idle");
/// ```
#[derive(Clone, Debug, Default)]
pub struct StatesBuilder {
    descriptors: Vec<StateDescriptor>,
}

impl StatesBuilder {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Declare a state without data.
    pub fn state(mut self, name: impl Into<String>) -> Self {
        self.descriptors.push(StateDescriptor::plain(name));
        self
    }

    /// Declare a state carrying the given fields, in order.
    pub fn state_with<I, F>(mut self, name: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        self.descriptors.push(StateDescriptor::new(name, fields));
        self
    }

    /// Add a pre-built descriptor.
    pub fn descriptor(mut self, descriptor: StateDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Validate the schema without starting a container.
    pub fn build_states(self) -> Result<StateSet, DefinitionError> {
        StateSet::new(self.descriptors)
    }

    /// Validate the schema and return a container in the initial state.
    pub fn build<V>(self) -> Result<Container<V>, DefinitionError> {
        let states = self.build_states()?;
        Ok(Container::from_states(Arc::new(states)))
    }
}

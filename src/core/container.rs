//! The immutable state container.

use super::clauses::Clauses;
use super::data::Data;
use super::descriptor::StateDescriptor;
use super::error::StateError;
use super::history::{StateHistory, StateTransition};
use super::state_set::StateSet;
use std::sync::Arc;
use tracing::{debug, trace};

/// A value that is exactly one of a fixed set of named states.
///
/// Containers are never mutated. Every transition returns a new container
/// that shares the same [`StateSet`]; the source container stays valid and
/// keeps its own state and data.
///
/// History is off by default. [`Container::with_history`] turns on a bounded
/// trail of transitions for the rest of the lineage.
///
/// # Example
///
/// ```rust
/// use possible_states::{define, Container};
///
/// let ui: Container<&str> = define(["a", "b<first, second>"]).unwrap();
/// let loaded = ui.transition_to("b", ["foo", "bar"]).unwrap();
///
/// assert_eq!(ui.current(), "a");
/// assert_eq!(loaded.current(), "b");
/// assert_eq!(loaded.data().get("first"), Some(&"foo"));
/// ```
#[derive(Clone, Debug)]
pub struct Container<V = serde_json::Value> {
    states: Arc<StateSet>,
    current: usize,
    data: Data<V>,
    history: Option<StateHistory>,
}

impl<V> Container<V> {
    /// Start a lineage in the initial state of `states`.
    pub fn from_states(states: Arc<StateSet>) -> Self {
        Self {
            states,
            current: 0,
            data: Data::new(),
            history: None,
        }
    }

    /// Record the latest `capacity` transitions from here on.
    ///
    /// Containers derived from the result carry the history forward; the
    /// source of each transition keeps its own.
    pub fn with_history(self, capacity: usize) -> Self {
        Self {
            history: Some(StateHistory::bounded(capacity)),
            ..self
        }
    }

    /// Name of the active state.
    pub fn current(&self) -> &str {
        self.descriptor().name()
    }

    /// Descriptor of the active state.
    pub fn descriptor(&self) -> &StateDescriptor {
        self.states.at(self.current)
    }

    /// Every state this lineage can occupy.
    pub fn states(&self) -> &Arc<StateSet> {
        &self.states
    }

    /// Transitions recorded since [`Container::with_history`], if enabled.
    pub fn history(&self) -> Option<&StateHistory> {
        self.history.as_ref()
    }

    pub fn is(&self, name: &str) -> bool {
        self.current() == name
    }

    /// Borrow the active data without copying it.
    pub fn data_ref(&self) -> &Data<V> {
        &self.data
    }

    fn lookup(&self, name: &str) -> Result<usize, StateError> {
        self.states
            .position(name)
            .ok_or_else(|| StateError::UnknownState {
                name: name.to_string(),
            })
    }

    /// Move to `name`, binding `args` to its fields in declaration order.
    ///
    /// Every declared state is a valid target, including the active one;
    /// re-entering a state replaces its data. Fails when `name` is not
    /// declared or when the number of arguments differs from the number
    /// of fields.
    pub fn transition_to<I>(&self, name: &str, args: I) -> Result<Self, StateError>
    where
        I: IntoIterator<Item = V>,
    {
        let target = self.lookup(name)?;
        let descriptor = self.states.at(target);
        let args: Vec<V> = args.into_iter().collect();

        if args.len() != descriptor.arity() {
            return Err(StateError::Arity {
                state: descriptor.name().to_string(),
                expected: descriptor.arity(),
                received: args.len(),
            });
        }

        debug!(
            from = self.current(),
            to = descriptor.name(),
            fields = args.len(),
            "state transition"
        );

        Ok(Self {
            states: Arc::clone(&self.states),
            current: target,
            data: Data::zip(descriptor.fields(), args),
            history: self.history.as_ref().map(|history| {
                history.record(StateTransition::new(self.current(), descriptor.name()))
            }),
        })
    }

    /// Move to a state that carries no data.
    pub fn to(&self, name: &str) -> Result<Self, StateError> {
        self.transition_to(name, std::iter::empty())
    }

    /// Run `callback` with the active data if `name` is the active state.
    ///
    /// Returns `Ok(None)` without calling `callback` when another state is
    /// active.
    pub fn when<R, F>(&self, name: &str, callback: F) -> Result<Option<R>, StateError>
    where
        F: FnOnce(&Data<V>) -> R,
    {
        let target = self.lookup(name)?;
        if target != self.current {
            return Ok(None);
        }

        trace!(state = name, "when callback matched");
        Ok(Some(callback(&self.data)))
    }

    /// Dispatch to the clause for the active state.
    ///
    /// Every declared state must have a clause unless a catch-all is present;
    /// otherwise fails with [`StateError::NonExhaustive`] listing the
    /// uncovered states, whichever state is active.
    pub fn case_of<R>(&self, clauses: Clauses<'_, V, R>) -> Result<R, StateError> {
        let missing = clauses.missing(self.states.names());
        if !missing.is_empty() {
            return Err(StateError::NonExhaustive { missing });
        }

        let current = self.current();
        let arm = clauses
            .select(current)
            .ok_or_else(|| StateError::NonExhaustive {
                missing: vec![current.to_string()],
            })?;

        trace!(state = current, "case_of dispatched");
        Ok(arm(&self.data))
    }
}

impl<V: Clone> Container<V> {
    /// Copy of the active data.
    pub fn data(&self) -> Data<V> {
        self.data.clone()
    }
}

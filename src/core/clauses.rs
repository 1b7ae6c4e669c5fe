//! Clauses for exhaustive matching over a container's states.

use super::data::Data;

/// Key that registers a clause as the catch-all.
pub const WILDCARD: &str = "_";

type Arm<'a, V, R> = Box<dyn FnOnce(&Data<V>) -> R + 'a>;

/// A set of per-state callbacks, optionally with a catch-all.
///
/// Passed to [`Container::case_of`](super::Container::case_of), which checks
/// that every declared state is covered before dispatching.
///
/// # Example
///
/// ```rust
/// use possible_states::define;
/// use possible_states::core::{Clauses, Container};
///
/// let ui: Container<&str> = define(["idle", "loaded<text>"]).unwrap();
///
/// let label = ui
///     .case_of(
///         Clauses::new()
///             .on("loaded", |data| data.get("text").copied().unwrap_or_default())
///             .otherwise(|_| "nothing yet"),
///     )
///     .unwrap();
///
/// assert_eq!(label, "nothing yet");
/// ```
pub struct Clauses<'a, V, R> {
    arms: Vec<(String, Arm<'a, V, R>)>,
    wildcard: Option<Arm<'a, V, R>>,
}

impl<'a, V, R> Default for Clauses<'a, V, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, V, R> Clauses<'a, V, R> {
    pub fn new() -> Self {
        Self {
            arms: Vec::new(),
            wildcard: None,
        }
    }

    /// Handle the state called `name`. The `_` key registers the catch-all.
    ///
    /// Registering the same state twice keeps the later callback.
    pub fn on<F>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: FnOnce(&Data<V>) -> R + 'a,
    {
        let name = name.into();
        if name == WILDCARD {
            self.wildcard = Some(Box::new(callback));
            return self;
        }

        self.arms.retain(|(existing, _)| *existing != name);
        self.arms.push((name, Box::new(callback)));
        self
    }

    /// Handle every state without its own clause.
    pub fn otherwise<F>(mut self, callback: F) -> Self
    where
        F: FnOnce(&Data<V>) -> R + 'a,
    {
        self.wildcard = Some(Box::new(callback));
        self
    }

    pub fn covers(&self, name: &str) -> bool {
        self.arms.iter().any(|(existing, _)| existing == name)
    }

    pub fn has_wildcard(&self) -> bool {
        self.wildcard.is_some()
    }

    /// Names from `states` that neither have a clause nor fall under a wildcard.
    pub(crate) fn missing<'s>(&self, states: impl Iterator<Item = &'s str>) -> Vec<String> {
        if self.has_wildcard() {
            return Vec::new();
        }
        states
            .filter(|name| !self.covers(name))
            .map(str::to_string)
            .collect()
    }

    /// Take the callback for `name`, falling back to the catch-all.
    pub(crate) fn select(mut self, name: &str) -> Option<Arm<'a, V, R>> {
        match self.arms.iter().position(|(existing, _)| existing == name) {
            Some(index) => Some(self.arms.swap_remove(index).1),
            None => self.wildcard.take(),
        }
    }
}

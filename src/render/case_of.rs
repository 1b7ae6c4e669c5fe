//! Projector that renders one branch per state.

use super::slot::Slot;
use super::Projection;
use crate::core::Data;
use std::collections::HashMap;
use tracing::trace;

/// Renders the branch registered for the active state.
///
/// Lookup order for the active state: its scoped branch, then its plain
/// branch, then the default slot. Renders nothing when none applies.
///
/// # Example
///
/// ```rust
/// use possible_states::render::CaseOf;
/// use possible_states::{define, Container};
///
/// let ui: Container<&str> = define(["no", "yes<text>"]).unwrap();
/// let view = CaseOf::new()
///     .slot("no", "<div>nope</div>".to_string())
///     .scoped("yes", |data| format!("<div>{}</div>", data.get("text").unwrap()))
///     .default_slot("<div>fallback</div>".to_string());
///
/// assert_eq!(view.render(&ui).as_deref(), Some("<div>nope</div>"));
///
/// let ui = ui.transition_to("yes", ["holy moly"]).unwrap();
/// assert_eq!(view.render(&ui).as_deref(), Some("<div>holy moly</div>"));
/// ```
#[derive(Debug)]
pub struct CaseOf<'a, M, V> {
    branches: HashMap<String, Slot<'a, M, V>>,
    default: Option<M>,
}

impl<'a, M, V> Default for CaseOf<'a, M, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, M, V> CaseOf<'a, M, V> {
    pub fn new() -> Self {
        Self {
            branches: HashMap::new(),
            default: None,
        }
    }

    /// Plain branch for the state called `name`.
    pub fn slot(mut self, name: impl Into<String>, markup: M) -> Self {
        let name = name.into();
        let slot = self.branches.remove(&name).unwrap_or_default();
        self.insert(name, slot.with_plain(markup))
    }

    /// Scoped branch for the state called `name`, called with the active data.
    pub fn scoped<F>(mut self, name: impl Into<String>, render: F) -> Self
    where
        F: Fn(&Data<V>) -> M + 'a,
    {
        let name = name.into();
        let slot = self.branches.remove(&name).unwrap_or_default();
        self.insert(name, slot.with_scoped(render))
    }

    /// Markup used when the active state has no branch.
    pub fn default_slot(mut self, markup: M) -> Self {
        self.default = Some(markup);
        self
    }

    fn insert(mut self, name: String, slot: Slot<'a, M, V>) -> Self {
        self.branches.insert(name, slot);
        self
    }

    pub fn handles(&self, name: &str) -> bool {
        self.branches.get(name).is_some_and(|slot| !slot.is_empty())
    }

    pub fn render<P>(&self, state: &P) -> Option<M>
    where
        P: Projection<Value = V> + ?Sized,
        M: Clone,
    {
        let current = state.current();

        if let Some(rendered) = self
            .branches
            .get(current)
            .and_then(|slot| slot.render(|| state.data()))
        {
            trace!(state = current, "case_of projector matched");
            return Some(rendered);
        }

        trace!(state = current, "case_of projector fell back to default");
        self.default.clone()
    }
}

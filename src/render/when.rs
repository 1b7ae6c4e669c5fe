//! Projector that renders a single state.

use super::slot::Slot;
use super::Projection;
use crate::core::Data;
use tracing::trace;

/// Renders its slot only while the state named `of` is active.
///
/// # Example
///
/// ```rust
/// use possible_states::render::When;
/// use possible_states::{define, Container};
///
/// let ui: Container<&str> = define(["empty", "full<text>"]).unwrap();
/// let view = When::of("full").scoped(|data| format!("<p>{}</p>", data.get("text").unwrap()));
///
/// assert_eq!(view.render(&ui), None);
///
/// let ui = ui.transition_to("full", ["Some text"]).unwrap();
/// assert_eq!(view.render(&ui).as_deref(), Some("<p>Some text</p>"));
/// ```
#[derive(Debug)]
pub struct When<'a, M, V> {
    of: String,
    slot: Slot<'a, M, V>,
}

impl<'a, M, V> When<'a, M, V> {
    pub fn of(name: impl Into<String>) -> Self {
        Self {
            of: name.into(),
            slot: Slot::default(),
        }
    }

    /// Plain default slot.
    pub fn slot(mut self, markup: M) -> Self {
        self.slot = self.slot.with_plain(markup);
        self
    }

    /// Scoped default slot, called with the active data.
    pub fn scoped<F>(mut self, render: F) -> Self
    where
        F: Fn(&Data<V>) -> M + 'a,
    {
        self.slot = self.slot.with_scoped(render);
        self
    }

    pub fn target(&self) -> &str {
        &self.of
    }

    /// Render for `state`, or `None` when another state is active or no
    /// slot was given.
    pub fn render<P>(&self, state: &P) -> Option<M>
    where
        P: Projection<Value = V> + ?Sized,
        M: Clone,
    {
        if state.current() != self.of {
            return None;
        }

        trace!(state = %self.of, "when projector matched");
        self.slot.render(|| state.data())
    }
}

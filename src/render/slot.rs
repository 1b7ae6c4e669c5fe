//! Slots: the markup a projector can emit for one branch.

use crate::core::Data;
use std::fmt;

type Scoped<'a, M, V> = Box<dyn Fn(&Data<V>) -> M + 'a>;

/// One renderable branch.
///
/// A slot holds plain markup, a scoped renderer that receives the active
/// data, or both. The scoped renderer wins when both are present.
pub struct Slot<'a, M, V> {
    plain: Option<M>,
    scoped: Option<Scoped<'a, M, V>>,
}

impl<'a, M, V> Default for Slot<'a, M, V> {
    fn default() -> Self {
        Self {
            plain: None,
            scoped: None,
        }
    }
}

impl<'a, M, V> Slot<'a, M, V> {
    pub fn plain(markup: M) -> Self {
        Self::default().with_plain(markup)
    }

    pub fn scoped<F>(render: F) -> Self
    where
        F: Fn(&Data<V>) -> M + 'a,
    {
        Self::default().with_scoped(render)
    }

    pub fn with_plain(mut self, markup: M) -> Self {
        self.plain = Some(markup);
        self
    }

    pub fn with_scoped<F>(mut self, render: F) -> Self
    where
        F: Fn(&Data<V>) -> M + 'a,
    {
        self.scoped = Some(Box::new(render));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_none() && self.scoped.is_none()
    }

    /// Render this slot, preferring the scoped renderer.
    pub(crate) fn render(&self, data: impl FnOnce() -> Data<V>) -> Option<M>
    where
        M: Clone,
    {
        if let Some(scoped) = &self.scoped {
            return Some(scoped(&data()));
        }
        self.plain.clone()
    }
}

impl<'a, M: fmt::Debug, V> fmt::Debug for Slot<'a, M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("plain", &self.plain)
            .field("scoped", &self.scoped.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_renders_nothing() {
        let slot: Slot<'_, String, ()> = Slot::default();

        assert!(slot.is_empty());
        assert_eq!(slot.render(Data::new), None);
    }

    #[test]
    fn plain_slot_renders_markup() {
        let slot: Slot<'_, &str, ()> = Slot::plain("<p>hi</p>");

        assert_eq!(slot.render(Data::new), Some("<p>hi</p>"));
    }

    #[test]
    fn scoped_slot_wins_over_plain() {
        let slot = Slot::plain("plain".to_string())
            .with_scoped(|data: &Data<&str>| format!("scoped {}", data.len()));

        let rendered = slot.render(|| Data::new().with("text", "x"));
        assert_eq!(rendered.as_deref(), Some("scoped 1"));
    }

    #[test]
    fn plain_slot_does_not_read_data() {
        let slot: Slot<'_, &str, ()> = Slot::plain("markup");

        let rendered = slot.render(|| panic!("plain slots never read data"));
        assert_eq!(rendered, Some("markup"));
    }
}

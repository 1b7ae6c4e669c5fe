//! Render projectors that map the active state onto host markup.
//!
//! The projectors are independent of any templating system: they are generic
//! over the markup type `M` and only read state through the [`Projection`]
//! capability, so any binding layer can sit on top of them.
//!
//! - [`When`]: renders a branch only while one named state is active
//! - [`CaseOf`]: renders the branch registered for the active state, or a
//!   default

mod case_of;
mod slot;
mod when;

pub use case_of::CaseOf;
pub use slot::Slot;
pub use when::When;

use crate::core::{Container, Data};
use serde::Serialize;
use tracing::warn;

/// JSON value used as the data type of typed state enums.
pub type JsonValue = serde_json::Value;

/// Read-only view of "which state is active, and with what data".
///
/// Implemented by [`Container`] and by enums declared with
/// [`possible_states!`](crate::possible_states).
pub trait Projection {
    type Value;

    /// Name of the active state.
    fn current(&self) -> &str;

    /// Data bound to the active state.
    fn data(&self) -> Data<Self::Value>;
}

impl<V: Clone> Projection for Container<V> {
    type Value = V;

    fn current(&self) -> &str {
        Container::current(self)
    }

    fn data(&self) -> Data<V> {
        Container::data(self)
    }
}

impl<P: Projection + ?Sized> Projection for &P {
    type Value = P::Value;

    fn current(&self) -> &str {
        (**self).current()
    }

    fn data(&self) -> Data<Self::Value> {
        (**self).data()
    }
}

/// Convert a typed state field to JSON for projection.
///
/// Values that cannot be represented as JSON project as `null`.
#[doc(hidden)]
pub fn field_value<T: Serialize + ?Sized>(field: &str, value: &T) -> JsonValue {
    serde_json::to_value(value).unwrap_or_else(|error| {
        warn!(field, %error, "state field is not representable as JSON");
        JsonValue::Null
    })
}

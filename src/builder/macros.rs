//! Macros for declaring typed state unions.

/// Declare an enum of mutually exclusive states and make it projectable.
///
/// Each variant is a state; struct-like variants carry named fields, which
/// become the state's data. The generated enum implements
/// [`Projection`](crate::render::Projection), so it can drive the same
/// render projectors as a [`Container`](crate::Container). Field values are
/// converted to JSON and must implement `serde::Serialize`.
///
/// Exhaustive matching on the generated enum is plain `match`.
///
/// # Example
///
/// ```
/// use possible_states::possible_states;
/// use possible_states::render::Projection;
///
/// possible_states! {
///     pub enum Upload {
///         Idle,
///         Sending { progress: u8 },
///         Failed { reason: String, retries: u32 },
///     }
/// }
///
/// let upload = Upload::Sending { progress: 40 };
///
/// assert_eq!(upload.current(), "Sending");
/// assert_eq!(upload.data().get("progress"), Some(&serde_json::json!(40)));
/// assert_eq!(Upload::NAMES, ["Idle", "Sending", "Failed"]);
/// ```
#[macro_export]
macro_rules! possible_states {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $({
                    $( $field:ident : $ty:ty ),* $(,)?
                })?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant $({ $( $field: $ty ),* })?
            ),*
        }

        #[allow(dead_code)]
        impl $name {
            /// State names in declaration order.
            pub const NAMES: &'static [&'static str] = &[$(stringify!($variant)),*];
        }

        impl $crate::render::Projection for $name {
            type Value = $crate::render::JsonValue;

            fn current(&self) -> &str {
                match self {
                    $(Self::$variant $({ $( $field: _ ),* })? => stringify!($variant)),*
                }
            }

            fn data(&self) -> $crate::core::Data<Self::Value> {
                match self {
                    $(
                        Self::$variant $({ $( $field ),* })? => {
                            let data = $crate::core::Data::new();
                            $($(
                                let data = data.with(
                                    stringify!($field),
                                    $crate::render::field_value(stringify!($field), $field),
                                );
                            )*)?
                            data
                        }
                    ),*
                }
            }
        }
    };
}

//! State descriptors and the string definition parser.
//!
//! A definition is either a bare name (`"idle"`) or a name followed by a
//! comma separated list of field names in angle brackets
//! (`"loaded<text, count>"`).

use super::error::SchemaViolation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named state together with the ordered names of the data it carries.
///
/// # Example
///
/// ```rust
/// use possible_states::core::StateDescriptor;
///
/// let descriptor = StateDescriptor::parse("loaded<text, count>").unwrap();
///
/// assert_eq!(descriptor.name(), "loaded");
/// assert_eq!(descriptor.fields(), ["text", "count"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateDescriptor {
    name: String,
    #[serde(default)]
    fields: Vec<String>,
}

impl StateDescriptor {
    /// Create a descriptor from an explicit name and field list.
    ///
    /// No validation happens here; descriptors are checked together when a
    /// `StateSet` is built from them.
    pub fn new<N, I, F>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// A descriptor without data.
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Parse a `name` or `name<field, ...>` definition.
    ///
    /// Whitespace around the name and around each field is trimmed. Angle
    /// brackets anywhere other than a single trailing group are rejected.
    pub fn parse(raw: &str) -> Result<Self, SchemaViolation> {
        let malformed = || SchemaViolation::Malformed {
            raw: raw.to_string(),
        };
        let trimmed = raw.trim();

        let Some(open) = trimmed.find('<') else {
            if trimmed.contains('>') {
                return Err(malformed());
            }
            return Ok(Self::plain(trimmed));
        };

        let inner = trimmed[open + 1..]
            .strip_suffix('>')
            .ok_or_else(malformed)?;
        if inner.contains(['<', '>']) {
            return Err(malformed());
        }

        let name = trimmed[..open].trim();
        let fields = inner.split(',').map(|field| field.trim().to_string());

        Ok(Self::new(name, fields))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Field names in declaration order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Number of values a transition into this state expects.
    pub fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn has_data(&self) -> bool {
        !self.fields.is_empty()
    }
}

impl FromStr for StateDescriptor {
    type Err = SchemaViolation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl fmt::Display for StateDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}<{}>", self.name, self.fields.join(", "))
        }
    }
}

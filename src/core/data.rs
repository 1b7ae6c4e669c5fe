//! Data bound to the active state.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Ordered mapping from field name to value.
///
/// Entries keep the order in which the state declared its fields.
/// Serializes as a map, so `serde_json` renders it as an object.
///
/// # Example
///
/// ```rust
/// use possible_states::core::Data;
///
/// let data = Data::new().with("first", "foo").with("second", "bar");
///
/// assert_eq!(data.get("second"), Some(&"bar"));
/// assert_eq!(data.fields().collect::<Vec<_>>(), ["first", "second"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Data<V> {
    entries: Vec<(String, V)>,
}

impl<V> Default for Data<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Data<V> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Return a new mapping with `field` bound to `value`.
    ///
    /// Binding a field that is already present replaces its value in place.
    pub fn with(mut self, field: impl Into<String>, value: V) -> Self {
        let field = field.into();
        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
        self
    }

    pub(crate) fn zip(fields: &[String], values: Vec<V>) -> Self {
        Self {
            entries: fields.iter().cloned().zip(values).collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert every value, keeping field names and order.
    pub fn map<U, F>(self, mut f: F) -> Data<U>
    where
        F: FnMut(V) -> U,
    {
        Data {
            entries: self
                .entries
                .into_iter()
                .map(|(name, value)| (name, f(value)))
                .collect(),
        }
    }

    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for Data<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |data, (field, value)| data.with(field, value))
    }
}

impl<V> IntoIterator for Data<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for Data<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, value) in &self.entries {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

//! The validated, immutable set of states a container lineage can occupy.

use super::descriptor::StateDescriptor;
use super::error::{DefinitionError, SchemaViolation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

type Check = Validation<(), NonEmptyVec<SchemaViolation>>;

/// Ordered set of state descriptors. The first descriptor is the initial state.
///
/// A `StateSet` can only be obtained through validation, so every instance
/// satisfies these invariants:
///
/// - it contains at least one state
/// - the initial state carries no data
/// - state names are non-empty and unique
/// - field names are non-empty and unique within their state
/// - no name contains `<`, `>` or `,` or has surrounding whitespace, so every
///   descriptor prints back to a definition that parses to itself
///
/// # Example
///
/// ```rust
/// use possible_states::core::{StateDescriptor, StateSet};
///
/// let states = StateSet::new(vec![
///     StateDescriptor::plain("idle"),
///     StateDescriptor::new("loaded", ["text"]),
/// ])
/// .unwrap();
///
/// assert_eq!(states.initial().name(), "idle");
/// assert_eq!(states.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<StateDescriptor>", into = "Vec<StateDescriptor>")]
pub struct StateSet {
    descriptors: Vec<StateDescriptor>,
}

impl StateSet {
    /// Validate descriptors, accumulating every violation before failing.
    pub fn new(descriptors: Vec<StateDescriptor>) -> Result<Self, DefinitionError> {
        match validate(&descriptors) {
            Validation::Success(_) => Ok(Self { descriptors }),
            Validation::Failure(errors) => {
                Err(DefinitionError::new(errors.iter().cloned().collect()))
            }
        }
    }

    /// Parse and validate `name` / `name<fields>` definitions.
    ///
    /// Parse failures are reported together with the schema violations of
    /// the definitions that did parse.
    pub fn parse<I, S>(definitions: I) -> Result<Self, DefinitionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut descriptors = Vec::new();
        let mut malformed = Vec::new();
        let mut initial_malformed = false;

        for (index, raw) in definitions.into_iter().enumerate() {
            match StateDescriptor::parse(raw.as_ref()) {
                Ok(descriptor) => descriptors.push(descriptor),
                Err(violation) => {
                    initial_malformed |= index == 0;
                    malformed.push(violation);
                }
            }
        }

        if malformed.is_empty() {
            return Self::new(descriptors);
        }

        let mut violations = malformed;
        if let Err(error) = Self::new(descriptors) {
            violations.extend(
                error
                    .violations()
                    .iter()
                    .filter(|v| match v {
                        SchemaViolation::Empty => false,
                        SchemaViolation::InitialStateHasFields { .. } => !initial_malformed,
                        _ => true,
                    })
                    .cloned(),
            );
        }
        Err(DefinitionError::new(violations))
    }

    /// The state every lineage starts in.
    pub fn initial(&self) -> &StateDescriptor {
        &self.descriptors[0]
    }

    pub fn get(&self, name: &str) -> Option<&StateDescriptor> {
        self.descriptors.iter().find(|d| d.name() == name)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.descriptors.iter().position(|d| d.name() == name)
    }

    pub(crate) fn at(&self, index: usize) -> &StateDescriptor {
        &self.descriptors[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(StateDescriptor::name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StateDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Always `false`; an empty set is rejected during validation.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl TryFrom<Vec<StateDescriptor>> for StateSet {
    type Error = DefinitionError;

    fn try_from(descriptors: Vec<StateDescriptor>) -> Result<Self, Self::Error> {
        Self::new(descriptors)
    }
}

impl From<StateSet> for Vec<StateDescriptor> {
    fn from(states: StateSet) -> Self {
        states.descriptors
    }
}

impl<'a> IntoIterator for &'a StateSet {
    type Item = &'a StateDescriptor;
    type IntoIter = std::slice::Iter<'a, StateDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

/// Whether `ident` survives a `Display` / `parse` round trip unchanged.
fn is_well_formed(ident: &str) -> bool {
    ident.trim() == ident && !ident.contains(['<', '>', ','])
}

fn check(ok: bool, violation: impl FnOnce() -> SchemaViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Run every schema check, accumulating ALL violations.
fn validate(descriptors: &[StateDescriptor]) -> Validation<(), NonEmptyVec<SchemaViolation>> {
    let Some(initial) = descriptors.first() else {
        return Validation::fail(SchemaViolation::Empty);
    };

    let mut checks: Vec<Check> = vec![check(!initial.has_data(), || {
        SchemaViolation::InitialStateHasFields {
            name: initial.name().to_string(),
            fields: initial.fields().to_vec(),
        }
    })];

    let mut seen_states = HashSet::new();
    for descriptor in descriptors {
        let name = descriptor.name();

        checks.push(check(!name.is_empty(), || SchemaViolation::EmptyName));
        checks.push(check(is_well_formed(name), || SchemaViolation::IllegalName {
            name: name.to_string(),
        }));
        checks.push(check(name.is_empty() || seen_states.insert(name), || {
            SchemaViolation::DuplicateState {
                name: name.to_string(),
            }
        }));

        let mut seen_fields = HashSet::new();
        for field in descriptor.fields() {
            if field.is_empty() {
                checks.push(Validation::fail(SchemaViolation::EmptyFieldName {
                    state: name.to_string(),
                }));
                continue;
            }
            checks.push(check(is_well_formed(field), || {
                SchemaViolation::IllegalFieldName {
                    state: name.to_string(),
                    field: field.clone(),
                }
            }));
            checks.push(check(seen_fields.insert(field.as_str()), || {
                SchemaViolation::DuplicateField {
                    state: name.to_string(),
                    field: field.clone(),
                }
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

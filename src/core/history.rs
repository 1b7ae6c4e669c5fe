//! Transition history carried along a container lineage.
//!
//! History is immutable: recording returns a new history and leaves the
//! original untouched, so an older container keeps the trail it was built with.
//! A bounded history keeps only its most recent transitions, which keeps the
//! cost of recording independent of the lineage length.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single move between two named states.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// When the transition happened
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now(),
        }
    }

    /// Whether the transition re-entered the state it left.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use possible_states::core::{StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::new("idle", "loading"))
///     .record(StateTransition::new("loading", "loaded"));
///
/// assert_eq!(history.get_path(), ["idle", "loading", "loaded"]);
///
/// let bounded = StateHistory::bounded(1)
///     .record(StateTransition::new("idle", "loading"))
///     .record(StateTransition::new("loading", "loaded"));
///
/// assert_eq!(bounded.get_path(), ["loading", "loaded"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: Vec<StateTransition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    capacity: Option<usize>,
}

impl StateHistory {
    /// Unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            capacity: None,
        }
    }

    /// History that keeps at most `capacity` of the latest transitions.
    pub fn bounded(capacity: usize) -> Self {
        Self {
            transitions: Vec::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Record a transition, returning a new history.
    ///
    /// A bounded history drops its oldest transitions to make room.
    pub fn record(&self, transition: StateTransition) -> Self {
        let kept = match self.capacity {
            Some(0) => return self.clone(),
            Some(capacity) => {
                let start = self.transitions.len().saturating_sub(capacity - 1);
                &self.transitions[start..]
            }
            None => &self.transitions[..],
        };

        let mut transitions = Vec::with_capacity(kept.len() + 1);
        transitions.extend_from_slice(kept);
        transitions.push(transition);
        Self {
            transitions,
            capacity: self.capacity,
        }
    }

    /// Names of the states traversed: the first source, then every target.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(first.from.as_str());
        }
        path.extend(self.transitions.iter().map(|t| t.to.as_str()));
        path
    }

    /// Time between the first and the last transition.
    ///
    /// Returns `None` when nothing has been recorded.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn transitions(&self) -> &[StateTransition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_is_empty() {
        let history = StateHistory::new();

        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(StateTransition::new("a", "b"));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn bounded_history_keeps_latest_transitions() {
        let history = ["b", "c", "d", "e"]
            .windows(2)
            .fold(StateHistory::bounded(2), |history, pair| {
                history.record(StateTransition::new(pair[0], pair[1]))
            });

        assert_eq!(history.len(), 2);
        assert_eq!(history.capacity(), Some(2));
        assert_eq!(history.get_path(), ["c", "d", "e"]);
    }

    #[test]
    fn zero_capacity_history_records_nothing() {
        let history = StateHistory::bounded(0).record(StateTransition::new("a", "b"));

        assert!(history.is_empty());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(StateTransition::new("a", "b"))
            .record(StateTransition::new("b", "c"));

        assert_eq!(history.get_path(), ["a", "b", "c"]);
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let start = Utc::now();
        let history = StateHistory::new().record(StateTransition {
            from: "a".to_string(),
            to: "b".to_string(),
            timestamp: start,
        });

        let history = history.record(StateTransition {
            from: "b".to_string(),
            to: "c".to_string(),
            timestamp: start + chrono::Duration::milliseconds(25),
        });

        assert_eq!(history.duration(), Some(Duration::from_millis(25)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(StateTransition::new("a", "b"));

        assert_eq!(history.duration(), Some(Duration::ZERO));
    }

    #[test]
    fn reentry_is_detected() {
        assert!(StateTransition::new("a", "a").is_reentry());
        assert!(!StateTransition::new("a", "b").is_reentry());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(StateTransition::new("a", "b"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }

    #[test]
    fn bounded_history_keeps_capacity_through_serde() {
        let history = StateHistory::bounded(3).record(StateTransition::new("a", "b"));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.capacity(), Some(3));
        assert_eq!(history, deserialized);
    }
}

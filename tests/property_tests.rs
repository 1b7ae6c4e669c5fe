//! Property-based tests for the state container.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated schemas and transitions.

use possible_states::core::{Clauses, SchemaViolation};
use possible_states::{define, Container, StateError, StatesBuilder};
use proptest::prelude::*;

prop_compose! {
    /// A valid schema: unique state names, the first without fields,
    /// the rest with 0..4 unique fields each.
    fn arbitrary_schema()(count in 1..6usize)
        (arities in prop::collection::vec(0..4usize, count)) -> Vec<(String, Vec<String>)> {
        arities
            .iter()
            .enumerate()
            .map(|(i, &arity)| {
                let arity = if i == 0 { 0 } else { arity };
                let fields = (0..arity).map(|f| format!("f{f}")).collect();
                (format!("s{i}"), fields)
            })
            .collect()
    }
}

fn definitions(schema: &[(String, Vec<String>)]) -> Vec<String> {
    schema
        .iter()
        .map(|(name, fields)| {
            if fields.is_empty() {
                name.clone()
            } else {
                format!("{}<{}>", name, fields.join(", "))
            }
        })
        .collect()
}

fn container(schema: &[(String, Vec<String>)]) -> Container<usize> {
    define(definitions(schema)).unwrap()
}

proptest! {
    #[test]
    fn valid_schema_starts_in_first_state(schema in arbitrary_schema()) {
        let ui = container(&schema);

        prop_assert_eq!(ui.current(), schema[0].0.as_str());
        prop_assert!(ui.data().is_empty());
    }

    #[test]
    fn string_and_builder_definitions_agree(schema in arbitrary_schema()) {
        let built = schema
            .iter()
            .fold(StatesBuilder::new(), |builder, (name, fields)| {
                builder.state_with(name.clone(), fields.clone())
            })
            .build_states()
            .unwrap();
        let parsed = container(&schema);

        prop_assert_eq!(&built, &**parsed.states());
    }

    #[test]
    fn initial_state_with_fields_is_rejected(fields in prop::collection::vec("[a-z]{1,6}", 1..4)) {
        let definition = format!("start<{}>", fields.join(", "));
        let error = define::<usize, _, _>([definition]).unwrap_err();

        let rejected_initial = error
            .violations()
            .iter()
            .any(|v| matches!(v, SchemaViolation::InitialStateHasFields { .. }));
        prop_assert!(rejected_initial);
    }

    #[test]
    fn transition_binds_arguments_in_order(
        schema in arbitrary_schema(),
        target in any::<prop::sample::Index>(),
    ) {
        let ui = container(&schema);
        let (name, fields) = &schema[target.index(schema.len())];
        let args: Vec<usize> = (0..fields.len()).map(|i| i * 7).collect();

        let next = ui.transition_to(name, args.clone()).unwrap();

        prop_assert_eq!(next.current(), name.as_str());
        let data = next.data();
        let bound: Vec<(&str, &usize)> = data.iter().collect();
        let expected: Vec<(&str, &usize)> =
            fields.iter().map(String::as_str).zip(args.iter()).collect();
        prop_assert_eq!(bound, expected);
    }

    #[test]
    fn wrong_arity_is_rejected(
        schema in arbitrary_schema(),
        target in any::<prop::sample::Index>(),
        extra in 1..3usize,
    ) {
        let ui = container(&schema);
        let (name, fields) = &schema[target.index(schema.len())];
        let args = vec![0usize; fields.len() + extra];

        let result = ui.transition_to(name, args);
        prop_assert_eq!(
            result.unwrap_err(),
            StateError::Arity {
                state: name.clone(),
                expected: fields.len(),
                received: fields.len() + extra,
            }
        );
    }

    #[test]
    fn too_few_arguments_are_rejected(
        schema in arbitrary_schema(),
        target in any::<prop::sample::Index>(),
    ) {
        let (name, fields) = &schema[target.index(schema.len())];
        prop_assume!(!fields.is_empty());
        let ui = container(&schema);

        let result = ui.transition_to(name, vec![0usize; fields.len() - 1]);
        prop_assert_eq!(
            result.unwrap_err(),
            StateError::Arity {
                state: name.clone(),
                expected: fields.len(),
                received: fields.len() - 1,
            }
        );
    }

    #[test]
    fn transitions_never_mutate_the_source(
        schema in arbitrary_schema(),
        path in prop::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let origin = container(&schema).with_history(path.len());
        let mut ui = origin.clone();

        for step in &path {
            let (name, fields) = &schema[step.index(schema.len())];
            let before = ui.current().to_string();
            let next = ui.transition_to(name, vec![1usize; fields.len()]).unwrap();

            prop_assert_eq!(ui.current(), before.as_str());
            prop_assert_eq!(
                next.history().map(|h| h.len()),
                ui.history().map(|h| h.len() + 1)
            );
            ui = next;
        }

        prop_assert_eq!(origin.current(), schema[0].0.as_str());
        prop_assert!(origin.history().is_some_and(|h| h.is_empty()));
        prop_assert_eq!(ui.history().map(|h| h.get_path().len()), Some(path.len() + 1));
    }

    #[test]
    fn history_never_exceeds_its_capacity(
        schema in arbitrary_schema(),
        capacity in 0..6usize,
        path in prop::collection::vec(any::<prop::sample::Index>(), 0..24),
    ) {
        let mut ui = container(&schema).with_history(capacity);

        for step in &path {
            let (name, fields) = &schema[step.index(schema.len())];
            ui = ui.transition_to(name, vec![1usize; fields.len()]).unwrap();
        }

        prop_assert_eq!(ui.history().map(|h| h.len()), Some(path.len().min(capacity)));
    }

    #[test]
    fn exhaustive_case_of_invokes_only_the_active_clause(
        schema in arbitrary_schema(),
        target in any::<prop::sample::Index>(),
    ) {
        let (name, fields) = &schema[target.index(schema.len())];
        let ui = container(&schema)
            .transition_to(name, vec![0usize; fields.len()])
            .unwrap();

        let clauses = schema.iter().fold(Clauses::new(), |clauses, (state, _)| {
            let state = state.clone();
            clauses.on(state.clone(), move |_| state)
        });

        prop_assert_eq!(ui.case_of(clauses).unwrap(), name.clone());
    }

    #[test]
    fn case_of_without_coverage_or_wildcard_fails(
        schema in arbitrary_schema(),
        skipped in any::<prop::sample::Index>(),
    ) {
        let skipped = &schema[skipped.index(schema.len())].0;
        let ui = container(&schema);

        let partial = schema
            .iter()
            .filter(|(state, _)| state != skipped)
            .fold(Clauses::new(), |clauses, (state, _)| clauses.on(state.clone(), |_| ()));
        prop_assert_eq!(
            ui.case_of(partial),
            Err(StateError::NonExhaustive { missing: vec![skipped.clone()] })
        );

        let with_wildcard = schema
            .iter()
            .filter(|(state, _)| state != skipped)
            .fold(Clauses::new(), |clauses, (state, _)| clauses.on(state.clone(), |_| false))
            .otherwise(|_| true);
        prop_assert_eq!(ui.case_of(with_wildcard), Ok(ui.current() == skipped));
    }

    #[test]
    fn when_fires_only_for_the_active_state(
        schema in arbitrary_schema(),
        queried in any::<prop::sample::Index>(),
    ) {
        let ui = container(&schema);
        let (name, _) = &schema[queried.index(schema.len())];

        let result = ui.when(name, |_| name.clone()).unwrap();
        if ui.current() == name {
            prop_assert_eq!(result, Some(name.clone()));
        } else {
            prop_assert_eq!(result, None);
        }
    }
}

#[test]
fn concrete_transition_scenario() {
    let ui: Container<()> = define(["a", "b", "c"]).unwrap().with_history(10);
    assert_eq!(ui.current(), "a");

    let b = ui.to("b").unwrap();
    assert_eq!(b.current(), "b");

    let back = b.to("a").unwrap();
    assert_eq!(back.current(), "a");
    assert_eq!(back.history().unwrap().len(), 2);
    assert!(ui.history().unwrap().is_empty());
}

#[test]
fn concrete_data_scenario() {
    let ui: Container<&str> = define(["a", "b<first,second>"]).unwrap();

    let b = ui.transition_to("b", ["foo", "bar"]).unwrap();
    assert_eq!(
        serde_json::to_value(b.data()).unwrap(),
        serde_json::json!({"first": "foo", "second": "bar"})
    );

    assert!(matches!(
        ui.transition_to("b", ["foo"]),
        Err(StateError::Arity { .. })
    ));
}

#[test]
fn concrete_case_of_scenario() {
    let ui: Container<()> = define(["a", "b"]).unwrap();

    assert_eq!(ui.case_of(Clauses::new().on("a", |_| 1).on("b", |_| 2)), Ok(1));
    assert!(matches!(
        ui.case_of(Clauses::new().on("a", |_| 1)),
        Err(StateError::NonExhaustive { .. })
    ));
}

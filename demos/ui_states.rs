//! UI States
//!
//! This example models a search box that is idle, loading, showing results
//! or showing an error, and renders each state with the projectors.
//!
//! Key concepts:
//! - Declaring states with `name<fields>` definitions
//! - Immutable transitions
//! - Exhaustive matching with a compile-time checked enum and a runtime
//!   checked container
//! - Rendering with `When` and `CaseOf`
//!
//! Run with: cargo run --example ui_states

use possible_states::core::{Clauses, Data};
use possible_states::render::{CaseOf, Projection, When};
use possible_states::{define, possible_states, Container};

possible_states! {
    enum Connection {
        Offline,
        Online { latency_ms: u32 },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== UI States Example ===\n");

    let search: Container<String> =
        define(["idle", "loading<query>", "results<query, count>", "failed<reason>"])
            .expect("search states are valid");

    let view = CaseOf::new()
        .slot("idle", "<input placeholder=\"Search\">".to_string())
        .scoped("loading", |data: &Data<String>| {
            format!("<spinner>{}</spinner>", data.get("query").cloned().unwrap_or_default())
        })
        .scoped("results", |data: &Data<String>| {
            format!(
                "<p>{} results for {}</p>",
                data.get("count").cloned().unwrap_or_default(),
                data.get("query").cloned().unwrap_or_default()
            )
        })
        .default_slot("<p>Something went wrong</p>".to_string());

    let error_banner = When::of("failed").scoped(|data: &Data<String>| {
        format!("<banner>{}</banner>", data.get("reason").cloned().unwrap_or_default())
    });

    let steps = [
        search.clone(),
        search
            .transition_to("loading", ["rust".to_string()])
            .expect("loading takes a query"),
        search
            .transition_to("results", ["rust".to_string(), "42".to_string()])
            .expect("results take a query and a count"),
        search
            .transition_to("failed", ["timeout".to_string()])
            .expect("failed takes a reason"),
    ];

    for state in &steps {
        println!("state: {}", state.current());
        println!("  view:   {}", view.render(state).unwrap_or_default());
        if let Some(banner) = error_banner.render(state) {
            println!("  banner: {banner}");
        }

        let busy = state
            .case_of(
                Clauses::new()
                    .on("loading", |_| true)
                    .otherwise(|_| false),
            )
            .expect("wildcard covers every state");
        println!("  busy:   {busy}");
    }

    match search.transition_to("results", ["rust".to_string()]) {
        Ok(_) => println!("\nunexpected success"),
        Err(error) => println!("\nrejected: {error}"),
    }

    let indicator = When::of("Offline").slot("<red-dot>");
    for connection in [Connection::Offline, Connection::Online { latency_ms: 18 }] {
        let status = match &connection {
            Connection::Offline => "offline".to_string(),
            Connection::Online { latency_ms } => format!("online ({latency_ms} ms)"),
        };
        println!("\nconnection: {} -> {status}", connection.current());
        println!(
            "indicator: {}",
            indicator.render(&connection).unwrap_or("<green-dot>")
        );
    }

    println!("\n=== Example Complete ===");
}

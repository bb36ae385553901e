//! Keypad Session
//!
//! This example drives the calculator the way a front end would: map button
//! labels to keys, press them, and render from snapshots.
//!
//! Key concepts:
//! - Button labels resolve to `Key`s
//! - The engine is the only owner of calculator state
//! - Rendering reads `Snapshot`s and formats at the edge
//!
//! Run with: RUST_LOG=abacus=trace cargo run --example keypad_session

use abacus::engine::{Calculator, Key};
use abacus::snapshot::Snapshot;
use tracing_subscriber::EnvFilter;

fn render(label: &str, snapshot: &Snapshot) {
    println!(
        "  [{label:>3}]  {:>24}  | {:<20} {}",
        snapshot.display_input(),
        snapshot.pending_operand,
        snapshot.phase_name(),
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Keypad Session ===\n");

    let mut calculator = Calculator::new();
    let session = [
        "1", "2", "0", "0", "×", "3", "=", "-", "6", "0", "0", "=", "÷", "0", "=", "AC", "5",
        "0", "%", "+/-", "+", "1", "=",
    ];

    for label in session {
        let Some(key) = Key::from_label(label) else {
            println!("  unknown key {label}");
            continue;
        };
        calculator.press(key);
        render(label, &calculator.snapshot());
    }

    println!("\nHistory (newest first):");
    for entry in calculator.history().entries() {
        println!("  {} = {}", entry.expression, entry.display_result());
    }

    match calculator.snapshot().to_json_pretty() {
        Ok(json) => println!("\nFinal snapshot:\n{json}"),
        Err(err) => eprintln!("snapshot failed: {err}"),
    }

    println!("\n=== Example Complete ===");
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `taskpad_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use taskpad_core::{MemoryAdapter, TaskStore};

fn main() {
    let (store, outcome) = TaskStore::open(MemoryAdapter::new(), "tasks");
    println!("taskpad_core version={}", taskpad_core::core_version());
    println!(
        "taskpad_core seed tasks={} outcome={:?}",
        store.len(),
        outcome
    );
    for task in store.sorted_view() {
        println!(
            "  [{}] {:?} {}",
            if task.done { "x" } else { " " },
            task.priority,
            task.description
        );
    }
}

//! Task-list state machine.
//!
//! # Responsibility
//! - Own the canonical task sequence and orchestrate persistence writes.
//! - Keep mutation entry points and their error taxonomy in one place.
//!
//! # Invariants
//! - In-memory state is the read-of-record; persistence is a shadow copy.
//! - Every successful mutation triggers exactly one save of the full list.

pub mod task_store;

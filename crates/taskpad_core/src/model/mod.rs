//! Domain model for the task list.
//!
//! # Responsibility
//! - Define the canonical task record shared by store and persistence.
//! - Keep the priority-to-rank mapping in one place.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId` that is never reused.
//! - Priority rank is a derived weight used only for display ordering.

pub mod task;

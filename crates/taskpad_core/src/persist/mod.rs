//! Persistence capability contract and reference backends.
//!
//! # Responsibility
//! - Define the narrow load/save capability the store depends on.
//! - Encode/decode the canonical persisted task-list shape.
//! - Ship an in-memory and a file-backed reference implementation.
//!
//! # Invariants
//! - The persisted value is a JSON array; array order carries insertion
//!   order.
//! - Decoding rejects invalid persisted state instead of masking it.
//! - "Not found" is an absent value, never a failure.

pub mod adapter;
pub mod codec;
pub mod file;
pub mod memory;

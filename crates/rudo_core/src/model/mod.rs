//! Domain model for todo lists and their tasks.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//! - Validate user-supplied values before they reach persistence.
//!
//! # Invariants
//! - A `ListName` value is always safe to use as a storage namespace key.
//! - Task ids are assigned by storage and are never reused within a list.

pub mod list_name;
pub mod task;

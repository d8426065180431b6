//! Interactive console front-end for RuDo List.
//!
//! # Responsibility
//! - Sequence the two-level menu state machine (main menu, task menu).
//! - Translate user choices into storage-engine calls.
//!
//! Session and state machinery are exposed as a library so tests can drive
//! complete sessions over in-memory buffers instead of the console.

pub mod selection;
pub mod session;
pub mod state;

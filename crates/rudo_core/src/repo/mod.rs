//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for lists and tasks.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Only validated `ListName` values ever reach a structural SQL position.
//! - Task field values are always passed as bound parameters.
//! - Repository APIs return semantic errors (`ListNotFound`) in addition to
//!   DB transport errors.

pub mod list_repo;

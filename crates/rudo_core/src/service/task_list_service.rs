//! Todo list use-case service.
//!
//! # Responsibility
//! - Provide stable list/task entry points for interactive callers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository validation/persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::list_name::ListName;
use crate::model::task::Task;
use crate::repo::list_repo::{ListRepository, RepoResult};

/// Use-case service wrapper for list and task operations.
pub struct TaskListService<R: ListRepository> {
    repo: R,
}

impl<R: ListRepository> TaskListService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Ensures a list with this name exists. Idempotent.
    pub fn create_list(&self, name: &ListName) -> RepoResult<()> {
        self.repo.create_list(name)
    }

    /// Returns every existing list name, sorted ascending.
    pub fn list_names(&self) -> RepoResult<Vec<ListName>> {
        self.repo.list_names()
    }

    /// Returns whether a list with this name currently exists.
    pub fn list_exists(&self, name: &ListName) -> RepoResult<bool> {
        self.repo.list_exists(name)
    }

    /// Removes the list and all its tasks. Returns whether it existed.
    pub fn drop_list(&self, name: &ListName) -> RepoResult<bool> {
        self.repo.drop_list(name)
    }

    /// Appends a task and returns the assigned id.
    pub fn add_task(&self, name: &ListName, text: &str) -> RepoResult<i64> {
        self.repo.add_task(name, text)
    }

    /// Marks a task as completed. Returns whether the id existed.
    pub fn complete_task(&self, name: &ListName, id: i64) -> RepoResult<bool> {
        self.repo.complete_task(name, id)
    }

    /// Deletes a task. Returns whether the id existed.
    pub fn delete_task(&self, name: &ListName, id: i64) -> RepoResult<bool> {
        self.repo.delete_task(name, id)
    }

    /// Returns all tasks in the list, ordered by ascending id.
    pub fn fetch_tasks(&self, name: &ListName) -> RepoResult<Vec<Task>> {
        self.repo.fetch_tasks(name)
    }
}

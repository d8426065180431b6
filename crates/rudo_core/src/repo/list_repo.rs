//! Todo list repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable list/task CRUD APIs over the todo store.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - One SQLite table per list, named `list_<name>`; the prefix separates
//!   user namespaces from engine-internal tables such as `sqlite_sequence`.
//! - Task ids come from `AUTOINCREMENT` and are never reused within a
//!   list's lifetime. Dropping a table clears its sequence, so a recreated
//!   list numbers from 1 again.

use crate::db::DbError;
use crate::model::list_name::ListName;
use crate::model::task::{normalize_task_text, Task, TaskValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const LIST_TABLE_PREFIX: &str = "list_";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for list/task persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(TaskValidationError),
    Db(DbError),
    ListNotFound(ListName),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::ListNotFound(name) => write!(f, "todo list not found: {name}"),
            Self::InvalidData(message) => write!(f, "invalid persisted task data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::ListNotFound(_) => None,
            Self::InvalidData(_) => None,
        }
    }
}

impl From<TaskValidationError> for RepoError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for list and task operations.
pub trait ListRepository {
    /// Ensures a namespace for `name` exists; succeeds whether or not it
    /// already existed.
    fn create_list(&self, name: &ListName) -> RepoResult<()>;

    /// Returns every existing list name, sorted ascending.
    fn list_names(&self) -> RepoResult<Vec<ListName>>;

    /// Returns whether a list with this name currently exists.
    fn list_exists(&self, name: &ListName) -> RepoResult<bool>;

    /// Removes the list and all tasks in it. Returns whether the list
    /// existed; a missing list is not an error.
    fn drop_list(&self, name: &ListName) -> RepoResult<bool>;

    /// Appends a task with `completed=false` and returns the assigned id.
    fn add_task(&self, name: &ListName, text: &str) -> RepoResult<i64>;

    /// Marks the task as completed. Returns whether a matching row existed.
    fn complete_task(&self, name: &ListName, id: i64) -> RepoResult<bool>;

    /// Removes the task. Returns whether a matching row existed.
    fn delete_task(&self, name: &ListName, id: i64) -> RepoResult<bool>;

    /// Returns all tasks in the list, ordered by ascending id.
    fn fetch_tasks(&self, name: &ListName) -> RepoResult<Vec<Task>>;
}

/// SQLite-backed list repository.
pub struct SqliteListRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteListRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn require_list(&self, name: &ListName) -> RepoResult<()> {
        if self.list_exists(name)? {
            Ok(())
        } else {
            Err(RepoError::ListNotFound(name.clone()))
        }
    }
}

impl ListRepository for SqliteListRepository<'_> {
    fn create_list(&self, name: &ListName) -> RepoResult<()> {
        self.conn.execute_batch(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                task TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            );",
            table_ident(name)
        ))?;
        Ok(())
    }

    fn list_names(&self) -> RepoResult<Vec<ListName>> {
        let mut stmt = self.conn.prepare(
            r"SELECT name FROM sqlite_master
              WHERE type = 'table' AND name LIKE 'list\_%' ESCAPE '\'
              ORDER BY name ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut names = Vec::new();
        while let Some(row) = rows.next()? {
            let table: String = row.get(0)?;
            if let Some(raw) = table.strip_prefix(LIST_TABLE_PREFIX) {
                // Tables the engine did not create through `ListName` are
                // not lists; skip them instead of failing enumeration.
                if let Ok(name) = ListName::parse(raw) {
                    names.push(name);
                }
            }
        }

        Ok(names)
    }

    fn list_exists(&self, name: &ListName) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table_name(name)],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn drop_list(&self, name: &ListName) -> RepoResult<bool> {
        let existed = self.list_exists(name)?;
        self.conn
            .execute_batch(&format!("DROP TABLE IF EXISTS {};", table_ident(name)))?;
        Ok(existed)
    }

    fn add_task(&self, name: &ListName, text: &str) -> RepoResult<i64> {
        let text = normalize_task_text(text)?;
        self.require_list(name)?;

        self.conn.execute(
            &format!("INSERT INTO {} (task) VALUES (?1);", table_ident(name)),
            params![text],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn complete_task(&self, name: &ListName, id: i64) -> RepoResult<bool> {
        self.require_list(name)?;

        let changed = self.conn.execute(
            &format!(
                "UPDATE {} SET completed = 1 WHERE id = ?1;",
                table_ident(name)
            ),
            params![id],
        )?;

        Ok(changed > 0)
    }

    fn delete_task(&self, name: &ListName, id: i64) -> RepoResult<bool> {
        self.require_list(name)?;

        let changed = self.conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", table_ident(name)),
            params![id],
        )?;

        Ok(changed > 0)
    }

    fn fetch_tasks(&self, name: &ListName) -> RepoResult<Vec<Task>> {
        self.require_list(name)?;

        let mut stmt = self.conn.prepare(&format!(
            "SELECT id, task, completed FROM {} ORDER BY id ASC;",
            table_ident(name)
        ))?;

        let mut rows = stmt.query([])?;
        let mut tasks = Vec::new();
        while let Some(row) = rows.next()? {
            tasks.push(parse_task_row(row)?);
        }

        Ok(tasks)
    }
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let completed = match row.get::<_, i64>("completed")? {
        0 => false,
        1 => true,
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid completed value `{other}` in task row"
            )));
        }
    };

    Ok(Task {
        id: row.get("id")?,
        text: row.get("task")?,
        completed,
    })
}

fn table_name(name: &ListName) -> String {
    format!("{LIST_TABLE_PREFIX}{}", name.as_str())
}

/// Quoted identifier for structural SQL positions. Only validated
/// `ListName` values reach this point.
fn table_ident(name: &ListName) -> String {
    format!("\"{}\"", table_name(name))
}

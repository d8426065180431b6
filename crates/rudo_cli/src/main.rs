//! Process entry point for the `rudo` binary.
//!
//! # Responsibility
//! - Wire logging, the todo store connection, and the menu session together.
//! - Release the store handle on every exit path.

use log::error;
use rudo_cli::session::{MenuSession, SessionError};
use rudo_core::db::open_db;
use rudo_core::logging::{default_log_level, init_logging};
use rudo_core::repo::list_repo::SqliteListRepository;
use rudo_core::service::task_list_service::TaskListService;
use rusqlite::Connection;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use std::process::ExitCode;

const DEFAULT_DB_FILE: &str = "todo.db";
const DB_PATH_ENV: &str = "RUDO_DB";
const LOG_DIR_NAME: &str = "logs";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("rudo: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    setup_logging();

    let db_path = std::env::var_os(DB_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE));

    let conn = open_db(&db_path)
        .map_err(|err| format!("failed to open todo store `{}`: {err}", db_path.display()))?;

    // The session only borrows the connection; the scope guarantees the
    // borrow ends before the handle is released below.
    let outcome = {
        let service = TaskListService::new(SqliteListRepository::new(&conn));
        let stdin = stdin();
        let stdout = stdout();
        let mut session = MenuSession::new(service, stdin.lock(), stdout.lock());
        session.run()
    };

    release(conn);

    match outcome {
        Ok(()) => Ok(()),
        // Piped input ran out without an explicit exit; nothing left to do.
        Err(SessionError::InputClosed) => Ok(()),
        Err(err) => Err(format!("session aborted: {err}")),
    }
}

fn setup_logging() {
    let log_dir = match std::env::current_dir() {
        Ok(dir) => dir.join(LOG_DIR_NAME),
        Err(err) => {
            eprintln!("rudo: logging disabled: cannot resolve working directory: {err}");
            return;
        }
    };

    match log_dir.to_str() {
        Some(dir) => {
            if let Err(message) = init_logging(default_log_level(), dir) {
                eprintln!("rudo: logging disabled: {message}");
            }
        }
        None => eprintln!("rudo: logging disabled: log directory path is not valid UTF-8"),
    }
}

/// Flushes and closes the store handle; failure is reported but does not
/// change the exit path.
fn release(conn: Connection) {
    if let Err((_conn, err)) = conn.close() {
        error!("event=db_close module=cli status=error error={err}");
        eprintln!("rudo: failed to close todo store cleanly: {err}");
    }
}

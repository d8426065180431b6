//! Menu session loop over generic console streams.
//!
//! # Responsibility
//! - Render prompts, read responses, and dispatch menu actions to the
//!   storage service.
//! - Recover locally from input-format, invalid-selection, and not-found
//!   conditions; surface storage faults as session-fatal errors.
//!
//! # Invariants
//! - Recoverable input errors never mutate storage.
//! - Success messages print only after the mutation has been committed.
//! - Exactly one task action runs per task-menu visit.

use crate::selection::{parse_task_id, MainSelection, SelectionError, TaskSelection};
use crate::state::{next_transition, MenuEvent, MenuState, Transition};
use log::{error, info};
use rudo_core::{ListName, ListRepository, RepoError, TaskListService};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

const WELCOME: &str = "Welcome to RuDo List!";
const CONTINUE_PROMPT: &str = "Would you like to continue? (y/n): ";
const FAREWELL: &str = "Thank you for using RuDo List! Goodbye!";
const INVALID_OPTION: &str = "Invalid option. Please try again.";
const INVALID_NUMBER: &str = "Invalid input. Please enter a number.";
const LIST_NOT_FOUND: &str = "Todo list not found. Please try again.";

/// Session-fatal error. Recoverable conditions are reported inline and never
/// surface here.
#[derive(Debug)]
pub enum SessionError {
    Io(std::io::Error),
    Storage(RepoError),
    /// The input stream ended before an explicit exit.
    InputClosed,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Storage(err) => write!(f, "storage fault: {err}"),
            Self::InputClosed => write!(f, "input stream closed"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for SessionError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Interactive menu session bound to a storage service and a pair of
/// console streams.
pub struct MenuSession<R: ListRepository, In: BufRead, Out: Write> {
    service: TaskListService<R>,
    input: In,
    output: Out,
}

impl<R: ListRepository, In: BufRead, Out: Write> MenuSession<R, In, Out> {
    pub fn new(service: TaskListService<R>, input: In, output: Out) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Runs the menu loop until the user declines the continue prompt.
    ///
    /// # Errors
    /// - `Io` / `InputClosed` on console stream failure.
    /// - `Storage` on an unrecoverable storage fault; the caller is
    ///   responsible for releasing the store handle afterwards.
    pub fn run(&mut self) -> Result<(), SessionError> {
        info!("event=session_start module=menu status=ok");

        let mut state = MenuState::Main;
        loop {
            let event = match state.clone() {
                MenuState::Main => self.main_menu_step()?,
                MenuState::Tasks(name) => self.task_menu_step(&name)?,
            };

            state = match next_transition(&state, event) {
                Transition::Redisplay(next) | Transition::Enter(next) => next,
                Transition::AskContinue => {
                    let answer = self.ask_continue()?;
                    match next_transition(&state, answer) {
                        Transition::Enter(next) => next,
                        _ => return self.finish(),
                    }
                }
                Transition::Exit => return self.finish(),
            };
        }
    }

    fn finish(&mut self) -> Result<(), SessionError> {
        writeln!(self.output, "{FAREWELL}")?;
        info!("event=session_end module=menu status=ok reason=user_exit");
        Ok(())
    }

    fn main_menu_step(&mut self) -> Result<MenuEvent, SessionError> {
        writeln!(self.output, "{WELCOME}")?;
        writeln!(self.output, "Please select an option:")?;
        writeln!(self.output, "1. Create New Todo List")?;
        writeln!(self.output, "2. Open Existing Todo List")?;
        writeln!(self.output, "3. List All Todo Lists")?;
        writeln!(self.output, "4. Delete Todo List")?;

        let line = self.prompt("What would you like to do? ")?;
        match MainSelection::parse(&line) {
            Ok(MainSelection::CreateList) => self.create_list(),
            Ok(MainSelection::OpenList) => self.open_list(),
            Ok(MainSelection::ListLists) => self.list_lists(),
            Ok(MainSelection::DeleteList) => self.delete_list(),
            Err(SelectionError::NotANumber) => {
                writeln!(self.output, "{INVALID_NUMBER}")?;
                Ok(MenuEvent::InputUnparsable)
            }
            Err(SelectionError::OutOfRange(_)) => {
                writeln!(self.output, "{INVALID_OPTION}")?;
                Ok(MenuEvent::InvalidOption)
            }
        }
    }

    fn task_menu_step(&mut self, name: &ListName) -> Result<MenuEvent, SessionError> {
        writeln!(self.output, "1. Add Task")?;
        writeln!(self.output, "2. Mark Task as Completed")?;
        writeln!(self.output, "3. Delete Task")?;
        writeln!(self.output, "4. List Tasks")?;

        let line = self.prompt("What would you like to do? ")?;
        match TaskSelection::parse(&line) {
            Ok(TaskSelection::AddTask) => self.add_task(name),
            Ok(TaskSelection::CompleteTask) => self.complete_task(name),
            Ok(TaskSelection::DeleteTask) => self.delete_task(name),
            Ok(TaskSelection::ListTasks) => self.list_tasks(name),
            Err(SelectionError::NotANumber) => {
                writeln!(self.output, "{INVALID_NUMBER}")?;
                Ok(MenuEvent::InputUnparsable)
            }
            Err(SelectionError::OutOfRange(_)) => {
                writeln!(self.output, "{INVALID_OPTION}")?;
                Ok(MenuEvent::InvalidOption)
            }
        }
    }

    fn create_list(&mut self) -> Result<MenuEvent, SessionError> {
        let raw = self.prompt("Please provide a name for your new todo list: ")?;
        let name = match ListName::parse(&raw) {
            Ok(name) => name,
            Err(err) => {
                writeln!(self.output, "Invalid list name: {err}.")?;
                return Ok(MenuEvent::ActionDone);
            }
        };

        match self.service.create_list(&name) {
            Ok(()) => {
                writeln!(self.output, "Todo list '{name}' created successfully.")?;
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.fatal(err),
        }
    }

    fn open_list(&mut self) -> Result<MenuEvent, SessionError> {
        let raw = self.prompt("Please select a todo list to open: ")?;
        let name = match ListName::parse(&raw) {
            // A name that fails validation cannot exist in storage.
            Ok(name) => name,
            Err(_) => {
                writeln!(self.output, "{LIST_NOT_FOUND}")?;
                return Ok(MenuEvent::ListNotFound);
            }
        };

        match self.service.list_exists(&name) {
            Ok(true) => {
                writeln!(self.output, "You've selected the following todo list: {name}")?;
                Ok(MenuEvent::ListOpened(name))
            }
            Ok(false) => {
                writeln!(self.output, "{LIST_NOT_FOUND}")?;
                Ok(MenuEvent::ListNotFound)
            }
            Err(err) => self.fatal(err),
        }
    }

    fn list_lists(&mut self) -> Result<MenuEvent, SessionError> {
        match self.service.list_names() {
            Ok(names) => {
                writeln!(self.output, "Available Todo Lists:")?;
                for name in names {
                    writeln!(self.output, "{name}")?;
                }
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.fatal(err),
        }
    }

    fn delete_list(&mut self) -> Result<MenuEvent, SessionError> {
        let raw = self.prompt("Please select a todo list to delete: ")?;
        let name = match ListName::parse(&raw) {
            Ok(name) => name,
            Err(_) => {
                writeln!(self.output, "{LIST_NOT_FOUND}")?;
                return Ok(MenuEvent::ActionDone);
            }
        };

        match self.service.drop_list(&name) {
            Ok(true) => {
                writeln!(self.output, "Todo list '{name}' deleted successfully.")?;
                Ok(MenuEvent::ActionDone)
            }
            Ok(false) => {
                writeln!(self.output, "{LIST_NOT_FOUND}")?;
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.fatal(err),
        }
    }

    fn add_task(&mut self, name: &ListName) -> Result<MenuEvent, SessionError> {
        let text = self.prompt("Please provide a task to add: ")?;

        match self.service.add_task(name, &text) {
            Ok(_id) => {
                writeln!(self.output, "Task '{}' added to '{name}'.", text.trim())?;
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.report_or_fail(err),
        }
    }

    fn complete_task(&mut self, name: &ListName) -> Result<MenuEvent, SessionError> {
        let raw = self.prompt("Please provide the ID of the task to mark as completed: ")?;
        let id = match parse_task_id(&raw) {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.output, "{INVALID_NUMBER}")?;
                return Ok(MenuEvent::InputUnparsable);
            }
        };

        match self.service.complete_task(name, id) {
            Ok(true) => {
                writeln!(self.output, "Task with ID '{id}' marked as completed.")?;
                Ok(MenuEvent::ActionDone)
            }
            Ok(false) => {
                writeln!(self.output, "No task with ID '{id}' in '{name}'.")?;
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.report_or_fail(err),
        }
    }

    fn delete_task(&mut self, name: &ListName) -> Result<MenuEvent, SessionError> {
        let raw = self.prompt("Please provide the ID of the task to delete: ")?;
        let id = match parse_task_id(&raw) {
            Ok(id) => id,
            Err(_) => {
                writeln!(self.output, "{INVALID_NUMBER}")?;
                return Ok(MenuEvent::InputUnparsable);
            }
        };

        match self.service.delete_task(name, id) {
            Ok(true) => {
                writeln!(self.output, "Task with ID '{id}' deleted from '{name}'.")?;
                Ok(MenuEvent::ActionDone)
            }
            Ok(false) => {
                writeln!(self.output, "No task with ID '{id}' in '{name}'.")?;
                Ok(MenuEvent::ActionDone)
            }
            Err(err) => self.report_or_fail(err),
        }
    }

    fn list_tasks(&mut self, name: &ListName) -> Result<MenuEvent, SessionError> {
        let tasks = match self.service.fetch_tasks(name) {
            Ok(tasks) => tasks,
            Err(err) => return self.report_or_fail(err),
        };

        if tasks.is_empty() {
            writeln!(self.output, "No tasks found in '{name}'.")?;
            return Ok(MenuEvent::ActionDone);
        }

        writeln!(self.output, "Tasks in '{name}':")?;
        for task in tasks {
            let status = if task.completed {
                "Completed"
            } else {
                "Not Completed"
            };
            writeln!(self.output, "{}: {} - {status}", task.id, task.text)?;
        }
        Ok(MenuEvent::ActionDone)
    }

    fn ask_continue(&mut self) -> Result<MenuEvent, SessionError> {
        let answer = self.prompt(CONTINUE_PROMPT)?;
        if answer.trim().eq_ignore_ascii_case("y") {
            Ok(MenuEvent::ContinueAccepted)
        } else {
            Ok(MenuEvent::ContinueDeclined)
        }
    }

    /// Reports recoverable storage outcomes inline; anything else is fatal.
    fn report_or_fail(&mut self, err: RepoError) -> Result<MenuEvent, SessionError> {
        match err {
            RepoError::ListNotFound(_) => {
                writeln!(self.output, "{LIST_NOT_FOUND}")?;
                Ok(MenuEvent::ActionDone)
            }
            RepoError::Validation(_) => {
                writeln!(self.output, "Task text cannot be empty. Please try again.")?;
                Ok(MenuEvent::ActionDone)
            }
            other => self.fatal(other),
        }
    }

    fn fatal(&mut self, err: RepoError) -> Result<MenuEvent, SessionError> {
        error!("event=storage_fault module=menu status=error error={err}");
        Err(SessionError::Storage(err))
    }

    fn prompt(&mut self, text: &str) -> Result<String, SessionError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        let bytes = self.input.read_line(&mut line)?;
        if bytes == 0 {
            return Err(SessionError::InputClosed);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(line)
    }
}

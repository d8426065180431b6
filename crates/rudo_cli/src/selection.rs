//! Numeric menu selection parsing.
//!
//! # Responsibility
//! - Map raw prompt input onto the enumerated menu options.
//! - Distinguish unparsable input from out-of-range selections, since the
//!   menus recover from the two differently.

/// Main menu options, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainSelection {
    CreateList,
    OpenList,
    ListLists,
    DeleteList,
}

/// Task menu options, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskSelection {
    AddTask,
    CompleteTask,
    DeleteTask,
    ListTasks,
}

/// Rejection reasons for a numeric selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// Input does not parse as an integer.
    NotANumber,
    /// Input is an integer outside the enumerated option range.
    OutOfRange(i64),
}

impl MainSelection {
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let number = parse_number(input)?;
        match number {
            1 => Ok(Self::CreateList),
            2 => Ok(Self::OpenList),
            3 => Ok(Self::ListLists),
            4 => Ok(Self::DeleteList),
            other => Err(SelectionError::OutOfRange(other)),
        }
    }
}

impl TaskSelection {
    pub fn parse(input: &str) -> Result<Self, SelectionError> {
        let number = parse_number(input)?;
        match number {
            1 => Ok(Self::AddTask),
            2 => Ok(Self::CompleteTask),
            3 => Ok(Self::DeleteTask),
            4 => Ok(Self::ListTasks),
            other => Err(SelectionError::OutOfRange(other)),
        }
    }
}

/// Parses a task id from prompt input.
pub fn parse_task_id(input: &str) -> Result<i64, SelectionError> {
    parse_number(input)
}

fn parse_number(input: &str) -> Result<i64, SelectionError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| SelectionError::NotANumber)
}

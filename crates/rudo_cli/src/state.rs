//! Menu state machine.
//!
//! # Responsibility
//! - Define the two menu states and the transitions between them as a pure
//!   function, independent of console I/O.
//!
//! # Invariants
//! - The task menu is a single bounded sub-interaction: every task-menu
//!   outcome routes through the continue prompt back toward the main menu.
//! - Declining the continue prompt is the only ordinary exit.

use rudo_core::ListName;

/// Where the session currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuState {
    /// Top-level list operations.
    Main,
    /// Task operations on the currently open list.
    Tasks(ListName),
}

/// What happened during one menu interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    /// Selection input did not parse as a number.
    InputUnparsable,
    /// Selection was numeric but outside the option range.
    InvalidOption,
    /// An action ran to completion (including reported recoverable errors).
    ActionDone,
    /// The named list does not exist, blocking the open.
    ListNotFound,
    /// An existing list was opened.
    ListOpened(ListName),
    /// The user answered the continue prompt affirmatively.
    ContinueAccepted,
    /// The user declined the continue prompt.
    ContinueDeclined,
}

/// Next step for the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// Show this state's menu again immediately, without a continue prompt.
    Redisplay(MenuState),
    /// Move into this state and run its next interaction.
    Enter(MenuState),
    /// Ask whether to continue; the answer is fed back as a `MenuEvent`.
    AskContinue,
    /// Terminal state; the session ends.
    Exit,
}

/// Transition table for the menu machine.
pub fn next_transition(state: &MenuState, event: MenuEvent) -> Transition {
    match (state, event) {
        (_, MenuEvent::ContinueAccepted) => Transition::Enter(MenuState::Main),
        (_, MenuEvent::ContinueDeclined) => Transition::Exit,
        (MenuState::Main, MenuEvent::InputUnparsable) => Transition::Redisplay(MenuState::Main),
        (MenuState::Main, MenuEvent::ListNotFound) => Transition::Redisplay(MenuState::Main),
        (MenuState::Main, MenuEvent::ListOpened(name)) => {
            Transition::Enter(MenuState::Tasks(name))
        }
        (MenuState::Main, MenuEvent::InvalidOption | MenuEvent::ActionDone) => {
            Transition::AskContinue
        }
        (MenuState::Tasks(_), _) => Transition::AskContinue,
    }
}

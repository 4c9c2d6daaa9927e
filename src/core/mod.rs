//! Core account state machine types and logic.
//!
//! This module contains the pure functional core:
//! - The account state and the `State` trait
//! - Commands and the outcome of applying one
//! - Guard predicates for the business rules
//! - The transition function itself
//!
//! Nothing in this module performs I/O, reads the clock, or logs.

mod command;
pub mod guard;
mod machine;
mod outcome;
mod state;

pub use command::{Command, UnknownCommand};
pub use guard::Guard;
pub use machine::AccountMachine;
pub use outcome::{IgnoreReason, Outcome, Rejection};
pub use state::{AccountState, State};

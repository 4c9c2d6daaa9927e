//! Bankstate: a bank account as a pure functional state machine
//!
//! Follows the "pure core, imperative shell" split. The core maps an
//! account state and a command to a new state with no side effects; the
//! session shell holds the current state, surfaces rejections through an
//! environment, and supports undo/redo.
//!
//! # Core Concepts
//!
//! - **AccountState**: balance, outstanding loan, and whether the account is open
//! - **Command**: one of six user requests; amounts come from configuration
//! - **Outcome**: the new state, plus why nothing happened when nothing did
//! - **AccountSession**: holds state between commands, dispatches via effects
//!
//! # Example
//!
//! ```rust
//! use bankstate::core::{AccountMachine, AccountState, Command, Rejection};
//!
//! let machine = AccountMachine::default();
//!
//! let state = machine.next(AccountState::default(), Command::OpenAccount);
//! let state = machine.next(state, Command::RequestLoan);
//! assert_eq!(state, AccountState::new(5500, 5000, true));
//!
//! let outcome = machine.apply(state, Command::RequestLoan);
//! assert_eq!(
//!     outcome.rejection(),
//!     Some(Rejection::LoanAlreadyOutstanding { loan: 5000 })
//! );
//! assert_eq!(outcome.into_state(), state);
//! ```

pub mod config;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use config::AccountConfig;
pub use crate::core::{AccountMachine, AccountState, Command, Outcome, Rejection};
pub use session::{AccountSession, Notifier};

//! Imperative shell around the pure account machine.
//!
//! A session holds the current state between commands, the way a UI
//! holds it between renders. Dispatching is split in two steps, following
//! Stillwater's effect model:
//!
//! 1. `dispatch()` returns an effect. Running it against an environment
//!    computes the outcome and notifies the environment of rejections.
//! 2. `commit()` stores the result, refusing dispatches computed from a
//!    state the session no longer holds.
//!
//! # Example
//!
//! ```rust
//! use bankstate::core::{AccountState, Command};
//! use bankstate::session::{AccountSession, LogNotifier};
//! use stillwater::effect::Effect;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let mut session = AccountSession::default();
//!
//! let dispatch = session
//!     .dispatch(Command::OpenAccount)
//!     .run(&LogNotifier)
//!     .await
//!     .unwrap();
//! session.commit(dispatch).unwrap();
//!
//! assert_eq!(session.current_state(), &AccountState::new(500, 0, true));
//! # });
//! ```

mod error;
mod notify;
mod shell;

pub use error::SessionError;
pub use notify::{LogNotifier, Notifier};
pub use shell::{AccountSession, Dispatch};

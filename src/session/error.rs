//! Session errors.

use crate::core::{AccountState, UnknownCommand};
use thiserror::Error;

/// Hard failures while driving a session. Business rejections are not
/// errors; they travel inside `Outcome`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    UnknownCommand(#[from] UnknownCommand),

    #[error("Dispatch computed from {found:?} but the session holds {current:?}")]
    StaleDispatch {
        current: AccountState,
        found: AccountState,
    },
}

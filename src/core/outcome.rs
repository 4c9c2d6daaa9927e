//! Result of applying a command to an account.

use super::state::AccountState;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a command was refused on business grounds.
///
/// Rejections are user-facing: the shell decides how to surface them.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[error("You can only get one loan before you pay off your debt (outstanding: {loan})")]
    LoanAlreadyOutstanding { loan: i64 },

    #[error("Not enough balance to pay the loan (balance: {balance}, loan: {loan})")]
    InsufficientBalance { balance: i64, loan: i64 },

    #[error("Balance and loan must be 0 to close the account (balance: {balance}, loan: {loan})")]
    AccountNotSettled { balance: i64, loan: i64 },
}

/// Why a command left the state untouched without being a rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Any command but opening, on an inactive account.
    AccountInactive,
    /// Opening an account that is already open.
    AlreadyOpen,
    /// Withdrawing with a balance of zero or less.
    NoFunds,
    /// The new balance or loan would not fit in an `i64`.
    OutOfRange,
}

/// Result of one transition.
///
/// Every variant carries the state the shell should hold afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect and produced a new state.
    Applied(AccountState),

    /// Silent no-op: the state is returned unchanged.
    Ignored {
        state: AccountState,
        reason: IgnoreReason,
    },

    /// Business rule refused the command: the state is returned unchanged.
    Rejected {
        state: AccountState,
        reason: Rejection,
    },
}

impl Outcome {
    /// The state after the transition.
    pub fn state(&self) -> &AccountState {
        match self {
            Self::Applied(state) => state,
            Self::Ignored { state, .. } | Self::Rejected { state, .. } => state,
        }
    }

    /// Consume the outcome, keeping only the resulting state.
    pub fn into_state(self) -> AccountState {
        *self.state()
    }

    /// The business rejection, if any.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl From<Outcome> for Result<AccountState, Rejection> {
    /// Collapse the outcome into the usual success/error shape. Ignored
    /// commands count as success with the unchanged state.
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Rejected { reason, .. } => Err(reason),
            other => Ok(other.into_state()),
        }
    }
}

//! Commands a user can submit to the account.

use super::state::AccountState;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the six user-initiated requests.
///
/// Commands carry no amounts; every amount comes from the machine's
/// configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Command {
    OpenAccount,
    Deposit,
    Withdraw,
    RequestLoan,
    PayLoan,
    CloseAccount,
}

impl Command {
    /// Every command, in the order a shell would lay out its buttons.
    pub const ALL: [Command; 6] = [
        Command::OpenAccount,
        Command::Deposit,
        Command::Withdraw,
        Command::RequestLoan,
        Command::PayLoan,
        Command::CloseAccount,
    ];

    /// Canonical tag, as accepted by `FromStr`.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::OpenAccount => "openAccount",
            Self::Deposit => "deposit",
            Self::Withdraw => "withdraw",
            Self::RequestLoan => "requestLoan",
            Self::PayLoan => "payLoan",
            Self::CloseAccount => "closeAccount",
        }
    }

    /// Whether a shell should offer this command for `state`.
    ///
    /// Opening is offered only while inactive; everything else only
    /// while active.
    ///
    /// ```rust
    /// use bankstate::core::{AccountState, Command};
    ///
    /// let closed = AccountState::default();
    /// assert!(Command::OpenAccount.is_enabled_for(&closed));
    /// assert!(!Command::Deposit.is_enabled_for(&closed));
    /// ```
    pub fn is_enabled_for(&self, state: &AccountState) -> bool {
        match self {
            Self::OpenAccount => !state.is_active,
            _ => state.is_active,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A command tag outside the known set.
///
/// This is a caller-side defect, never a business condition.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown command '{tag}'")]
pub struct UnknownCommand {
    pub tag: String,
}

impl FromStr for Command {
    type Err = UnknownCommand;

    /// Parse a command tag. `active` and `close` are accepted as aliases
    /// for opening and closing the account.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "openAccount" | "active" => Ok(Self::OpenAccount),
            "deposit" => Ok(Self::Deposit),
            "withdraw" => Ok(Self::Withdraw),
            "requestLoan" => Ok(Self::RequestLoan),
            "payLoan" => Ok(Self::PayLoan),
            "closeAccount" | "close" => Ok(Self::CloseAccount),
            other => Err(UnknownCommand {
                tag: other.to_string(),
            }),
        }
    }
}

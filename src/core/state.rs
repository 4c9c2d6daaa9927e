//! Account state and the `State` trait it implements.
//!
//! States are plain values. Transitions never touch a state in place;
//! they build a new one, so a held state can be compared, kept for undo,
//! or handed to a renderer without any synchronization.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure - no side effects.
///
/// # Required Traits
///
/// - `Clone`: states are kept by the session for undo/redo
/// - `PartialEq`: the session detects changes by comparing states
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states are handed to renderers as data
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

/// The single bank account.
///
/// The initial value (`AccountState::default()`) is
/// `{ balance: 0, loan: 0, is_active: false }`. A successful close
/// returns the account to exactly that shape.
///
/// # Example
///
/// ```rust
/// use bankstate::core::{AccountState, State};
///
/// let state = AccountState::default();
/// assert_eq!(state.balance, 0);
/// assert_eq!(state.loan, 0);
/// assert!(!state.is_active);
/// assert_eq!(state.name(), "inactive");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountState {
    /// Current funds. Can be negative after paying a loan or withdrawing
    /// from a small positive balance.
    pub balance: i64,
    /// Outstanding loan principal, zero when no loan is open.
    pub loan: i64,
    /// Whether the account accepts operations other than opening.
    pub is_active: bool,
}

impl AccountState {
    /// Build a state from its parts.
    pub fn new(balance: i64, loan: i64, is_active: bool) -> Self {
        Self {
            balance,
            loan,
            is_active,
        }
    }

    /// An open loan exists.
    pub fn has_loan(&self) -> bool {
        self.loan != 0
    }

    /// No loan and no money left: the account may be closed.
    pub fn is_settled(&self) -> bool {
        self.loan == 0 && self.balance == 0
    }
}

impl State for AccountState {
    fn name(&self) -> &str {
        if self.is_active {
            "active"
        } else {
            "inactive"
        }
    }
}

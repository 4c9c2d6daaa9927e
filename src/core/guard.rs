//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a command may
//! take effect. The account machine keeps one guard per business rule.

use super::state::{AccountState, State};
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use bankstate::core::{AccountState, Guard};
///
/// let has_funds = Guard::new(|s: &AccountState| s.balance > 0);
///
/// assert!(has_funds.check(&AccountState::new(50, 0, true)));
/// assert!(!has_funds.check(&AccountState::new(0, 0, true)));
/// ```
pub struct Guard<S: State> {
    predicate: Arc<dyn Fn(&S) -> bool + Send + Sync>,
    _phantom: PhantomData<S>,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}

/// The account accepts operations.
pub fn active() -> Guard<AccountState> {
    Guard::new(|s: &AccountState| s.is_active)
}

/// Withdrawals only check for a strictly positive balance, not for a
/// balance covering the withdrawal amount.
pub fn funded() -> Guard<AccountState> {
    Guard::new(|s: &AccountState| s.balance > 0)
}

/// At most one loan may be outstanding.
pub fn loan_free() -> Guard<AccountState> {
    Guard::new(|s: &AccountState| !s.has_loan())
}

/// The balance is enough to pay off the whole loan.
pub fn covers_loan() -> Guard<AccountState> {
    Guard::new(|s: &AccountState| s.balance >= s.loan)
}

/// No balance and no loan left.
pub fn settled() -> Guard<AccountState> {
    Guard::new(|s: &AccountState| s.is_settled())
}

//! The account transition function.

use super::command::Command;
use super::guard::{self, Guard};
use super::outcome::{IgnoreReason, Outcome, Rejection};
use super::state::AccountState;
use crate::config::AccountConfig;

/// Pure state machine for a single account.
///
/// The machine holds only configuration and guards. It never owns the
/// account state: callers pass a state in and get a new one back.
///
/// # Example
///
/// ```rust
/// use bankstate::core::{AccountMachine, AccountState, Command};
///
/// let machine = AccountMachine::default();
/// let opened = machine.apply(AccountState::default(), Command::OpenAccount);
///
/// assert_eq!(opened.into_state(), AccountState::new(500, 0, true));
/// ```
#[derive(Clone)]
pub struct AccountMachine {
    config: AccountConfig,
    active: Guard<AccountState>,
    funded: Guard<AccountState>,
    loan_free: Guard<AccountState>,
    covers_loan: Guard<AccountState>,
    settled: Guard<AccountState>,
}

impl AccountMachine {
    /// Create a machine using the given amounts.
    pub fn new(config: AccountConfig) -> Self {
        Self {
            config,
            active: guard::active(),
            funded: guard::funded(),
            loan_free: guard::loan_free(),
            covers_loan: guard::covers_loan(),
            settled: guard::settled(),
        }
    }

    pub fn config(&self) -> &AccountConfig {
        &self.config
    }

    /// Apply `command` to `state`.
    ///
    /// Every command except `OpenAccount` is a silent no-op on an inactive
    /// account. Business rule failures return the state unchanged together
    /// with a `Rejection`.
    pub fn apply(&self, state: AccountState, command: Command) -> Outcome {
        if command == Command::OpenAccount {
            return self.open(state);
        }

        if !self.active.check(&state) {
            return Outcome::Ignored {
                state,
                reason: IgnoreReason::AccountInactive,
            };
        }

        match command {
            Command::OpenAccount => self.open(state),
            Command::Deposit => within_range(
                state,
                state
                    .balance
                    .checked_add(self.config.deposit_amount)
                    .map(|balance| AccountState { balance, ..state }),
            ),
            Command::Withdraw => self.withdraw(state),
            Command::RequestLoan => self.request_loan(state),
            Command::PayLoan => self.pay_loan(state),
            Command::CloseAccount => self.close(state),
        }
    }

    /// Apply `command` and keep only the resulting state.
    pub fn next(&self, state: AccountState, command: Command) -> AccountState {
        self.apply(state, command).into_state()
    }

    fn open(&self, state: AccountState) -> Outcome {
        if self.active.check(&state) {
            return Outcome::Ignored {
                state,
                reason: IgnoreReason::AlreadyOpen,
            };
        }

        within_range(
            state,
            state
                .balance
                .checked_add(self.config.opening_deposit)
                .map(|balance| AccountState {
                    balance,
                    is_active: true,
                    ..state
                }),
        )
    }

    fn withdraw(&self, state: AccountState) -> Outcome {
        if !self.funded.check(&state) {
            return Outcome::Ignored {
                state,
                reason: IgnoreReason::NoFunds,
            };
        }

        within_range(
            state,
            state
                .balance
                .checked_sub(self.config.withdraw_amount)
                .map(|balance| AccountState { balance, ..state }),
        )
    }

    fn request_loan(&self, state: AccountState) -> Outcome {
        if !self.loan_free.check(&state) {
            return Outcome::Rejected {
                state,
                reason: Rejection::LoanAlreadyOutstanding { loan: state.loan },
            };
        }

        let balance = state.balance.checked_add(self.config.loan_amount);
        let loan = state.loan.checked_add(self.config.loan_amount);

        within_range(
            state,
            balance
                .zip(loan)
                .map(|(balance, loan)| AccountState {
                    balance,
                    loan,
                    ..state
                }),
        )
    }

    fn pay_loan(&self, state: AccountState) -> Outcome {
        if !self.covers_loan.check(&state) {
            return Outcome::Rejected {
                state,
                reason: Rejection::InsufficientBalance {
                    balance: state.balance,
                    loan: state.loan,
                },
            };
        }

        within_range(
            state,
            state
                .balance
                .checked_sub(state.loan)
                .map(|balance| AccountState {
                    balance,
                    loan: 0,
                    ..state
                }),
        )
    }

    fn close(&self, state: AccountState) -> Outcome {
        if !self.settled.check(&state) {
            return Outcome::Rejected {
                state,
                reason: Rejection::AccountNotSettled {
                    balance: state.balance,
                    loan: state.loan,
                },
            };
        }

        Outcome::Applied(AccountState {
            is_active: false,
            ..state
        })
    }
}

/// Keep `state` when the arithmetic for its successor overflowed.
fn within_range(state: AccountState, next: Option<AccountState>) -> Outcome {
    match next {
        Some(next) => Outcome::Applied(next),
        None => Outcome::Ignored {
            state,
            reason: IgnoreReason::OutOfRange,
        },
    }
}

impl Default for AccountMachine {
    fn default() -> Self {
        Self::new(AccountConfig::default())
    }
}

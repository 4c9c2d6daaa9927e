//! Property-based tests for the account transition function.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated states and command sequences.

use bankstate::config::{AccountConfig, MAX_AMOUNT};
use bankstate::core::{AccountMachine, AccountState, Command, Outcome, Rejection};
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_state()(
        balance in -10_000i64..10_000,
        loan in prop_oneof![Just(0i64), 1i64..10_000],
        is_active in any::<bool>(),
    ) -> AccountState {
        AccountState::new(balance, loan, is_active)
    }
}

prop_compose! {
    fn active_state()(state in arbitrary_state()) -> AccountState {
        AccountState { is_active: true, ..state }
    }
}

prop_compose! {
    fn extreme_state()(
        balance in any::<i64>(),
        loan in prop_oneof![Just(0i64), 1i64..=i64::MAX],
        is_active in any::<bool>(),
    ) -> AccountState {
        AccountState::new(balance, loan, is_active)
    }
}

fn arbitrary_command() -> impl Strategy<Value = Command> {
    prop::sample::select(Command::ALL.to_vec())
}

#[test]
fn open_is_idempotent() {
    let machine = AccountMachine::default();
    let s0 = AccountState::default();

    let once = machine.next(s0, Command::OpenAccount);
    let twice = machine.next(once, Command::OpenAccount);

    assert_eq!(once, twice);
}

proptest! {
    #[test]
    fn open_never_credits_an_active_account(state in active_state()) {
        let outcome = AccountMachine::default().apply(state, Command::OpenAccount);
        prop_assert_eq!(outcome.into_state(), state);
    }

    #[test]
    fn inactive_account_ignores_all_but_open(
        state in arbitrary_state(),
        command in arbitrary_command(),
    ) {
        prop_assume!(command != Command::OpenAccount);
        let state = AccountState { is_active: false, ..state };

        let outcome = AccountMachine::default().apply(state, command);

        prop_assert!(!outcome.is_rejected());
        prop_assert_eq!(outcome.into_state(), state);
    }

    #[test]
    fn outstanding_loan_blocks_new_loan(state in active_state()) {
        prop_assume!(state.loan != 0);

        let outcome = AccountMachine::default().apply(state, Command::RequestLoan);

        prop_assert_eq!(
            outcome,
            Outcome::Rejected {
                state,
                reason: Rejection::LoanAlreadyOutstanding { loan: state.loan },
            }
        );
    }

    #[test]
    fn loan_request_credits_balance_and_loan(
        state in active_state(),
        loan_amount in 1i64..100_000,
    ) {
        let state = AccountState { loan: 0, ..state };
        let config = AccountConfig { loan_amount, ..AccountConfig::default() };

        let next = AccountMachine::new(config).next(state, Command::RequestLoan);

        prop_assert_eq!(next.balance, state.balance + loan_amount);
        prop_assert_eq!(next.loan, loan_amount);
    }

    #[test]
    fn close_succeeds_only_when_settled(state in active_state()) {
        let outcome = AccountMachine::default().apply(state, Command::CloseAccount);
        let next = outcome.into_state();

        if state.is_settled() {
            prop_assert!(!next.is_active);
        } else {
            prop_assert!(outcome.is_rejected());
            prop_assert_eq!(next, state);
        }
    }

    #[test]
    fn apply_is_deterministic(state in arbitrary_state(), command in arbitrary_command()) {
        let machine = AccountMachine::default();
        prop_assert_eq!(machine.apply(state, command), machine.apply(state, command));
    }

    #[test]
    fn rejections_never_change_state(state in arbitrary_state(), command in arbitrary_command()) {
        let outcome = AccountMachine::default().apply(state, command);

        if outcome.is_rejected() {
            prop_assert_eq!(outcome.into_state(), state);
        }
    }

    #[test]
    fn loan_stays_non_negative(commands in prop::collection::vec(arbitrary_command(), 0..40)) {
        let machine = AccountMachine::default();
        let mut state = AccountState::default();

        for command in commands {
            state = machine.next(state, command);
            prop_assert!(state.loan >= 0);
            prop_assert!(state.loan == 0 || state.loan == machine.config().loan_amount);
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state()) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: AccountState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }

    #[test]
    fn apply_stays_total_at_integer_limits(
        state in extreme_state(),
        command in arbitrary_command(),
        largest_amounts in any::<bool>(),
    ) {
        let config = if largest_amounts {
            AccountConfig {
                opening_deposit: MAX_AMOUNT,
                deposit_amount: MAX_AMOUNT,
                withdraw_amount: MAX_AMOUNT,
                loan_amount: MAX_AMOUNT,
            }
        } else {
            AccountConfig::default()
        };

        let outcome = AccountMachine::new(config).apply(state, command);

        if !outcome.is_applied() {
            prop_assert_eq!(outcome.into_state(), state);
        }
    }
}

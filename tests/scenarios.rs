//! End-to-end walkthroughs of an account's life with the reference amounts
//! (open 500, deposit 150, withdraw 50, loan 5000).

use bankstate::core::{AccountMachine, AccountState, Command, IgnoreReason, Outcome, Rejection};
use bankstate::session::{AccountSession, SessionError};
use stillwater::effect::Effect;

fn machine() -> AccountMachine {
    AccountMachine::default()
}

#[test]
fn opening_credits_minimum_deposit() {
    let state = machine().next(AccountState::default(), Command::OpenAccount);
    assert_eq!(state, AccountState::new(500, 0, true));
}

#[test]
fn deposit_adds_one_hundred_fifty() {
    let state = machine().next(AccountState::new(500, 0, true), Command::Deposit);
    assert_eq!(state, AccountState::new(650, 0, true));
}

#[test]
fn only_one_loan_at_a_time() {
    let state = machine().next(AccountState::new(650, 0, true), Command::RequestLoan);
    assert_eq!(state, AccountState::new(5650, 5000, true));

    let outcome = machine().apply(state, Command::RequestLoan);
    assert_eq!(
        outcome,
        Outcome::Rejected {
            state: AccountState::new(5650, 5000, true),
            reason: Rejection::LoanAlreadyOutstanding { loan: 5000 },
        }
    );
}

#[test]
fn paying_loan_restores_prior_balance() {
    let state = machine().next(AccountState::new(5650, 5000, true), Command::PayLoan);
    assert_eq!(state, AccountState::new(650, 0, true));
}

#[test]
fn withdrawing_stops_once_balance_is_not_positive() {
    let machine = machine();
    let mut state = AccountState::new(650, 0, true);

    state = machine.next(state, Command::Withdraw);
    state = machine.next(state, Command::Withdraw);
    assert_eq!(state, AccountState::new(550, 0, true));

    while state.balance > 0 {
        state = machine.next(state, Command::Withdraw);
    }
    assert_eq!(state, AccountState::new(0, 0, true));

    assert_eq!(
        machine.apply(state, Command::Withdraw),
        Outcome::Ignored {
            state,
            reason: IgnoreReason::NoFunds,
        }
    );
}

#[test]
fn withdrawal_can_overdraw_a_small_positive_balance() {
    // The guard checks balance > 0, not balance >= withdraw amount.
    let state = machine().next(AccountState::new(20, 0, true), Command::Withdraw);
    assert_eq!(state, AccountState::new(-30, 0, true));

    let again = machine().apply(state, Command::Withdraw);
    assert_eq!(again.into_state(), state);
}

#[test]
fn closing_requires_settled_account() {
    let closed = machine().next(AccountState::new(0, 0, true), Command::CloseAccount);
    assert_eq!(closed, AccountState::new(0, 0, false));

    let outcome = machine().apply(AccountState::new(100, 0, true), Command::CloseAccount);
    assert_eq!(
        outcome,
        Outcome::Rejected {
            state: AccountState::new(100, 0, true),
            reason: Rejection::AccountNotSettled {
                balance: 100,
                loan: 0
            },
        }
    );
}

#[test]
fn closed_account_can_be_reopened() {
    let machine = machine();
    let closed = machine.next(AccountState::new(0, 0, true), Command::CloseAccount);

    let reopened = machine.next(closed, Command::OpenAccount);

    assert_eq!(reopened, AccountState::new(500, 0, true));
}

#[tokio::test]
async fn full_lifecycle_through_session() {
    let mut session = AccountSession::default();

    for tag in [
        "openAccount",
        "deposit",
        "requestLoan",
        "payLoan",
        "withdraw",
        "withdraw",
    ] {
        let dispatch = session.dispatch_tag(tag).run(&()).await.unwrap();
        session.commit(dispatch).unwrap();
    }
    assert_eq!(session.current_state(), &AccountState::new(550, 0, true));

    while session.current_state().balance > 0 {
        let dispatch = session.dispatch(Command::Withdraw).run(&()).await.unwrap();
        session.commit(dispatch).unwrap();
    }

    let dispatch = session.dispatch(Command::CloseAccount).run(&()).await.unwrap();
    assert!(session.commit(dispatch).unwrap());
    assert_eq!(session.current_state(), &AccountState::default());
    assert_eq!(session.enabled_commands(), vec![Command::OpenAccount]);
}

#[tokio::test]
async fn unknown_tag_aborts_without_changing_state() {
    let session = AccountSession::default();

    let result = session.dispatch_tag("borrow").run(&()).await;

    assert!(matches!(result, Err(SessionError::UnknownCommand(_))));
    assert_eq!(session.current_state(), &AccountState::default());
}

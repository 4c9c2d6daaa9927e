//! Session that holds the current account state between commands.

use crate::core::{AccountMachine, AccountState, Command, Outcome, State};
use crate::session::error::SessionError;
use crate::session::notify::Notifier;
use stillwater::effect::{BoxedEffect, Effect};
use stillwater::prelude::*;
use tracing::debug;

/// Result of running a dispatch effect, ready to be committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dispatch {
    pub command: Command,
    /// State the outcome was computed from.
    pub from: AccountState,
    pub outcome: Outcome,
}

/// Holds the current state and the states it can undo/redo to.
pub struct AccountSession {
    machine: AccountMachine,
    current: AccountState,
    undo: Vec<AccountState>,
    redo: Vec<AccountState>,
}

impl AccountSession {
    /// Start a session on a pristine, inactive account.
    pub fn new(machine: AccountMachine) -> Self {
        Self {
            machine,
            current: AccountState::default(),
            undo: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// Current state (pure)
    pub fn current_state(&self) -> &AccountState {
        &self.current
    }

    pub fn machine(&self) -> &AccountMachine {
        &self.machine
    }

    /// Whether a shell should offer `command` right now.
    pub fn is_enabled(&self, command: Command) -> bool {
        command.is_enabled_for(&self.current)
    }

    /// Commands a shell should offer right now, in button order.
    pub fn enabled_commands(&self) -> Vec<Command> {
        Command::ALL
            .into_iter()
            .filter(|c| self.is_enabled(*c))
            .collect()
    }

    /// Compute the outcome of `command` against the current state.
    ///
    /// The returned effect notifies the environment of business
    /// rejections. After running it, pass the result to `commit()`.
    pub fn dispatch<Env>(&self, command: Command) -> BoxedEffect<Dispatch, SessionError, Env>
    where
        Env: Notifier + Clone + Send + Sync + 'static,
    {
        let from = self.current;
        let outcome = self.machine.apply(from, command);

        from_fn(move |env: &Env| {
            if let Outcome::Rejected { reason, .. } = &outcome {
                env.rejected(command, reason);
            }
            Ok::<Dispatch, SessionError>(Dispatch {
                command,
                from,
                outcome,
            })
        })
        .boxed()
    }

    /// Like `dispatch()`, starting from a textual command tag.
    /// Unknown tags fail the effect.
    pub fn dispatch_tag<Env>(&self, tag: &str) -> BoxedEffect<Dispatch, SessionError, Env>
    where
        Env: Notifier + Clone + Send + Sync + 'static,
    {
        match tag.parse::<Command>() {
            Ok(command) => self.dispatch(command),
            Err(err) => fail(SessionError::from(err)).boxed(),
        }
    }

    /// Replace the held state with the dispatch result.
    ///
    /// Fails if the dispatch was computed from a state other than the
    /// current one. Returns whether the state changed.
    pub fn commit(&mut self, dispatch: Dispatch) -> Result<bool, SessionError> {
        if dispatch.from != self.current {
            return Err(SessionError::StaleDispatch {
                current: self.current,
                found: dispatch.from,
            });
        }

        let next = dispatch.outcome.into_state();
        if next == self.current {
            debug!(command = %dispatch.command, "state unchanged");
            return Ok(false);
        }

        self.undo.push(self.current);
        self.redo.clear();
        self.current = next;

        debug!(
            command = %dispatch.command,
            balance = next.balance,
            loan = next.loan,
            state = next.name(),
            "state updated"
        );
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Step back to the state before the last committed change.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo.pop() else {
            return false;
        };
        self.redo.push(self.current);
        self.current = previous;
        true
    }

    /// Reapply the last undone change.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo.pop() else {
            return false;
        };
        self.undo.push(self.current);
        self.current = next;
        true
    }
}

impl Default for AccountSession {
    fn default() -> Self {
        Self::new(AccountMachine::default())
    }
}

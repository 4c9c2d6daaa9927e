//! Environments that surface rejections to the user.

use crate::core::{Command, Rejection};
use tracing::warn;

/// Receives business rejections while a dispatch effect runs.
///
/// The shell picks the implementation: a dialog, a toast, a log line.
pub trait Notifier {
    fn rejected(&self, command: Command, rejection: &Rejection);
}

/// Reports rejections as `tracing` warnings.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn rejected(&self, command: Command, rejection: &Rejection) {
        warn!(command = %command, reason = %rejection, "command rejected");
    }
}

/// Silent environment.
impl Notifier for () {
    fn rejected(&self, _command: Command, _rejection: &Rejection) {}
}

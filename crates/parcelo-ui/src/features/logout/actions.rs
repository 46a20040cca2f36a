//! Logout dialog actions.

use crate::features::logout::state::LogoutRequest;

/// User intents handled by the logout dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutAction {
    /// A logout trigger was clicked.
    Open(LogoutRequest),
    /// The dialog was dismissed.
    Cancel,
    /// The confirm button was pressed.
    Confirm,
}

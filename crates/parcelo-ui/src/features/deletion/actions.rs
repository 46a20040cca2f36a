//! Delete dialog actions.

use crate::features::deletion::state::DeleteRequest;

/// User and request intents handled by the delete dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteAction {
    /// A page script asked for confirmation.
    Open(DeleteRequest),
    /// The dialog was dismissed.
    Cancel,
    /// The confirm button was pressed.
    Confirm,
    /// The request completed successfully.
    Succeeded,
    /// The request failed.
    Failed,
}

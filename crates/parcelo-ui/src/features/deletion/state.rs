//! Delete dialog state.

use crate::core::error::DeleteRequestError;
use crate::features::deletion::actions::DeleteAction;

/// Message shown when the caller passes none.
pub const DEFAULT_DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";
/// Dialog title.
pub const DELETE_TITLE: &str = "Confirm Delete";
/// Confirm button label.
pub const DELETE_LABEL: &str = "Delete";
/// Alert text when the request fails.
pub const FAILURE_MESSAGE: &str = "Something went wrong!";

/// HTTP method used for the confirmed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DeleteMethod {
    /// `DELETE`
    #[default]
    Delete,
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
}

impl DeleteMethod {
    /// Parse a method name, ignoring case. A blank name means `DELETE`.
    ///
    /// # Errors
    /// Returns [`DeleteRequestError::UnsupportedMethod`] for any other verb.
    pub fn parse(value: &str) -> Result<Self, DeleteRequestError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "DELETE" => Ok(Self::Delete),
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            _ => Err(DeleteRequestError::UnsupportedMethod {
                method: trimmed.to_string(),
            }),
        }
    }

    /// Canonical verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Delete => "DELETE",
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
        }
    }
}

/// Request awaiting confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    /// Endpoint receiving the request.
    pub route: String,
    /// Confirmation message.
    pub message: String,
    /// HTTP method.
    pub method: DeleteMethod,
}

impl DeleteRequest {
    /// Build a request from page-script arguments.
    ///
    /// # Errors
    /// Returns [`DeleteRequestError::MissingRoute`] for a blank route and
    /// [`DeleteRequestError::UnsupportedMethod`] for an unknown verb.
    pub fn from_args(
        route: Option<String>,
        message: Option<String>,
        method: Option<String>,
    ) -> Result<Self, DeleteRequestError> {
        let route = route
            .filter(|value| !value.trim().is_empty())
            .ok_or(DeleteRequestError::MissingRoute)?;
        let method = DeleteMethod::parse(method.as_deref().unwrap_or_default())?;
        let message = message
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DELETE_MESSAGE.to_string());
        Ok(Self {
            route,
            message,
            method,
        })
    }
}

/// Delete dialog: open/closed plus whether a request is in flight.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct DeleteDialog {
    pending: Option<DeleteRequest>,
    submitting: bool,
}

impl DeleteDialog {
    /// Dialog already showing `request`.
    #[must_use]
    pub const fn opened(request: DeleteRequest) -> Self {
        Self {
            pending: Some(request),
            submitting: false,
        }
    }

    /// Request shown by the dialog.
    #[must_use]
    pub const fn pending(&self) -> Option<&DeleteRequest> {
        self.pending.as_ref()
    }

    /// Whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Request that a confirm press would send, if any.
    #[must_use]
    pub const fn submittable(&self) -> Option<&DeleteRequest> {
        if self.submitting {
            None
        } else {
            self.pending.as_ref()
        }
    }

    /// Apply an action. `Confirm` returns the request to send, at most once per attempt.
    pub fn apply(&mut self, action: DeleteAction) -> Option<DeleteRequest> {
        match action {
            DeleteAction::Open(request) => {
                self.pending = Some(request);
                self.submitting = false;
                None
            }
            DeleteAction::Cancel | DeleteAction::Succeeded => {
                self.pending = None;
                self.submitting = false;
                None
            }
            DeleteAction::Confirm => {
                let request = self.submittable().cloned()?;
                self.submitting = true;
                Some(request)
            }
            DeleteAction::Failed => {
                self.submitting = false;
                None
            }
        }
    }
}

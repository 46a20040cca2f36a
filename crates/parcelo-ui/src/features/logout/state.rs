//! Logout dialog state.

use crate::features::logout::actions::LogoutAction;

/// Selector for logout triggers.
pub const LOGOUT_SELECTOR: &str = ".logout-user";
/// Attribute naming the logout endpoint.
pub const ROUTE_ATTR: &str = "data-route";
/// Attribute overriding the confirmation message.
pub const MESSAGE_ATTR: &str = "data-message";
/// Attribute naming the page to open after logout.
pub const LOGIN_URL_ATTR: &str = "data-login-url";
/// Message shown when the trigger does not provide one.
pub const DEFAULT_LOGOUT_MESSAGE: &str = "Are you sure you want to logout?";
/// Dialog title.
pub const CONFIRM_TITLE: &str = "Confirm Logout";
/// Confirm button label.
pub const CONFIRM_LABEL: &str = "Logout";
/// Alert text when the logout request fails.
pub const FAILURE_MESSAGE: &str = "Logout failed";

/// Logout request described by a trigger element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogoutRequest {
    /// Endpoint receiving the POST.
    pub route: String,
    /// Confirmation message.
    pub message: String,
    /// Page opened after a successful logout.
    pub login_url: Option<String>,
}

/// Where to go once the logout request succeeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogoutNavigation {
    /// Open the login page.
    Redirect(String),
    /// Reload the current page.
    Reload,
}

impl LogoutRequest {
    /// Build a request from trigger attributes. A blank route yields `None`.
    #[must_use]
    pub fn from_attributes(
        route: Option<String>,
        message: Option<String>,
        login_url: Option<String>,
    ) -> Option<Self> {
        let route = non_blank(route)?;
        Some(Self {
            route,
            message: non_blank(message).unwrap_or_else(|| DEFAULT_LOGOUT_MESSAGE.to_string()),
            login_url: non_blank(login_url),
        })
    }

    /// Navigation after a successful logout.
    #[must_use]
    pub fn navigation(&self) -> LogoutNavigation {
        self.login_url
            .clone()
            .map_or(LogoutNavigation::Reload, LogoutNavigation::Redirect)
    }
}

/// Open/closed state of the confirmation dialog.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LogoutDialog {
    pending: Option<LogoutRequest>,
}

impl LogoutDialog {
    /// Request awaiting confirmation, if the dialog is open.
    #[must_use]
    pub const fn pending(&self) -> Option<&LogoutRequest> {
        self.pending.as_ref()
    }

    /// Whether the dialog is shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Apply an action; `Confirm` closes the dialog and returns the request to submit.
    pub fn apply(&mut self, action: LogoutAction) -> Option<LogoutRequest> {
        match action {
            LogoutAction::Open(request) => {
                self.pending = Some(request);
                None
            }
            LogoutAction::Cancel => {
                self.pending = None;
                None
            }
            LogoutAction::Confirm => self.pending.take(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|inner| !inner.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_LOGOUT_MESSAGE, LogoutDialog, LogoutNavigation, LogoutRequest};
    use crate::features::logout::actions::LogoutAction;

    fn request() -> LogoutRequest {
        LogoutRequest::from_attributes(
            Some("/admin/logout".to_string()),
            None,
            Some("/admin/login".to_string()),
        )
        .expect("route present")
    }

    #[test]
    fn route_is_required() {
        assert!(LogoutRequest::from_attributes(None, None, None).is_none());
        assert!(LogoutRequest::from_attributes(Some("  ".to_string()), None, None).is_none());
    }

    #[test]
    fn message_defaults_when_blank() {
        assert_eq!(request().message, DEFAULT_LOGOUT_MESSAGE);
        let custom = LogoutRequest::from_attributes(
            Some("/logout".to_string()),
            Some("Leave the dispatch desk?".to_string()),
            None,
        )
        .expect("route present");
        assert_eq!(custom.message, "Leave the dispatch desk?");
    }

    #[test]
    fn navigation_prefers_login_url() {
        assert_eq!(
            request().navigation(),
            LogoutNavigation::Redirect("/admin/login".to_string())
        );
        let without_login =
            LogoutRequest::from_attributes(Some("/logout".to_string()), None, Some(String::new()))
                .expect("route present");
        assert_eq!(without_login.navigation(), LogoutNavigation::Reload);
    }

    #[test]
    fn confirm_submits_once_and_closes() {
        let mut dialog = LogoutDialog::default();
        assert!(dialog.apply(LogoutAction::Open(request())).is_none());
        assert!(dialog.is_open());
        assert_eq!(dialog.apply(LogoutAction::Confirm), Some(request()));
        assert!(!dialog.is_open());
        assert_eq!(dialog.apply(LogoutAction::Confirm), None);
    }

    #[test]
    fn cancel_closes_without_request() {
        let mut dialog = LogoutDialog::default();
        dialog.apply(LogoutAction::Open(request()));
        assert!(dialog.apply(LogoutAction::Cancel).is_none());
        assert!(dialog.pending().is_none());
    }
}

//! Logout confirmation view.
//!
//! # Design
//! - One delegated document listener picks up triggers rendered at any time.
//! - The dialog closes before the request resolves, matching the modal `hide` on confirm.

use crate::components::confirm_dialog::ConfirmDialog;
use crate::features::logout::actions::LogoutAction;
use crate::features::logout::api::submit_logout;
use crate::features::logout::state::{
    CONFIRM_LABEL, CONFIRM_TITLE, DEFAULT_LOGOUT_MESSAGE, FAILURE_MESSAGE, LOGIN_URL_ATTR,
    LOGOUT_SELECTOR, LogoutDialog, LogoutNavigation, LogoutRequest, MESSAGE_ATTR, ROUTE_ATTR,
};
use gloo::console;
use gloo::dialogs::alert;
use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

/// Id of the element hosting the logout dialog.
pub(crate) const LOGOUT_ROOT_ID: &str = "logout-confirm-root";

#[function_component(LogoutConfirm)]
pub(crate) fn logout_confirm() -> Html {
    let dialog = use_state(LogoutDialog::default);

    {
        let dialog = dialog.clone();
        use_effect_with_deps(
            move |_| {
                let listener = EventListener::new_with_options(
                    &document(),
                    "click",
                    EventListenerOptions::enable_prevent_default(),
                    move |event| {
                        let Some(request) = trigger_request(event) else {
                            return;
                        };
                        event.prevent_default();
                        let mut next = LogoutDialog::default();
                        next.apply(LogoutAction::Open(request));
                        dialog.set(next);
                    },
                );
                move || drop(listener)
            },
            (),
        );
    }

    let on_cancel = {
        let dialog = dialog.clone();
        Callback::from(move |()| {
            let mut next = (*dialog).clone();
            next.apply(LogoutAction::Cancel);
            dialog.set(next);
        })
    };

    let on_confirm = {
        let dialog = dialog.clone();
        Callback::from(move |()| {
            let mut next = (*dialog).clone();
            let Some(request) = next.apply(LogoutAction::Confirm) else {
                return;
            };
            dialog.set(next);
            yew::platform::spawn_local(async move {
                match submit_logout(&request.route).await {
                    Ok(()) => navigate(&request.navigation()),
                    Err(err) => {
                        console::error!("logout request failed", format!("{err:?}"));
                        alert(FAILURE_MESSAGE);
                    }
                }
            });
        })
    };

    let message = dialog
        .pending()
        .map_or_else(|| DEFAULT_LOGOUT_MESSAGE.to_string(), |request| request.message.clone());

    html! {
        <ConfirmDialog
            open={dialog.is_open()}
            title={CONFIRM_TITLE}
            message={message}
            confirm_label={CONFIRM_LABEL}
            on_confirm={on_confirm}
            on_cancel={on_cancel}
        />
    }
}

/// Append the dialog host to the page body and mount the dialog.
pub(crate) fn mount_logout_confirm() {
    let Some(body) = document().body() else {
        return;
    };
    let host = match document().create_element("div") {
        Ok(host) => host,
        Err(err) => {
            console::error!("logout dialog host creation failed", err);
            return;
        }
    };
    host.set_id(LOGOUT_ROOT_ID);
    if let Err(err) = body.append_child(&host) {
        console::error!("logout dialog host attach failed", err);
        return;
    }
    yew::Renderer::<LogoutConfirm>::with_root(host).render();
}

fn trigger_request(event: &Event) -> Option<LogoutRequest> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let trigger = target.closest(LOGOUT_SELECTOR).ok().flatten()?;
    LogoutRequest::from_attributes(
        trigger.get_attribute(ROUTE_ATTR),
        trigger.get_attribute(MESSAGE_ATTR),
        trigger.get_attribute(LOGIN_URL_ATTR),
    )
}

fn navigate(navigation: &LogoutNavigation) {
    let location = window().location();
    let result = match navigation {
        LogoutNavigation::Redirect(url) => location.set_href(url),
        LogoutNavigation::Reload => location.reload(),
    };
    if let Err(err) = result {
        console::error!("post-logout navigation failed", err);
    }
}

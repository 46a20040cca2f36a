//! Delete confirmation view.
//!
//! # Design
//! - Each `confirmDelete` call remounts the dialog with a fresh request.
//! - `onSuccess` may be a function, a DataTables instance (reloaded in place) or absent (page reload).

use crate::components::confirm_dialog::ConfirmDialog;
use crate::features::deletion::actions::DeleteAction;
use crate::features::deletion::api::submit_delete;
use crate::features::deletion::state::{
    DELETE_LABEL, DELETE_TITLE, DEFAULT_DELETE_MESSAGE, DeleteDialog, DeleteRequest,
    FAILURE_MESSAGE,
};
use gloo::console;
use gloo::dialogs::alert;
use gloo::utils::{document, window};
use js_sys::{Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;
use yew::AppHandle;
use yew::platform::spawn_local;
use yew::prelude::*;

/// Id of the element hosting the delete dialog.
pub(crate) const DELETE_ROOT_ID: &str = "confirm-delete-root";

thread_local! {
    static DELETE_MOUNT: RefCell<Option<AppHandle<DeleteConfirm>>> = const { RefCell::new(None) };
}

#[derive(Properties, PartialEq)]
pub(crate) struct DeleteConfirmProps {
    pub(crate) request: DeleteRequest,
    #[prop_or_default]
    pub(crate) on_success: JsValue,
}

impl Reducible for DeleteDialog {
    type Action = DeleteAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

#[function_component(DeleteConfirm)]
pub(crate) fn delete_confirm(props: &DeleteConfirmProps) -> Html {
    let dialog = {
        let request = props.request.clone();
        use_reducer(move || DeleteDialog::opened(request))
    };

    let on_cancel = {
        let dispatcher = dialog.dispatcher();
        Callback::from(move |()| dispatcher.dispatch(DeleteAction::Cancel))
    };

    let on_confirm = {
        let dialog = dialog.clone();
        let on_success = props.on_success.clone();
        Callback::from(move |()| {
            let Some(request) = dialog.submittable().cloned() else {
                return;
            };
            let dispatcher = dialog.dispatcher();
            dispatcher.dispatch(DeleteAction::Confirm);
            let on_success = on_success.clone();
            spawn_local(async move {
                match submit_delete(&request).await {
                    Ok(()) => {
                        dispatcher.dispatch(DeleteAction::Succeeded);
                        run_success_hook(&on_success);
                    }
                    Err(err) => {
                        console::error!("delete request failed", format!("{err:?}"));
                        alert(FAILURE_MESSAGE);
                        dispatcher.dispatch(DeleteAction::Failed);
                    }
                }
            });
        })
    };

    let message = dialog
        .pending()
        .map_or_else(|| DEFAULT_DELETE_MESSAGE.to_string(), |request| request.message.clone());

    html! {
        <ConfirmDialog
            open={dialog.is_open()}
            busy={dialog.is_submitting()}
            title={DELETE_TITLE}
            message={message}
            confirm_label={DELETE_LABEL}
            on_confirm={on_confirm}
            on_cancel={on_cancel}
        />
    }
}

/// Show the dialog for `request`, replacing any dialog already shown.
pub(crate) fn mount_delete_confirm(request: DeleteRequest, on_success: JsValue) {
    DELETE_MOUNT.with(|slot| {
        if let Some(previous) = slot.borrow_mut().take() {
            previous.destroy();
        }
        let Some(host) = delete_host() else {
            return;
        };
        let props = DeleteConfirmProps {
            request,
            on_success,
        };
        let handle = yew::Renderer::<DeleteConfirm>::with_root_and_props(host, props).render();
        *slot.borrow_mut() = Some(handle);
    });
}

fn delete_host() -> Option<Element> {
    if let Some(host) = document().get_element_by_id(DELETE_ROOT_ID) {
        return Some(host);
    }
    let host = match document().create_element("div") {
        Ok(host) => host,
        Err(err) => {
            console::error!("delete dialog host creation failed", err);
            return None;
        }
    };
    let body = document().body()?;
    host.set_id(DELETE_ROOT_ID);
    if let Err(err) = body.append_child(&host) {
        console::error!("delete dialog host attach failed", err);
        return None;
    }
    Some(host)
}

fn run_success_hook(on_success: &JsValue) {
    let result = if let Some(callback) = on_success.dyn_ref::<Function>() {
        callback.call0(&JsValue::NULL).map(drop)
    } else if on_success.is_object() {
        reload_data_table(on_success)
    } else {
        window().location().reload()
    };
    if let Err(err) = result {
        console::error!("delete success hook failed", err);
    }
}

fn reload_data_table(table: &JsValue) -> Result<(), JsValue> {
    let ajax = Reflect::get(table, &JsValue::from_str("ajax"))?;
    let reload = Reflect::get(&ajax, &JsValue::from_str("reload"))?;
    let Some(reload) = reload.dyn_ref::<Function>() else {
        return Err(JsValue::from_str("success target has no ajax.reload"));
    };
    reload
        .call2(&ajax, &JsValue::NULL, &JsValue::FALSE)
        .map(drop)
}

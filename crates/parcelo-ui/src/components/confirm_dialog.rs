//! Confirmation dialog shared by destructive actions.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ConfirmDialogProps {
    #[prop_or_default]
    pub(crate) open: bool,
    /// Disables the confirm button while a request runs.
    #[prop_or_default]
    pub(crate) busy: bool,
    pub(crate) title: AttrValue,
    pub(crate) message: AttrValue,
    pub(crate) confirm_label: AttrValue,
    #[prop_or(AttrValue::Static("Cancel"))]
    pub(crate) cancel_label: AttrValue,
    #[prop_or_default]
    pub(crate) on_confirm: Callback<()>,
    #[prop_or_default]
    pub(crate) on_cancel: Callback<()>,
}

#[function_component(ConfirmDialog)]
pub(crate) fn confirm_dialog(props: &ConfirmDialogProps) -> Html {
    let classes = classes!("modal", props.open.then_some("modal-open"));

    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let on_confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    html! {
        <div class={classes} role="dialog" aria-modal="true" aria-hidden={(!props.open).to_string()}>
            <div class="modal-box">
                <h5 class="modal-title">{props.title.clone()}</h5>
                <p class="modal-message">{props.message.clone()}</p>
                <div class="modal-action">
                    <button type="button" class="btn btn-secondary" onclick={on_cancel.clone()}>
                        {props.cancel_label.clone()}
                    </button>
                    <button type="button" class="btn btn-danger" disabled={props.busy} onclick={on_confirm}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
            <button type="button" class="modal-backdrop" onclick={on_cancel}></button>
        </div>
    }
}

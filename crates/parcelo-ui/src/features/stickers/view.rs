//! Label sheet view.
//!
//! # Design
//! - Convert the pure render tree into Yew virtual DOM without adding markup of its own.
//! - Resolve pager clicks and checkbox changes through one delegated handler each.

use crate::core::config::StickerSettings;
use crate::features::stickers::actions::StickerAction;
use crate::features::stickers::render::{ACTION_ATTR, ID_ATTR, RenderNode, render_board};
use crate::features::stickers::state::StickerBoard;
use parcelo_models::OrderBox;
use std::rc::Rc;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;
use yew::virtual_dom::{VNode, VTag, VText};

#[derive(Properties, PartialEq)]
pub(crate) struct StickerSheetProps {
    pub(crate) records: Rc<Vec<Option<OrderBox>>>,
    pub(crate) storage_base_url: AttrValue,
    pub(crate) settings: StickerSettings,
}

impl Reducible for StickerBoard {
    type Action = StickerAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.apply(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[function_component(StickerSheet)]
pub(crate) fn sticker_sheet(props: &StickerSheetProps) -> Html {
    let board = {
        let records = props.records.clone();
        let storage_base_url = props.storage_base_url.clone();
        let settings = props.settings.clone();
        use_reducer(move || StickerBoard::generate(&records, &storage_base_url, &settings))
    };

    let onclick = {
        let dispatcher = board.dispatcher();
        Callback::from(move |event: MouseEvent| {
            if let Some(action) = pager_action(&event) {
                dispatcher.dispatch(action);
            }
        })
    };

    let onchange = {
        let dispatcher = board.dispatcher();
        Callback::from(move |event: Event| {
            let Some(input) = event.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            if input.type_() != "checkbox" {
                return;
            }
            if let Some(order_id) = input.get_attribute(ID_ATTR) {
                dispatcher.dispatch(StickerAction::Toggle {
                    order_id,
                    checked: input.checked(),
                });
            }
        })
    };

    html! {
        <div class="stickers-sheet" {onclick} {onchange}>
            {for render_board(&board).iter().map(to_html)}
        </div>
    }
}

fn pager_action(event: &MouseEvent) -> Option<StickerAction> {
    let target = event.target_dyn_into::<Element>()?;
    let button = target
        .closest(&format!("[{ACTION_ATTR}]"))
        .ok()
        .flatten()?;
    if button.has_attribute("disabled") {
        return None;
    }
    StickerAction::from_pager_value(&button.get_attribute(ACTION_ATTR)?)
}

fn to_html(node: &RenderNode) -> Html {
    match node {
        RenderNode::Text(text) => VNode::VText(VText::new(text.clone())),
        RenderNode::Element(element) => {
            let mut tag = VTag::new(element.tag);
            for (name, value) in &element.attributes {
                // `checked` is a live property on inputs, not a plain attribute.
                if *name != "checked" {
                    tag.add_attribute(*name, value.clone());
                }
            }
            if element.tag == "input" {
                tag.set_checked(element.attribute("checked").is_some());
            }
            for child in &element.children {
                tag.add_child(to_html(child));
            }
            tag.into()
        }
    }
}

//! Postcode autocomplete view.

use crate::core::config::PostcoderSettings;
use crate::features::postcode::api::{fetch_address, fetch_suggestions};
use crate::features::postcode::logic::{AddressFields, address_url, find_url};
use crate::features::postcode::state::{HOST_SELECTOR, PostcoderTargets, QueryTracker};
use gloo::console;
use gloo::events::EventListener;
use gloo::utils::document;
use parcelo_models::AddressSuggestion;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AddressAutocompleteProps {
    pub(crate) settings: PostcoderSettings,
    pub(crate) targets: PostcoderTargets,
    /// Existing search input to listen to; renders only the list items when set.
    #[prop_or_default]
    pub(crate) search_selector: Option<AttrValue>,
}

#[function_component(AddressAutocomplete)]
pub(crate) fn address_autocomplete(props: &AddressAutocompleteProps) -> Html {
    let suggestions = use_state(Vec::<AddressSuggestion>::new);
    let tracker = use_mut_ref(QueryTracker::default);

    let on_query = {
        let suggestions = suggestions.clone();
        let tracker = tracker.clone();
        let settings = props.settings.clone();
        let targets = props.targets.clone();
        Callback::from(move |query: String| {
            let api_key = input_value(&targets.api_key_selector).unwrap_or_default();
            let country = targets.country_or(&settings.country_code);
            let Some(url) = find_url(&settings, &api_key, &query, country) else {
                tracker.borrow_mut().invalidate();
                suggestions.set(Vec::new());
                return;
            };
            let generation = tracker.borrow_mut().begin();
            let suggestions = suggestions.clone();
            let tracker = tracker.clone();
            spawn_local(async move {
                let result = fetch_suggestions(&url).await;
                if !tracker.borrow().is_current(generation) {
                    return;
                }
                match result {
                    Ok(list) => suggestions.set(list),
                    Err(err) => {
                        console::error!("suggestion lookup failed", format!("{err:?}"));
                        suggestions.set(Vec::new());
                    }
                }
            });
        })
    };

    {
        let on_query = on_query.clone();
        use_effect_with_deps(
            move |search_selector: &Option<AttrValue>| {
                let listener = search_selector
                    .as_deref()
                    .and_then(find_input)
                    .map(|input| {
                        let target = input.clone();
                        EventListener::new(&input, "input", move |_event| {
                            on_query.emit(target.value());
                        })
                    });
                move || drop(listener)
            },
            props.search_selector.clone(),
        );
    }

    let on_select = {
        let suggestions = suggestions.clone();
        let tracker = tracker.clone();
        let settings = props.settings.clone();
        let targets = props.targets.clone();
        Callback::from(move |suggestion: AddressSuggestion| {
            tracker.borrow_mut().invalidate();
            let api_key = input_value(&targets.api_key_selector).unwrap_or_default();
            let url = address_url(&settings, &api_key, &suggestion.id);
            let suggestions = suggestions.clone();
            let targets = targets.clone();
            spawn_local(async move {
                match fetch_address(&url, &suggestion.id).await {
                    Ok(address) => {
                        fill_targets(&targets, &AddressFields::from(&address));
                        suggestions.set(Vec::new());
                    }
                    Err(err) => {
                        console::error!("address lookup failed", format!("{err:?}"));
                    }
                }
            });
        })
    };

    let items = html! {
        <>{for suggestions.iter().map(|suggestion| {
            let onclick = {
                let on_select = on_select.clone();
                let suggestion = suggestion.clone();
                Callback::from(move |_: MouseEvent| on_select.emit(suggestion.clone()))
            };
            html! {
                <li style="padding: 8px; cursor: pointer;" {onclick}>
                    {suggestion.summary.clone()}
                </li>
            }
        })}</>
    };

    if props.search_selector.is_some() {
        return items;
    }

    let oninput = Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            on_query.emit(input.value());
        }
    });

    html! {
        <div class="postcoder-autocomplete">
            <input
                type="search"
                class="form-control postcoder-search"
                autocomplete="off"
                placeholder="Start typing an address or postcode"
                {oninput}
            />
            <ul class="postcoder-suggestions">{items}</ul>
        </div>
    }
}

/// Mount an autocomplete into every configured host on the page.
pub(crate) fn mount_address_autocompletes(settings: &PostcoderSettings) {
    let hosts = match document().query_selector_all(HOST_SELECTOR) {
        Ok(hosts) => hosts,
        Err(err) => {
            console::error!("postcoder host selector failed", err);
            return;
        }
    };
    for index in 0..hosts.length() {
        let Some(host) = hosts
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(targets) = PostcoderTargets::from_attributes(|name| host.get_attribute(name))
        else {
            console::warn!("postcoder host is missing target selectors", host.id());
            continue;
        };
        mount_one(host, settings, targets);
    }
}

/// Render into the page's own suggestion list when the host names one, else into the host.
fn mount_one(host: Element, settings: &PostcoderSettings, targets: PostcoderTargets) {
    let existing = targets
        .existing_elements()
        .map(|(search, list)| (AttrValue::from(search.to_string()), list.to_string()));
    let (root, search_selector) = match existing {
        Some((search, list)) => match find_element(&list) {
            Some(list_element) => (list_element, Some(search)),
            None => {
                console::warn!("postcoder suggestion list not found", list);
                return;
            }
        },
        None => (host, None),
    };
    let props = AddressAutocompleteProps {
        settings: settings.clone(),
        targets,
        search_selector,
    };
    yew::Renderer::<AddressAutocomplete>::with_root_and_props(root, props).render();
}

fn find_element(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok().flatten()
}

fn find_input(selector: &str) -> Option<HtmlInputElement> {
    find_element(selector).and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
}

fn input_value(selector: &str) -> Option<String> {
    find_input(selector).map(|input| input.value())
}

fn fill_targets(targets: &PostcoderTargets, fields: &AddressFields) {
    for (selector, value) in targets.assignments(fields) {
        match find_input(selector) {
            Some(input) => input.set_value(value),
            None => console::warn!("address target not found", selector),
        }
    }
}

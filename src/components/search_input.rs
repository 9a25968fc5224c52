use dioxus::prelude::*;

use crate::utils::config::SEARCH_PLACEHOLDER;

#[derive(Props, PartialEq, Clone)]
pub struct SearchInputProps {
    query: String,
    on_change: EventHandler<String>,
    on_submit: EventHandler<()>,
}

/// Query box with a Search button. Enter in the box submits as well.
#[component]
pub fn SearchInput(props: SearchInputProps) -> Element {
    let on_change = props.on_change;
    let on_submit = props.on_submit;

    rsx! {
        div { class: "search-container",
            input {
                class: "search-input",
                r#type: "text",
                placeholder: SEARCH_PLACEHOLDER,
                value: "{props.query}",
                oninput: move |evt| on_change.call(evt.value().clone()),
                onkeydown: move |evt: KeyboardEvent| {
                    if evt.key() == Key::Enter {
                        on_submit.call(());
                    }
                }
            }
            button {
                class: "btn btn-primary search-button",
                onclick: move |_| on_submit.call(()),
                "Search"
            }
        }
    }
}

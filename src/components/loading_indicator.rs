use dioxus::prelude::*;

#[component]
pub fn LoadingIndicator(message: String) -> Element {
    rsx! {
        p { class: "loading-indicator", "{message}" }
    }
}

use crate::utils::config::APP_TITLE;
use crate::Route;
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

#[component]
pub fn Navbar() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        div { class: "layout-container",
            header { class: "app-header",
                h1 { class: "app-title", "{APP_TITLE}" }
            }
            div {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

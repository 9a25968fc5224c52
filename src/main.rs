use dioxus::{logger::tracing, prelude::*};
use dioxus_desktop::{Config, WindowBuilder};
use views::{Navbar, Search};

mod api;
mod components;
mod contexts;
mod utils;
mod views;

use api::QueryClient;
use utils::config;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
        #[route("/")]
        Search {},
}

const MAIN_CSS: Asset = asset!("/assets/styling/main.css");

fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new().with_title(config::APP_TITLE)
            ),
        )
        .launch(App);
}

#[component]
fn App() -> Element {
    // Built once; the endpoint is fixed for the lifetime of the app
    let client = use_hook(QueryClient::from_config);

    match client {
        Err(err) => {
            tracing::error!("Failed to start the search client: {}", err);

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                div { class: "error-container",
                    div { class: "error-banner",
                        "⚠️ Failed to start the search client: {err}"
                    }
                }
            }
        }
        Ok(client) => {
            // Successful - provide the client context and show normal UI
            use_context_provider(|| client.clone());

            rsx! {
                document::Link { rel: "stylesheet", href: MAIN_CSS }

                Router::<Route> {}
            }
        }
    }
}

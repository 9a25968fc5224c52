use dioxus::{logger::tracing, prelude::*};

use crate::api::QueryClient;
use crate::components::{LoadingIndicator, ResultTable, SearchInput};
use crate::contexts::{Resolution, ResultView, SearchSession};
use crate::utils::config::{EMPTY_RESULTS_MESSAGE, LOADING_MESSAGE};

const SEARCH_CSS: Asset = asset!("/assets/styling/search.css");

#[derive(Clone)]
struct SearchDispatcher {
    client: QueryClient,
    session: Signal<SearchSession>,
}

impl SearchDispatcher {
    fn submit(&self) {
        let mut session = self.session;
        let Some(pending) = session.write().begin_submit() else {
            return;
        };
        let client = self.client.clone();

        tracing::info!("Submitting query #{} to {}", pending.generation, client.endpoint());

        spawn(async move {
            let outcome = client.query(&pending.query).await;
            if let Err(e) = &outcome {
                tracing::error!("Error fetching results: {}", e);
            }

            if session.write().resolve(pending.generation, outcome) == Resolution::Stale {
                tracing::debug!("Dropped response for superseded query #{}", pending.generation);
            }
        });
    }
}

#[component]
pub fn Search() -> Element {
    let client = use_context::<QueryClient>();
    let mut session = use_signal(SearchSession::default);

    let dispatcher = SearchDispatcher { client, session };

    let query = session.read().query().to_string();
    let results = match session.read().view() {
        ResultView::Loading => rsx! {
            LoadingIndicator { message: LOADING_MESSAGE.to_string() }
        },
        ResultView::Empty => rsx! {
            p { class: "empty-state", "{EMPTY_RESULTS_MESSAGE}" }
        },
        ResultView::Table(records) => rsx! {
            ResultTable { records: records.to_vec() }
        },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SEARCH_CSS }
        div { class: "search-page",
            SearchInput {
                query,
                on_change: move |q: String| session.write().set_query(q),
                on_submit: move |_| dispatcher.submit()
            }
            div { class: "search-results", {results} }
        }
    }
}

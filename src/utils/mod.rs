/// Configuration constants for the application
pub mod config {
    /// Base URL of the assessment recommendation API
    pub const API_BASE_URL: &str = "http://127.0.0.1:4000";

    /// Path of the query route on the API
    pub const QUERY_PATH: &str = "/query";

    /// Title of the desktop window and the page heading
    pub const APP_TITLE: &str = "SHL Assessment Finder";

    /// Placeholder shown in the empty search box
    pub const SEARCH_PLACEHOLDER: &str = "Enter your query or a job description text...";

    /// Message shown when there is nothing to put in the table
    pub const EMPTY_RESULTS_MESSAGE: &str = "No results found. Try a different query.";

    /// Message shown while a query is in flight
    pub const LOADING_MESSAGE: &str = "Loading...";

    /// Label of the link cell in every result row
    pub const LINK_LABEL: &str = "View";

    /// Result links open in a new browsing context
    pub const LINK_TARGET: &str = "_blank";

    /// Result links leak neither opener nor referrer
    pub const LINK_REL: &str = "noopener noreferrer";
}

/// Utility functions for query text and endpoints
pub mod query_utils {
    use super::config::*;

    /// Full URL of the query route
    pub fn query_endpoint() -> String {
        join_url(API_BASE_URL, QUERY_PATH)
    }

    /// Join a base URL and a path without doubling or dropping the slash
    pub fn join_url(base: &str, path: &str) -> String {
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// A query counts as blank when nothing but whitespace is left after trimming
    pub fn is_blank(query: &str) -> bool {
        query.trim().is_empty()
    }
}

pub use query_utils::{is_blank, query_endpoint};

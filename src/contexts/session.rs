use crate::api::AssessmentRecord;
use crate::utils::is_blank;

use super::error::SearchResult;

/// Where the search page is in its submit/resolve cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Nothing has been fetched yet
    Idle,
    /// The latest submission is in flight
    Loading,
    /// The last applied response had at least one record
    Populated,
    /// The last applied response had no records
    Empty,
}

/// A submission accepted by [`SearchSession::begin_submit`], waiting for its response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub generation: u64,
    /// Query text exactly as typed, untrimmed
    pub query: String,
}

/// What [`SearchSession::resolve`] did with a response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The records replaced the result list
    Applied,
    /// The request failed; previous results were kept
    Failed,
    /// A newer submission exists; the response was dropped
    Stale,
}

/// What the result area should show
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultView<'a> {
    Loading,
    Empty,
    Table(&'a [AssessmentRecord]),
}

/// State behind the search page: query text, result list and loading flag.
///
/// Every accepted submission takes a new generation number and only the
/// response for the latest generation is applied, so overlapping requests
/// cannot overwrite newer results with older ones.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchSession {
    query: String,
    results: Vec<AssessmentRecord>,
    loading: bool,
    generation: u64,
    searched: bool,
}

impl SearchSession {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn results(&self) -> &[AssessmentRecord] {
        &self.results
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Accept a submission of the current query.
    ///
    /// Returns `None` without touching any state when the query is blank.
    pub fn begin_submit(&mut self) -> Option<PendingQuery> {
        if is_blank(&self.query) {
            return None;
        }

        self.generation += 1;
        self.loading = true;

        Some(PendingQuery {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply the outcome of the request issued for `generation`
    pub fn resolve(
        &mut self,
        generation: u64,
        outcome: SearchResult<Vec<AssessmentRecord>>,
    ) -> Resolution {
        if generation != self.generation {
            return Resolution::Stale;
        }

        self.loading = false;
        match outcome {
            Ok(records) => {
                self.results = records;
                self.searched = true;
                Resolution::Applied
            }
            Err(_) => Resolution::Failed,
        }
    }

    pub fn phase(&self) -> SearchPhase {
        if self.loading {
            SearchPhase::Loading
        } else if !self.results.is_empty() {
            SearchPhase::Populated
        } else if self.searched {
            SearchPhase::Empty
        } else {
            SearchPhase::Idle
        }
    }

    /// Idle and Empty render the same way
    pub fn view(&self) -> ResultView<'_> {
        match self.phase() {
            SearchPhase::Loading => ResultView::Loading,
            SearchPhase::Populated => ResultView::Table(&self.results),
            SearchPhase::Idle | SearchPhase::Empty => ResultView::Empty,
        }
    }
}

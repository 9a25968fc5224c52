//! Shared building blocks of the search page: the query box, the result table
//! and its rows, and the loading placeholder.

mod search_input;
pub use search_input::SearchInput;

mod result_table;
pub use result_table::ResultTable;

mod assessment_row;
pub use assessment_row::AssessmentRow;

mod loading_indicator;
pub use loading_indicator::LoadingIndicator;

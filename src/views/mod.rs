//! Layouts and routed pages. The app has a single page under a header layout.

mod navbar;
pub use navbar::Navbar;

mod search;
pub use search::Search;

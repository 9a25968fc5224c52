// Context modules for application state management
pub mod error;
pub mod session;

pub use error::*;
pub use session::*;

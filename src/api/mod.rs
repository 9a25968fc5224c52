pub mod client;
pub mod record;

pub use client::*;
pub use record::*;

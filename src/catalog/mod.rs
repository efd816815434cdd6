//! Listing catalog: records, fixture source, and filters

mod filter;
mod listing;
mod source;

pub use filter::*;
pub use listing::*;
pub use source::*;

//! Application state module

mod app_state;
mod wizard;

pub use app_state::*;
pub use wizard::*;

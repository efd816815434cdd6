//! Multi-step rental application wizard state

mod attachments;
mod field;
mod form;
mod step;
mod wizard_state;

pub use attachments::*;
pub use field::*;
pub use step::*;
pub use wizard_state::*;

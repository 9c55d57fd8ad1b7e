//! Presentational building blocks. Each component is a template rendered
//! from translated strings and the capabilities handed to it.

mod call_to_action;
mod heading;
mod join_modal;
mod layout;
mod navbar;
mod team_content;
pub mod trans;

pub use call_to_action::*;
pub use heading::*;
pub use join_modal::*;
pub use layout::*;
pub use navbar::*;
pub use team_content::*;

mod error;
mod member;
mod member_accessor;
mod member_id;
mod member_name;
mod menu_state;
mod page_state;
mod preferences;

pub use error::*;
pub use member::*;
pub use member_accessor::*;
pub use member_id::*;
pub use member_name::*;
pub use menu_state::*;
pub use page_state::*;
pub use preferences::*;

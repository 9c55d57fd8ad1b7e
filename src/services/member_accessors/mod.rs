mod http_member_accessor;
mod in_memory_member_accessor;

pub use http_member_accessor::*;
pub use in_memory_member_accessor::*;

use crate::domain::{DisplayMember, Member};

/// Projects every member onto its card form. Length and order are kept and
/// duplicate ids are passed through.
pub fn process_members(members: Vec<Member>) -> Vec<DisplayMember> {
    members.into_iter().map(DisplayMember::from).collect()
}

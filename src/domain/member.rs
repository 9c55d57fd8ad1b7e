use serde::Serialize;

use super::{MemberId, MemberName};

#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id: MemberId,
    pub name: MemberName,
    pub role: Option<String>,
    pub photo_url: Option<String>,
    pub github_url: Option<String>,
}

impl Member {
    pub fn new(id: MemberId, name: MemberName) -> Self {
        Self {
            id,
            name,
            role: None,
            photo_url: None,
            github_url: None,
        }
    }
}

/// What a member card shows: the stored record with its name shortened.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayMember {
    pub id: MemberId,
    pub name: MemberName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
}

impl From<Member> for DisplayMember {
    fn from(member: Member) -> Self {
        Self {
            name: member.name.short(),
            id: member.id,
            role: member.role,
            photo_url: member.photo_url,
            github_url: member.github_url,
        }
    }
}

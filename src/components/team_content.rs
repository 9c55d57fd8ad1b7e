use askama::Template;

use crate::{
    domain::{DisplayMember, PageViewState},
    services::translator::Namespace,
};

const SKELETON_CARDS: usize = 4;

#[derive(Template)]
#[template(path = "components/skeleton_member_cards.html")]
pub struct SkeletonMemberCards {
    pub slots: Vec<usize>,
}

#[derive(Template)]
#[template(path = "components/fetch_error.html")]
pub struct FetchErrorMessage<'a> {
    pub message: &'a str,
}

#[derive(Template)]
#[template(path = "components/empty_state.html")]
pub struct EmptyState {
    pub label: String,
}

pub struct MemberCard<'a> {
    pub member: &'a DisplayMember,
    pub initial: String,
}

impl<'a> MemberCard<'a> {
    fn new(member: &'a DisplayMember) -> Self {
        let initial = member
            .name
            .as_ref()
            .trim_start()
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default();
        Self { member, initial }
    }
}

#[derive(Template)]
#[template(path = "components/member_grid.html")]
pub struct MemberGrid<'a> {
    pub cards: Vec<MemberCard<'a>>,
}

/// Content area of the team page for the given state.
pub fn render_team_content(
    state: &PageViewState,
    t: &Namespace<'_>,
) -> askama::Result<String> {
    match state {
        PageViewState::Loading => render_loading(),
        PageViewState::Error(message) => render_error(message),
        PageViewState::Empty => render_empty(t),
        PageViewState::Populated(members) => render_members(members),
    }
}

fn render_loading() -> askama::Result<String> {
    SkeletonMemberCards {
        slots: (0..SKELETON_CARDS).collect(),
    }
    .render()
}

fn render_error(message: &str) -> askama::Result<String> {
    FetchErrorMessage { message }.render()
}

fn render_empty(t: &Namespace<'_>) -> askama::Result<String> {
    EmptyState {
        label: t.t("no-items"),
    }
    .render()
}

fn render_members(members: &[DisplayMember]) -> askama::Result<String> {
    MemberGrid {
        cards: members.iter().map(MemberCard::new).collect(),
    }
    .render()
}

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use color_eyre::eyre::WrapErr;

use crate::{
    app_state::AppState,
    components::{
        render_team_content, Heading, JoinModalActions, Layout, PageContext,
    },
    domain::{PageQuery, PageViewState, Preferences, SiteError},
    services::translator::namespaces,
    utils::constants::links,
};

use super::render_page;

#[derive(Template)]
#[template(path = "team.html")]
pub struct TeamPage {
    pub layout: Layout,
    pub title: String,
    pub heading: Heading,
    pub content: String,
}

#[tracing::instrument(name = "Team page route handler", skip_all)]
pub async fn team_page(
    State(state): State<AppState>,
    preferences: Preferences,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, SiteError> {
    let view = PageViewState::from_props(state.team_page.props().await);
    tracing::debug!("rendering team page state: {}", view_name(&view));

    let context = PageContext::new("/team", preferences, query);
    let translator = &state.translator;
    let t = translator.namespace(preferences.locale, namespaces::TEAM_PAGE);
    let navbar = translator.namespace(preferences.locale, namespaces::NAVBAR);

    let content = render_team_content(&view, &t)
        .wrap_err("failed to render team content")
        .map_err(SiteError::UnexpectedError)?;

    let page = TeamPage {
        layout: Layout::new(translator, &context, &JoinModalActions),
        title: navbar.t("team"),
        heading: Heading::new(
            &t.t("title"),
            preferences.editing.then_some(links::ADD_MEMBER),
        ),
        content,
    };

    render_page(&page)
}

fn view_name(view: &PageViewState) -> &'static str {
    match view {
        PageViewState::Loading => "loading",
        PageViewState::Error(_) => "error",
        PageViewState::Empty => "empty",
        PageViewState::Populated(_) => "populated",
    }
}

use askama::Template;
use axum::{
    extract::{OriginalUri, Query, State},
    http::StatusCode,
    response::Html,
};

use crate::{
    app_state::AppState,
    components::{JoinModalActions, Layout, PageContext},
    domain::{PageQuery, Preferences, SiteError},
    services::translator::namespaces,
};

use super::render_page;

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub layout: Layout,
    pub message: String,
    pub back_label: String,
}

#[tracing::instrument(name = "Not found route handler", skip_all)]
pub async fn not_found(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    preferences: Preferences,
    query: Option<Query<PageQuery>>,
) -> Result<(StatusCode, Html<String>), SiteError> {
    tracing::debug!("no route for {uri}");

    let query = query.map(|Query(query)| query).unwrap_or_default();
    let context = PageContext::new(uri.path(), preferences, query);
    let t = state
        .translator
        .namespace(preferences.locale, namespaces::COMMON);

    let page = NotFoundPage {
        layout: Layout::new(&state.translator, &context, &JoinModalActions),
        message: t.t("not-found"),
        back_label: t.t("back-home"),
    };

    Ok((StatusCode::NOT_FOUND, render_page(&page)?))
}

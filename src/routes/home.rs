use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};

use crate::{
    app_state::AppState,
    components::{CallToActionSection, JoinModalActions, Layout, PageContext},
    domain::{PageQuery, Preferences, SiteError},
};

use super::render_page;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage {
    pub layout: Layout,
    pub call_to_action: CallToActionSection,
}

#[tracing::instrument(name = "Home page route handler", skip_all)]
pub async fn home_page(
    State(state): State<AppState>,
    preferences: Preferences,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, SiteError> {
    let context = PageContext::new("/", preferences, query);

    let page = HomePage {
        layout: Layout::new(&state.translator, &context, &JoinModalActions),
        call_to_action: CallToActionSection::new(
            &state.translator,
            &context,
            &JoinModalActions,
        ),
    };

    render_page(&page)
}

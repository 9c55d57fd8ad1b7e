mod home;
mod not_found;
mod preferences;
mod team;
mod team_data;

pub use home::*;
pub use not_found::*;
pub use preferences::*;
pub use team::*;
pub use team_data::*;

use askama::Template;
use axum::response::Html;
use color_eyre::eyre::WrapErr;

use crate::domain::SiteError;

fn render_page(page: &impl Template) -> Result<Html<String>, SiteError> {
    page.render()
        .map(Html)
        .wrap_err("failed to render page")
        .map_err(SiteError::UnexpectedError)
}

use axum::{http::HeaderValue, response::Redirect, Form};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;

use crate::domain::{
    Preferences, SiteError, ValidationError, COLOR_MODE_COOKIE_NAME,
    EDITING_MODE_COOKIE_NAME, LANGUAGE_COOKIE_NAME,
};

#[derive(Deserialize)]
pub struct ToggleRequest {
    return_to: String,
}

#[tracing::instrument(name = "Toggle language route handler", skip_all)]
pub async fn toggle_language(
    preferences: Preferences,
    jar: CookieJar,
    Form(request): Form<ToggleRequest>,
) -> Result<(CookieJar, Redirect), SiteError> {
    let locale = preferences.locale.toggled();
    tracing::debug!("switching language to {locale}");
    toggle(jar, LANGUAGE_COOKIE_NAME, locale.code(), request)
}

#[tracing::instrument(name = "Toggle theme route handler", skip_all)]
pub async fn toggle_theme(
    preferences: Preferences,
    jar: CookieJar,
    Form(request): Form<ToggleRequest>,
) -> Result<(CookieJar, Redirect), SiteError> {
    let color_mode = preferences.color_mode.toggled();
    tracing::debug!("switching color mode to {color_mode}");
    toggle(jar, COLOR_MODE_COOKIE_NAME, color_mode.as_str(), request)
}

#[tracing::instrument(name = "Toggle editing mode route handler", skip_all)]
pub async fn toggle_editing(
    preferences: Preferences,
    jar: CookieJar,
    Form(request): Form<ToggleRequest>,
) -> Result<(CookieJar, Redirect), SiteError> {
    let editing = if preferences.editing { "false" } else { "true" };
    tracing::debug!("setting editing mode to {editing}");
    toggle(jar, EDITING_MODE_COOKIE_NAME, editing, request)
}

fn toggle(
    jar: CookieJar,
    name: &'static str,
    value: &'static str,
    request: ToggleRequest,
) -> Result<(CookieJar, Redirect), SiteError> {
    let return_to = parse_return_to(&request.return_to)?;
    let jar = jar.add(create_preference_cookie(name, value));
    Ok((jar, Redirect::to(return_to)))
}

fn create_preference_cookie(
    name: &'static str,
    value: &'static str,
) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/") // apply cookie to all URLs on the server
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

/// Only paths on this site are valid redirect targets. They also have to fit
/// in a `Location` header.
fn parse_return_to(return_to: &str) -> Result<&str, ValidationError> {
    let is_local = return_to.starts_with('/')
        && !return_to.starts_with("//")
        && !return_to.contains('\\');
    let is_header_safe = !return_to.chars().any(char::is_control)
        && HeaderValue::from_str(return_to).is_ok();
    if is_local && is_header_safe {
        Ok(return_to)
    } else {
        Err(ValidationError::new(format!(
            "Invalid return path: {return_to}"
        )))
    }
}

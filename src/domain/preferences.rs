use axum::{
    extract::FromRequestParts,
    http::{header::ACCEPT_LANGUAGE, request::Parts, HeaderMap},
};
use axum_extra::extract::CookieJar;
use std::{convert::Infallible, fmt};

pub const LANGUAGE_COOKIE_NAME: &str = "lang";
pub const COLOR_MODE_COOKIE_NAME: &str = "color-mode";
pub const EDITING_MODE_COOKIE_NAME: &str = "editing-mode";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    pub fn parse(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "pt" => Some(Self::Pt),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pt => "pt",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::En => Self::Pt,
            Self::Pt => Self::En,
        }
    }

    /// Only the first language tag of the header is considered.
    fn from_accept_language(headers: &HeaderMap) -> Option<Self> {
        let header = headers.get(ACCEPT_LANGUAGE)?.to_str().ok()?;
        let first = header.split(',').next()?.trim().to_ascii_lowercase();
        if first.starts_with("pt") {
            Some(Self::Pt)
        } else {
            None
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Picks the light or dark variant of a themed value.
    pub fn value<T>(&self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-visitor settings carried in cookies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub locale: Locale,
    pub color_mode: ColorMode,
    pub editing: bool,
}

impl Preferences {
    pub fn from_request(jar: &CookieJar, headers: &HeaderMap) -> Self {
        let locale = jar
            .get(LANGUAGE_COOKIE_NAME)
            .and_then(|cookie| Locale::parse(cookie.value()))
            .or_else(|| Locale::from_accept_language(headers))
            .unwrap_or_default();

        let color_mode = jar
            .get(COLOR_MODE_COOKIE_NAME)
            .and_then(|cookie| ColorMode::parse(cookie.value()))
            .unwrap_or_default();

        let editing = jar
            .get(EDITING_MODE_COOKIE_NAME)
            .map(|cookie| cookie.value() == "true")
            .unwrap_or(false);

        Self {
            locale,
            color_mode,
            editing,
        }
    }
}

#[async_trait::async_trait]
impl<S> FromRequestParts<S> for Preferences
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self::from_request(&jar, &parts.headers))
    }
}

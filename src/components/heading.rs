use askama::Template;

use super::trans::{self, Segment};

/// Section title built from a translated string with `<span>` and `<btn>`
/// markup. `<btn>` only shows up when an add-member target is given.
#[derive(Template)]
#[template(path = "components/heading.html")]
pub struct Heading {
    pub segments: Vec<Segment>,
    pub add_button_href: Option<&'static str>,
}

impl Heading {
    pub fn new(message: &str, add_button_href: Option<&'static str>) -> Self {
        Self {
            segments: trans::parse(message),
            add_button_href,
        }
    }
}

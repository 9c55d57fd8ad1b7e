use askama::Template;

use crate::services::translator::{namespaces, Translator};

use super::{layout::PageContext, Heading, ModalActions};

#[derive(Template)]
#[template(path = "components/call_to_action.html")]
pub struct CallToActionSection {
    pub heading: Heading,
    pub description: String,
    pub main_label: String,
    pub main_href: String,
    pub secondary_label: String,
}

impl CallToActionSection {
    pub fn new(
        translator: &Translator,
        context: &PageContext<'_>,
        modal_actions: &dyn ModalActions,
    ) -> Self {
        let t = translator
            .namespace(context.preferences.locale, namespaces::CALL_TO_ACTION);
        Self {
            heading: Heading::new(&t.t("title"), None),
            description: t.t("description"),
            main_label: t.t("mainButton"),
            main_href: modal_actions.open(context.path, context.query.menu),
            secondary_label: t.t("secondaryButton"),
        }
    }
}

use crate::{
    domain::{ColorMode, Locale, PageQuery, Preferences},
    services::translator::Translator,
};

use super::{JoinModal, ModalActions, NavBar};

/// Everything a page knows about the request it is rendering for.
pub struct PageContext<'a> {
    pub path: &'a str,
    pub preferences: Preferences,
    pub query: PageQuery,
}

impl<'a> PageContext<'a> {
    pub fn new(path: &'a str, preferences: Preferences, query: PageQuery) -> Self {
        Self {
            path,
            preferences,
            query,
        }
    }

    /// This page as it is now, minus any open modal.
    pub fn current_href(&self) -> String {
        PageQuery::href(self.path, self.query.menu, None)
    }
}

/// Shell shared by all pages: document settings, navbar and modal.
pub struct Layout {
    pub lang: Locale,
    pub color_mode: ColorMode,
    pub navbar: NavBar,
    pub modal: Option<JoinModal>,
}

impl Layout {
    pub fn new(
        translator: &Translator,
        context: &PageContext<'_>,
        modal_actions: &dyn ModalActions,
    ) -> Self {
        Self {
            lang: context.preferences.locale,
            color_mode: context.preferences.color_mode,
            navbar: NavBar::new(translator, context, modal_actions),
            modal: JoinModal::for_page(translator, context),
        }
    }
}

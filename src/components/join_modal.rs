use askama::Template;

use crate::{
    domain::{MenuState, PageQuery},
    services::translator::{namespaces, Translator},
    utils::constants::links,
};

use super::layout::PageContext;

pub const JOIN_MODAL: &str = "join";

/// The "open" affordance handed to components that can show the join
/// modal. Components never decide for themselves how the modal opens.
pub trait ModalActions {
    /// Link that opens the modal on top of `path`.
    fn open(&self, path: &str, menu: MenuState) -> String;
}

pub struct JoinModalActions;

impl ModalActions for JoinModalActions {
    fn open(&self, path: &str, menu: MenuState) -> String {
        PageQuery::href(path, menu, Some(JOIN_MODAL))
    }
}

#[derive(Template)]
#[template(path = "components/join_modal.html")]
pub struct JoinModal {
    pub title: String,
    pub description: String,
    pub link_label: String,
    pub link_href: &'static str,
    pub close_label: String,
    pub close_href: String,
}

impl JoinModal {
    /// Present only when the page was asked to show it.
    pub fn for_page(
        translator: &Translator,
        context: &PageContext<'_>,
    ) -> Option<Self> {
        if context.query.modal.as_deref() != Some(JOIN_MODAL) {
            return None;
        }

        let t = translator.namespace(context.preferences.locale, namespaces::MODAL);
        Some(Self {
            title: t.t("title"),
            description: t.t("description"),
            link_label: t.t("link"),
            link_href: links::FORUM,
            close_label: t.t("close"),
            close_href: context.current_href(),
        })
    }
}

use askama::Template;

use crate::{
    domain::{ColorMode, Locale, PageQuery},
    services::translator::{namespaces, Translator},
    utils::constants::links,
};

use super::{layout::PageContext, ModalActions};

const GRAY_50: &str = "#F7FAFC";
const GRAY_900: &str = "#171923";

pub struct NavLink {
    pub label: String,
    pub href: &'static str,
    pub external: bool,
}

/// A one-field form that flips a preference and comes back to the page.
pub struct ToggleForm {
    pub action: &'static str,
    pub label: String,
    pub symbol: &'static str,
    pub return_to: String,
}

#[derive(Template)]
#[template(path = "components/action_buttons.html")]
pub struct ActionButtons {
    pub github: &'static str,
    pub linkedin: &'static str,
    pub toggles: Vec<ToggleForm>,
}

#[derive(Template)]
#[template(path = "components/navbar.html")]
pub struct NavBar {
    pub background: &'static str,
    pub home_href: &'static str,
    pub community_links: Vec<NavLink>,
    pub action_buttons: ActionButtons,
    pub join_label: String,
    pub join_href: String,
    pub menu_open: bool,
    pub menu_toggle_href: String,
    pub menu_toggle_label: String,
}

impl NavBar {
    pub fn new(
        translator: &Translator,
        context: &PageContext<'_>,
        modal_actions: &dyn ModalActions,
    ) -> Self {
        let locale = context.preferences.locale;
        let t = translator.namespace(locale, namespaces::NAVBAR);
        let common = translator.namespace(locale, namespaces::COMMON);
        let menu = context.query.menu;

        let community_links = vec![
            NavLink {
                label: t.t("team"),
                href: "/team",
                external: false,
            },
            NavLink {
                label: t.t("wiki"),
                href: links::WIKI,
                external: true,
            },
            NavLink {
                label: t.t("forum"),
                href: links::FORUM,
                external: true,
            },
        ];

        let return_to = context.current_href();
        let mut toggles = vec![
            ToggleForm {
                action: "/preferences/language",
                label: common.t("toggle-language"),
                symbol: language_symbol(locale),
                return_to: return_to.clone(),
            },
            ToggleForm {
                action: "/preferences/theme",
                label: common.t("toggle-theme"),
                symbol: theme_symbol(context.preferences.color_mode),
                return_to: return_to.clone(),
            },
        ];
        if context.preferences.editing {
            toggles.push(ToggleForm {
                action: "/preferences/editing",
                label: common.t("toggle-editing"),
                symbol: "✎",
                return_to,
            });
        }

        let menu_toggle_label = if menu.is_open() {
            t.t("close-menu")
        } else {
            t.t("open-menu")
        };

        Self {
            background: context.preferences.color_mode.value(GRAY_50, GRAY_900),
            home_href: "/",
            community_links,
            action_buttons: ActionButtons {
                github: links::GITHUB,
                linkedin: links::LINKEDIN,
                toggles,
            },
            join_label: t.t("join"),
            join_href: modal_actions.open(context.path, menu),
            menu_open: menu.is_open(),
            menu_toggle_href: PageQuery::href(context.path, menu.toggled(), None),
            menu_toggle_label,
        }
    }
}

// The toggle shows the language it switches to
fn language_symbol(locale: Locale) -> &'static str {
    match locale.toggled() {
        Locale::En => "EN",
        Locale::Pt => "PT",
    }
}

fn theme_symbol(color_mode: ColorMode) -> &'static str {
    color_mode.value("☾", "☀")
}

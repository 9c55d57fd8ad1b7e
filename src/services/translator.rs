use color_eyre::eyre::{Result, WrapErr};
use std::collections::HashMap;

use crate::domain::Locale;

pub mod namespaces {
    pub const NAVBAR: &str = "navbar";
    pub const CALL_TO_ACTION: &str = "callToAction";
    pub const TEAM_PAGE: &str = "team-page";
    pub const MODAL: &str = "modal";
    pub const COMMON: &str = "common";
}

const EMBEDDED_CATALOGS: &[(Locale, &str, &str)] = &[
    (Locale::En, namespaces::NAVBAR, include_str!("../../locales/en/navbar.json")),
    (Locale::En, namespaces::CALL_TO_ACTION, include_str!("../../locales/en/callToAction.json")),
    (Locale::En, namespaces::TEAM_PAGE, include_str!("../../locales/en/team-page.json")),
    (Locale::En, namespaces::MODAL, include_str!("../../locales/en/modal.json")),
    (Locale::En, namespaces::COMMON, include_str!("../../locales/en/common.json")),
    (Locale::Pt, namespaces::NAVBAR, include_str!("../../locales/pt/navbar.json")),
    (Locale::Pt, namespaces::CALL_TO_ACTION, include_str!("../../locales/pt/callToAction.json")),
    (Locale::Pt, namespaces::TEAM_PAGE, include_str!("../../locales/pt/team-page.json")),
    (Locale::Pt, namespaces::MODAL, include_str!("../../locales/pt/modal.json")),
    (Locale::Pt, namespaces::COMMON, include_str!("../../locales/pt/common.json")),
];

type Catalog = HashMap<String, String>;

/// Message catalogs keyed by locale and namespace.
#[derive(Debug, Default)]
pub struct Translator {
    catalogs: HashMap<(Locale, String), Catalog>,
}

impl Translator {
    /// Catalogs compiled into the binary.
    pub fn embedded() -> Result<Self> {
        Self::from_sources(EMBEDDED_CATALOGS.iter().copied())
    }

    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str, &'a str)>,
    ) -> Result<Self> {
        let mut catalogs = HashMap::new();
        for (locale, namespace, source) in sources {
            let catalog: Catalog = serde_json::from_str(source).wrap_err(
                format!("failed to parse {locale}/{namespace} catalog"),
            )?;
            catalogs.insert((locale, namespace.to_owned()), catalog);
        }
        Ok(Self { catalogs })
    }

    pub fn namespace<'a>(
        &'a self,
        locale: Locale,
        namespace: &'a str,
    ) -> Namespace<'a> {
        Namespace {
            translator: self,
            locale,
            namespace,
        }
    }

    fn lookup(&self, locale: Locale, namespace: &str, key: &str) -> Option<&str> {
        self.catalogs
            .get(&(locale, namespace.to_owned()))
            .and_then(|catalog| catalog.get(key))
            .map(String::as_str)
    }
}

/// `t` bound to one locale and namespace.
#[derive(Clone, Copy)]
pub struct Namespace<'a> {
    translator: &'a Translator,
    locale: Locale,
    namespace: &'a str,
}

impl<'a> Namespace<'a> {
    /// Falls back to English, then to the key itself.
    pub fn t(&self, key: &str) -> String {
        self.translator
            .lookup(self.locale, self.namespace, key)
            .or_else(|| self.translator.lookup(Locale::En, self.namespace, key))
            .unwrap_or(key)
            .to_owned()
    }
}

use serde::Deserialize;

/// Collapsible mobile menu. Lives only in the page URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }
}

/// Query parameters every page understands.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub menu: MenuState,
    pub modal: Option<String>,
}

impl PageQuery {
    /// Link to `path` carrying the given menu and modal state.
    pub fn href(path: &str, menu: MenuState, modal: Option<&str>) -> String {
        let mut params = Vec::new();
        if menu.is_open() {
            params.push("menu=open".to_owned());
        }
        if let Some(modal) = modal {
            params.push(format!("modal={modal}"));
        }
        if params.is_empty() {
            path.to_owned()
        } else {
            format!("{path}?{}", params.join("&"))
        }
    }
}

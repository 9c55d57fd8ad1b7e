use super::{DisplayMember, FetchError};

/// Outcome of one generation cycle of the team page.
pub type TeamProps = Result<Vec<DisplayMember>, FetchError>;

#[derive(Debug, Clone, PartialEq)]
pub enum PageViewState {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<DisplayMember>),
}

impl PageViewState {
    /// `None` means no generation has finished yet.
    pub fn from_props(props: Option<TeamProps>) -> Self {
        match props {
            None => Self::Loading,
            Some(Err(error)) => Self::Error(error.message),
            Some(Ok(members)) if members.is_empty() => Self::Empty,
            Some(Ok(members)) => Self::Populated(members),
        }
    }
}

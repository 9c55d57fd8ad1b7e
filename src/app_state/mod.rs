use std::{sync::Arc, time::Duration};

use crate::{
    domain::MemberAccessor,
    services::{team_page_cache::TeamPageCache, translator::Translator},
};

pub type MemberAccessorType = Arc<dyn MemberAccessor + Send + Sync>;
pub type TranslatorType = Arc<Translator>;

#[derive(Clone)]
pub struct AppState {
    pub translator: TranslatorType,
    pub team_page: TeamPageCache,
}

impl AppState {
    pub fn new(
        member_accessor: MemberAccessorType,
        translator: TranslatorType,
        team_page_revalidate: Duration,
    ) -> Self {
        Self {
            team_page: TeamPageCache::new(member_accessor, team_page_revalidate),
            translator,
        }
    }
}

use chrono::{DateTime, Utc};
use std::{sync::Arc, time::Duration};
use tokio::sync::Mutex;

use crate::{
    app_state::MemberAccessorType,
    domain::{FetchError, TeamProps},
    utils::members::process_members,
};

enum Slot {
    Vacant,
    Generating,
    Ready {
        props: TeamProps,
        generated_at: DateTime<Utc>,
        regenerating: bool,
    },
}

/// Props of the team page, regenerated in the background once they are
/// older than the revalidation interval. At most one fetch is in flight.
#[derive(Clone)]
pub struct TeamPageCache {
    member_accessor: MemberAccessorType,
    revalidate: Duration,
    slot: Arc<Mutex<Slot>>,
}

impl TeamPageCache {
    pub fn new(member_accessor: MemberAccessorType, revalidate: Duration) -> Self {
        Self {
            member_accessor,
            revalidate,
            slot: Arc::new(Mutex::new(Slot::Vacant)),
        }
    }

    /// Current props, or `None` while the very first generation is still
    /// running on behalf of another request.
    #[tracing::instrument(name = "Reading team page props", skip_all)]
    pub async fn props(&self) -> Option<TeamProps> {
        let mut slot = self.slot.lock().await;
        if matches!(*slot, Slot::Vacant) {
            *slot = Slot::Generating;
            drop(slot);
            return Some(self.generate_detached().await);
        }

        match &mut *slot {
            Slot::Vacant | Slot::Generating => None,
            Slot::Ready {
                props,
                generated_at,
                regenerating,
            } => {
                if !*regenerating && self.is_stale(generated_at) {
                    *regenerating = true;
                    let cache = self.clone();
                    tokio::spawn(async move {
                        cache.regenerate().await;
                    });
                }
                Some(props.clone())
            }
        }
    }

    fn is_stale(&self, generated_at: &DateTime<Utc>) -> bool {
        let age = Utc::now().signed_duration_since(*generated_at);
        // A clock that went backwards counts as fresh
        age.to_std().map_or(false, |age| age >= self.revalidate)
    }

    // Runs on its own task so a dropped request cannot leave the slot stuck
    // in `Generating`.
    async fn generate_detached(&self) -> TeamProps {
        let cache = self.clone();
        match tokio::spawn(async move { cache.generate().await }).await {
            Ok(props) => props,
            Err(e) => {
                tracing::error!("team page generation task failed: {e}");
                *self.slot.lock().await = Slot::Vacant;
                Err(FetchError::new("Unexpected error"))
            }
        }
    }

    // A panicking regeneration keeps the stale props and frees the slot for
    // the next stale read.
    async fn regenerate(&self) {
        let cache = self.clone();
        if let Err(e) = tokio::spawn(async move { cache.generate().await }).await {
            tracing::error!("team page regeneration task failed: {e}");
            if let Slot::Ready { regenerating, .. } = &mut *self.slot.lock().await {
                *regenerating = false;
            }
        }
    }

    async fn generate(&self) -> TeamProps {
        let props = fetch_team_props(&self.member_accessor).await;
        *self.slot.lock().await = Slot::Ready {
            props: props.clone(),
            generated_at: Utc::now(),
            regenerating: false,
        };
        props
    }
}

/// One generation cycle: fetch, then shorten names. Failures stop here.
#[tracing::instrument(name = "Generating team page props", skip_all)]
pub async fn fetch_team_props(member_accessor: &MemberAccessorType) -> TeamProps {
    match member_accessor.list().await {
        Ok(members) => {
            tracing::info!("generated team page with {} members", members.len());
            Ok(process_members(members))
        }
        Err(report) => {
            let error = FetchError::from(report);
            tracing::warn!("member listing failed: {}", error.message);
            Err(error)
        }
    }
}

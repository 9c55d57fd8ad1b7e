use color_eyre::eyre::{eyre, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Member, MemberAccessor};

/// Ordered member list held in memory. Can be told to fail so the error
/// path of a page can be exercised without a service.
#[derive(Clone, Default)]
pub struct InMemoryMemberAccessor {
    members: Arc<RwLock<Vec<Member>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl InMemoryMemberAccessor {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members: Arc::new(RwLock::new(members)),
            failure: Arc::default(),
        }
    }

    pub async fn set_members(&self, members: Vec<Member>) {
        *self.members.write().await = members;
        *self.failure.write().await = None;
    }

    pub async fn fail_with(&self, message: &str) {
        *self.failure.write().await = Some(message.to_owned());
    }
}

#[async_trait::async_trait]
impl MemberAccessor for InMemoryMemberAccessor {
    async fn list(&self) -> Result<Vec<Member>> {
        if let Some(message) = self.failure.read().await.as_ref() {
            return Err(eyre!("{message}"));
        }
        Ok(self.members.read().await.clone())
    }
}

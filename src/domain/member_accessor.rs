use color_eyre::eyre::Result;

use super::Member;

/// Read side of the member-listing service.
#[async_trait::async_trait]
pub trait MemberAccessor {
    /// Members in the order the service returned them.
    async fn list(&self) -> Result<Vec<Member>>;
}

use color_eyre::eyre::{eyre, Result, WrapErr};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::{Member, MemberAccessor, MemberId, MemberName};

const MALFORMED_LISTING: &str = "Member service returned a malformed listing";

/// Talks to the member-listing service over HTTP.
pub struct HttpMemberAccessor {
    http_client: Client,
    base_url: String,
    auth_token: Option<Secret<String>>,
}

impl HttpMemberAccessor {
    pub fn new(
        base_url: String,
        auth_token: Option<Secret<String>>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            auth_token,
        }
    }

    fn members_url(&self) -> String {
        format!("{}/members", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait::async_trait]
impl MemberAccessor for HttpMemberAccessor {
    #[tracing::instrument(name = "Listing members from member service", skip_all)]
    async fn list(&self) -> Result<Vec<Member>> {
        let mut request = self.http_client.get(self.members_url());
        if let Some(token) = &self.auth_token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request
            .send()
            .await
            .wrap_err("Failed to reach the member service")?;

        let status = response.status();
        if !status.is_success() {
            return Err(eyre!(
                "Request failed with status code {}",
                status.as_u16()
            ));
        }

        let records: Vec<MemberRecord> =
            response.json().await.wrap_err(MALFORMED_LISTING)?;
        tracing::debug!("member service returned {} records", records.len());

        records.into_iter().map(MemberRecord::into_member).collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MemberRecord {
    id: String,
    name: String,
    #[serde(default)]
    role: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    github_url: Option<String>,
}

impl MemberRecord {
    fn into_member(self) -> Result<Member> {
        let id = MemberId::parse(self.id).wrap_err(MALFORMED_LISTING)?;
        let photo_url = checked_url(&id, "photoUrl", self.photo_url);
        let github_url = checked_url(&id, "githubUrl", self.github_url);

        Ok(Member {
            id,
            name: MemberName::new(self.name),
            role: self.role,
            photo_url,
            github_url,
        })
    }
}

// Bad links are dropped rather than failing the whole listing
fn checked_url(
    id: &MemberId,
    field: &str,
    url: Option<String>,
) -> Option<String> {
    match url {
        Some(url) if validator::validate_url(url.as_str()) => Some(url),
        Some(url) => {
            tracing::warn!("dropping invalid {field} for member {id}: {url:?}");
            None
        }
        None => None,
    }
}

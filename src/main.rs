use std::sync::Arc;

use podcodar_site::{
    app_state::AppState,
    services::{
        member_accessors::HttpMemberAccessor, translator::Translator,
    },
    utils::{
        constants::{
            prod, MEMBERS_SERVICE_TOKEN, MEMBERS_SERVICE_URL,
            TEAM_PAGE_REVALIDATE,
        },
        tracing::init_tracing,
    },
    Application,
};
use reqwest::Client;

#[tokio::main]
async fn main() {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialise tracing");

    let member_accessor = Arc::new(configure_member_accessor());
    let translator = Arc::new(
        Translator::embedded().expect("Failed to load translation catalogs"),
    );

    tracing::info!(
        "team page revalidates every {}s from {}",
        TEAM_PAGE_REVALIDATE.as_secs(),
        MEMBERS_SERVICE_URL.as_str()
    );

    let app_state =
        AppState::new(member_accessor, translator, *TEAM_PAGE_REVALIDATE);

    let app = Application::build(app_state, prod::APP_ADDRESS)
        .await
        .expect("Failed to build app");

    app.run().await.expect("Failed to run app");
}

fn configure_member_accessor() -> HttpMemberAccessor {
    let http_client = Client::builder()
        .timeout(prod::members_service::TIMEOUT)
        .build()
        .expect("Failed to build HTTP client");

    HttpMemberAccessor::new(
        MEMBERS_SERVICE_URL.to_owned(),
        MEMBERS_SERVICE_TOKEN.clone(),
        http_client,
    )
}

use dotenvy::dotenv;
use lazy_static::lazy_static;
use secrecy::Secret;
use std::{env as std_env, time::Duration};

lazy_static! {
    pub static ref MEMBERS_SERVICE_URL: String =
        load_or_default(env::MEMBERS_SERVICE_URL_ENV_VAR, DEFAULT_MEMBERS_SERVICE_URL);
    pub static ref MEMBERS_SERVICE_TOKEN: Option<Secret<String>> =
        set_members_service_token();
    pub static ref TEAM_PAGE_REVALIDATE: Duration = set_team_page_revalidate();
}

fn load_env() {
    dotenv().ok();
}

fn set_members_service_token() -> Option<Secret<String>> {
    load_env();
    std_env::var(env::MEMBERS_SERVICE_TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
        .map(Secret::new)
}

fn set_team_page_revalidate() -> Duration {
    let seconds = load_or_default(
        env::TEAM_PAGE_REVALIDATE_SECONDS_ENV_VAR,
        &DEFAULT_TEAM_PAGE_REVALIDATE_SECONDS.to_string(),
    );
    match seconds.parse::<u64>() {
        Ok(seconds) => Duration::from_secs(seconds),
        Err(_) => {
            tracing::warn!(
                "{} is not a number of seconds: {seconds}",
                env::TEAM_PAGE_REVALIDATE_SECONDS_ENV_VAR
            );
            Duration::from_secs(DEFAULT_TEAM_PAGE_REVALIDATE_SECONDS)
        }
    }
}

fn load_or_default(variable_name: &str, default_value: &str) -> String {
    load_env();

    match std_env::var(variable_name) {
        Ok(value) => {
            if value.is_empty() {
                String::from(default_value)
            } else {
                value
            }
        }
        Err(_) => String::from(default_value),
    }
}

pub mod env {
    pub const MEMBERS_SERVICE_URL_ENV_VAR: &str = "MEMBERS_SERVICE_URL";
    pub const MEMBERS_SERVICE_TOKEN_ENV_VAR: &str = "MEMBERS_SERVICE_TOKEN";
    pub const TEAM_PAGE_REVALIDATE_SECONDS_ENV_VAR: &str =
        "TEAM_PAGE_REVALIDATE_SECONDS";
}

pub const DEFAULT_MEMBERS_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TEAM_PAGE_REVALIDATE_SECONDS: u64 = 100;
pub const ASSETS_DIR: &str = "assets";

pub mod links {
    pub const GITHUB: &str = "https://github.com/podcodar";
    pub const LINKEDIN: &str = "https://www.linkedin.com/company/podcodar/";
    pub const WIKI: &str = "http://wiki.podcodar.com";
    pub const FORUM: &str = "https://github.com/podcodar/forum/discussions";
    pub const ADD_MEMBER: &str = "/app/add-member";
}

pub mod prod {
    pub const APP_ADDRESS: &str = "0.0.0.0:3000";
    pub mod members_service {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_secs(10);
    }
}

pub mod test {
    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub mod members_service {
        use std::time::Duration;

        pub const TIMEOUT: Duration = std::time::Duration::from_millis(500);
    }
}

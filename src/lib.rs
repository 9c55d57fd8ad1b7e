use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    serve::Serve,
    Router,
};

use std::error::Error;
use tokio::signal;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::Level;

use domain::SiteError;
pub mod routes;
use crate::utils::{constants::ASSETS_DIR, tracing::*};
use routes::{
    home_page, not_found, team_data, team_page, toggle_editing,
    toggle_language, toggle_theme,
};
pub mod app_state;
pub mod components;
pub mod domain;
pub mod services;
use app_state::AppState;
pub mod utils;

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            SiteError::ValidationError(error) => {
                log_error_chain(&self, Level::DEBUG);
                (StatusCode::BAD_REQUEST, error.as_ref().to_owned())
            }
            SiteError::UnexpectedError(_) => {
                log_error_chain(&self, Level::ERROR);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Unexpected error".to_string(),
                )
            }
        };
        (status, error_message).into_response()
    }
}

fn log_error_chain(e: &(dyn Error + 'static), debug_level: Level) {
    let separator =
        "\n-----------------------------------------------------------------------------------\n";
    let mut report = format!("{}{:?}\n", separator, e);
    let mut current = e.source();
    while let Some(cause) = current {
        let str = format!("Caused by:\n\n{:?}", cause);
        report = format!("{}\n{}", report, str);
        current = cause.source();
    }
    report = format!("{}\n{}", report, separator);
    match debug_level {
        Level::ERROR => tracing::error!("{}", report),
        Level::WARN => tracing::warn!("{}", report),
        Level::INFO => tracing::info!("{}", report),
        Level::DEBUG => tracing::debug!("{}", report),
        Level::TRACE => tracing::trace!("{}", report),
    }
}

pub struct Application {
    server: Serve<Router, Router>,
    pub address: String,
}

impl Application {
    pub async fn build(
        app_state: AppState,
        address: &str,
    ) -> Result<Self, Box<dyn Error>> {
        let router = Router::new()
            .route("/", get(home_page))
            .route("/team", get(team_page))
            .route("/api/team", get(team_data))
            .route("/preferences/language", post(toggle_language))
            .route("/preferences/theme", post(toggle_theme))
            .route("/preferences/editing", post(toggle_editing))
            .nest_service("/assets", ServeDir::new(ASSETS_DIR))
            .fallback(not_found)
            .with_state(app_state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(make_span_with_request_id)
                    .on_request(on_request)
                    .on_response(on_response),
            );

        let listener = tokio::net::TcpListener::bind(address).await?;
        let address = listener.local_addr()?.to_string();
        let server = axum::serve(listener, router);

        Ok(Application { server, address })
    }

    pub async fn run(self) -> Result<(), std::io::Error> {
        tracing::info!("listening on {}", &self.address);
        self.server.with_graceful_shutdown(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

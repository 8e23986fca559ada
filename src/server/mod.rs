//! HTTP transport layer.
//!
//! A thin axum layer over [`DogService`]:
//! - `GET /ping` — version probe
//! - `GET /dogs` — list records with optional sorting and paging
//! - `POST /dog` — create a record
//!
//! Request binding and field-level shape validation happen here; the
//! planner and service own everything else. Error translation to status
//! codes and `{"error": message}` bodies lives in [`errors`].

mod errors;
mod params;

pub use errors::{ApiError, ErrorResponse};
pub use params::ListParams;

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::trace::TraceLayer;

use crate::service::DogService;
use crate::traits::Dog;

/// Version string returned by the ping endpoint.
pub const SERVICE_VERSION: &str = "Dogshouseservice.Version1.0.1";

/// The HTTP server.
pub struct HttpServer {
    service: Arc<DogService>,
}

impl HttpServer {
    /// Create a new server over the given service.
    #[must_use]
    pub fn new(service: DogService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// Build the axum router.
    #[must_use]
    pub fn router(self) -> Router {
        Router::new()
            .route("/ping", get(ping_handler))
            .route("/dogs", get(list_dogs_handler))
            .route("/dog", post(create_dog_handler))
            .layer(TraceLayer::new_for_http())
            .with_state(self.service)
    }

    /// Bind and serve until the process receives Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns an [`std::io::Error`] if binding or serving fails.
    pub async fn serve(self, bind_addr: &str) -> std::io::Result<()> {
        let listener = tokio::net::TcpListener::bind(bind_addr).await?;
        tracing::info!("listening on {bind_addr}");
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install Ctrl-C handler: {e}");
    }
}

/// Shared state type.
type ServerState = Arc<DogService>;

/// Version probe handler.
async fn ping_handler() -> &'static str {
    SERVICE_VERSION
}

/// List records handler.
async fn list_dogs_handler(
    State(service): State<ServerState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Dog>>, ApiError> {
    let dogs = service
        .list_dogs(
            &params.attribute,
            &params.order,
            params.page_number,
            params.page_size,
        )
        .await?;
    Ok(Json(dogs))
}

/// Create record handler.
///
/// Shape constraints are checked here at the binding step; the service
/// assumes them satisfied and only enforces the uniqueness rule.
async fn create_dog_handler(
    State(service): State<ServerState>,
    Json(dog): Json<Dog>,
) -> Result<StatusCode, ApiError> {
    dog.validate()
        .map_err(|message| ApiError::InvalidBody(message.to_string()))?;
    service.create_dog(&dog).await?;
    Ok(StatusCode::CREATED)
}

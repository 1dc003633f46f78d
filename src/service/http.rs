//! HTTP surface for lannz-ai.
//!
//! Exposes `POST /ask` (and a `GET /health` probe) with an open CORS policy,
//! since the caller is a browser front-end served from another origin.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, instrument, warn};

use crate::{
    base::types::{AskError, AskRequest, AskResponse, ErrorResponse, Void},
    interaction::ask::{extract_question, handle_ask},
    runtime::Runtime,
};

impl IntoResponse for AskError {
    fn into_response(self) -> Response {
        let status = match self {
            AskError::InvalidRequest => StatusCode::BAD_REQUEST,
            AskError::BackendUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse { error: self.to_string() })).into_response()
    }
}

/// Build the application router around the given runtime.
pub fn router(runtime: Runtime) -> Router {
    Router::new()
        .route("/ask", post(ask))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(runtime)
}

/// Serve `app` on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener, app: Router) -> Void {
    info!("Listening on http://{} ...", listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    Ok(())
}

/// `POST /ask`
///
/// A body that is not JSON is treated the same as one without a question.
#[instrument(skip_all)]
async fn ask(State(runtime): State<Runtime>, body: Result<Json<AskRequest>, JsonRejection>) -> Result<Json<AskResponse>, AskError> {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected request body: {rejection}");
            AskRequest::default()
        }
    };

    let question = extract_question(&request)?;
    let answer = handle_ask(&runtime.facts, &runtime.llm, &question).await?;

    Ok(Json(AskResponse { answer }))
}

/// `GET /health`
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Unable to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }

    info!("Shutting down ...");
}

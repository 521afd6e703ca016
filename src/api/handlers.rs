//! HTTP request handlers

use super::types::{ErrorResponse, HealthResponse, WebhookForm};
use super::AppState;
use crate::session::Session;
use crate::state_machine::{Endpoint, Event};
use crate::twiml::RenderError;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Call entry, and the target of every fallback redirect
        .route(Endpoint::Voice.path(), post(voice_entry))
        // Digit handlers, one per menu state
        .route(Endpoint::HandleMenu.path(), post(handle_menu))
        .route(Endpoint::HandlePnr.path(), post(handle_pnr))
        .route(Endpoint::HandleTrain.path(), post(handle_train))
        .route(Endpoint::HandlePnrOptions.path(), post(handle_pnr_options))
        .route(Endpoint::HandleTrainOptions.path(), post(handle_train_options))
        // Diagnostics
        .route("/health", get(health))
        .route("/api/sessions/:call_sid", get(get_session))
        .with_state(state)
}

// ============================================================
// Telephony Webhooks
// ============================================================

async fn voice_entry(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    let event = Event::CallStarted {
        caller: form.from.clone(),
    };
    respond(&state, Endpoint::Voice, form.call_sid(), event)
}

async fn handle_menu(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    respond_to_digits(&state, Endpoint::HandleMenu, &form)
}

async fn handle_pnr(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    respond_to_digits(&state, Endpoint::HandlePnr, &form)
}

async fn handle_train(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    respond_to_digits(&state, Endpoint::HandleTrain, &form)
}

async fn handle_pnr_options(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    respond_to_digits(&state, Endpoint::HandlePnrOptions, &form)
}

async fn handle_train_options(
    State(state): State<AppState>,
    Form(form): Form<WebhookForm>,
) -> Result<Response, AppError> {
    respond_to_digits(&state, Endpoint::HandleTrainOptions, &form)
}

fn respond_to_digits(
    state: &AppState,
    endpoint: Endpoint,
    form: &WebhookForm,
) -> Result<Response, AppError> {
    let event = Event::digits(form.digits.as_deref());
    respond(state, endpoint, form.call_sid(), event)
}

/// Run the call flow for a webhook and render the reply as TwiML
fn respond(
    state: &AppState,
    endpoint: Endpoint,
    call_sid: &str,
    event: Event,
) -> Result<Response, AppError> {
    let result = state
        .runtime
        .handle(call_sid, endpoint.menu_state(), event);
    let twiml = state.renderer.render(&result.descriptor)?;

    Ok(([(header::CONTENT_TYPE, "application/xml")], twiml).into_response())
}

// ============================================================
// Diagnostics
// ============================================================

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "IRCTC IVR Backend",
        version: env!("CARGO_PKG_VERSION"),
        active_sessions: state.runtime.sessions().active_session_count(),
    })
}

async fn get_session(
    State(state): State<AppState>,
    Path(call_sid): Path<String>,
) -> Result<Json<Session>, AppError> {
    state
        .runtime
        .sessions()
        .get_session(&call_sid)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No active session for call {call_sid}")))
}

// ============================================================
// Error Handling
// ============================================================

enum AppError {
    NotFound(String),
    Internal(String),
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        tracing::error!(error = %err, "Failed to render TwiML");
        AppError::Internal(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse::new(message));
        (status, body).into_response()
    }
}

//! Alias endpoints
//!
//! `/aliases` is the only resource: GET lists, POST saves, anything else
//! is answered with 405 and never reaches the store.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{on, MethodFilter},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::models::{Alias, SaveAlias};
use crate::state::AppState;

/// GET /aliases - list every alias
async fn list_aliases(State(state): State<AppState>) -> Result<Json<Vec<Alias>>, ApiError> {
    let aliases = state.store().list().await?;
    Ok(Json(aliases))
}

/// POST /aliases - create or update an alias by name
async fn save_alias(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<SaveAlias>,
) -> Result<(StatusCode, String), ApiError> {
    let alias = state.store().upsert(&req.name, &req.text).await?;
    tracing::debug!(id = alias.id, name = %alias.name, "Alias saved");

    Ok((StatusCode::CREATED, req.confirmation()))
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Alias routes
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/aliases",
        // `get` would also answer HEAD; only GET and POST are served here
        on(MethodFilter::GET, list_aliases)
            .post(save_alias)
            .fallback(method_not_allowed),
    )
}

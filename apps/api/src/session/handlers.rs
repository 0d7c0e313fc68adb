//! Axum route handlers for session creation and navigation.

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::session::{NavAction, Page};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub page: Page,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct NavigateRequest {
    pub action: NavAction,
}

#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub session_id: Uuid,
    pub page: Page,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let (session_id, session) = state.sessions.create();
    Json(SessionResponse {
        session_id,
        page: session.page,
        created_at: session.created_at,
    })
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NavigateResponse>, AppError> {
    let page = state
        .sessions
        .page(id)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(NavigateResponse {
        session_id: id,
        page,
    }))
}

/// POST /api/v1/sessions/:id/navigate
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<NavigateRequest>,
) -> Result<Json<NavigateResponse>, AppError> {
    let page = state
        .sessions
        .navigate(id, request.action)
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;
    Ok(Json(NavigateResponse {
        session_id: id,
        page,
    }))
}

//! Employee handlers
//!
//! Four routes, each a direct translation of one service call. Every
//! successful request answers 200, including a GET of a missing id (body
//! `null`) and a DELETE of a missing id.

use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use employee_core::Employee;

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Employee>>, StatusCode> {
    match state.service.find_all().await {
        Ok(employees) => Ok(Json(employees)),
        Err(e) => {
            tracing::error!("Failed to list employees: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Option<Employee>>, StatusCode> {
    match state.service.find_by_id(id).await {
        // A miss serializes as `null` with status 200
        Ok(employee) => Ok(Json(employee)),
        Err(e) => {
            tracing::error!("Failed to get employee {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn create(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<Json<Employee>, StatusCode> {
    match state.service.save(&employee).await {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            tracing::error!("Failed to save employee: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    match state.service.delete_by_id(id).await {
        Ok(()) => Ok(StatusCode::OK),
        Err(e) => {
            tracing::error!("Failed to delete employee {}: {}", id, e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

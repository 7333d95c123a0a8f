use super::protocol::*;
use super::service::TaskService;
use super::types::Submission;

use axum::{
    Extension, Json, Router,
    extract::{Path, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;

/// Builds the task API router around a shared service.
pub fn router(service: Arc<TaskService>) -> Router {
    Router::new()
        .route(ENDPOINT_SUBMIT_TASK, post(handle_submit_task))
        .route(ENDPOINT_TASK_STATUS, get(handle_get_task_status))
        .layer(Extension(service))
}

/// Serializes `body` with the JSON content type clients expect.
pub fn write_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], bytes).into_response(),
        Err(e) => {
            tracing::error!("Failed to serialize response: {}", e);
            handle_error()
        }
    }
}

/// Uniform failure response: 422 with an empty JSON object.
pub fn handle_error() -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        "{}",
    )
        .into_response()
}

pub async fn handle_submit_task(
    Extension(service): Extension<Arc<TaskService>>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Response {
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(e) => {
            tracing::warn!("Rejected task submission: {}", e);
            return handle_error();
        }
    };

    if let Err(e) = submission.validate() {
        tracing::warn!("Invalid task submission: {}", e);
        return handle_error();
    }

    let task_id = service.submit(submission);
    let mut response = write_json(
        StatusCode::ACCEPTED,
        &SubmitTaskResponse {
            task_id: task_id.clone(),
        },
    );

    match task_location(&task_id).parse::<HeaderValue>() {
        Ok(location) => {
            response.headers_mut().insert(header::LOCATION, location);
        }
        Err(e) => tracing::error!("Invalid location header for {}: {}", task_id, e),
    }

    response
}

pub async fn handle_get_task_status(
    Extension(service): Extension<Arc<TaskService>>,
    Path(task_id): Path<String>,
) -> Response {
    match service.lookup(&task_id) {
        Some(record) => {
            tracing::debug!("Task status query: {} -> {}", task_id, record.status);
            write_json(StatusCode::OK, &record)
        }
        None => {
            tracing::debug!("Task not found: {}", task_id);
            write_json(StatusCode::NOT_FOUND, &serde_json::json!({}))
        }
    }
}

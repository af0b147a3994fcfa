use crate::AppConfig;
use crate::routes::api::quizzes::error::QuizApiError;
use axum::extract::{Path, Query};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Extension, Json, Router};
use http::StatusCode;
use quizmaster_core::quiz::{self as service, Verdict};
use quizmaster_model::quiz::quiz::{Quiz, QuizDraft, QuizFilter, QuizStatus};
use quizmaster_model::response::ActionResponse;
use sea_orm::DatabaseConnection;
use serde_json::json;
use tracing::instrument;

pub(crate) mod error;

#[cfg(test)]
mod tests;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_quizzes).post(create_quiz))
        .route("/published", get(list_published_quizzes))
        .nest(
            "/{quiz_id}",
            Router::new()
                .route("/", get(get_quiz))
                .route("/publish", put(publish_quiz)),
        )
        .with_state(())
}

#[utoipa::path(
    get,
    path = "/api/quizzes",
    params(QuizFilter),
    responses(
        (status = OK, body = Vec<Quiz>, description = "All quizzes, optionally restricted to one status"),
    ),
    tag = "quizzes"
)]
#[instrument(skip(conn))]
pub(crate) async fn list_quizzes(
    Extension(conn): Extension<DatabaseConnection>,
    Query(filter): Query<QuizFilter>,
) -> Result<Json<Vec<Quiz>>, QuizApiError> {
    let status = match filter.status.as_deref().map(str::parse::<QuizStatus>) {
        None => None,
        Some(Ok(status)) => Some(status),
        Some(Err(_)) => {
            tracing::debug!(status = ?filter.status, "no quiz can have the requested status");
            return Ok(Json(Vec::new()));
        }
    };

    let quizzes = service::list_quizzes(&conn, status).await?;
    Ok(Json(quizzes))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/published",
    responses(
        (status = OK, body = Vec<Quiz>, description = "Quizzes available to students"),
    ),
    tag = "quizzes"
)]
#[instrument(skip_all)]
pub(crate) async fn list_published_quizzes(
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Json<Vec<Quiz>>, QuizApiError> {
    let quizzes = service::list_quizzes(&conn, Some(QuizStatus::Published)).await?;
    Ok(Json(quizzes))
}

#[utoipa::path(
    post,
    path = "/api/quizzes",
    request_body = QuizDraft,
    responses(
        (status = OK, body = ActionResponse, description = "Whether the quiz was stored, with its new id",
            example = json!({ "success": true, "id": "5f0c2a52-43a4-4a49-8f0e-2f1f3f9d0c11" })),
        (status = INTERNAL_SERVER_ERROR, body = ActionResponse),
    ),
    tag = "quizzes"
)]
#[instrument(skip_all)]
pub(crate) async fn create_quiz(
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(draft): Json<QuizDraft>,
) -> Result<Json<ActionResponse>, QuizApiError> {
    let response = match service::create_quiz(&conn, app_config.quiz_rules(), draft).await? {
        Verdict::Accepted(id) => ActionResponse::created(id),
        Verdict::Rejected(rejection) => ActionResponse::rejected(rejection.to_string()),
    };
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/quizzes/{quiz_id}",
    params(
        ("quiz_id" = String, Path, description = "Quiz id"),
    ),
    responses(
        (status = OK, body = Quiz, description = "The quiz with its questions"),
        (status = NOT_FOUND, body = ActionResponse, example = json!({ "success": false, "message": "Quiz not found" })),
    ),
    tag = "quizzes"
)]
#[instrument(skip(conn))]
pub(crate) async fn get_quiz(
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<String>,
) -> Result<Response, QuizApiError> {
    let response = match service::get_quiz(&conn, &quiz_id).await? {
        Verdict::Accepted(quiz) => Json(quiz).into_response(),
        Verdict::Rejected(rejection) => (
            StatusCode::NOT_FOUND,
            Json(ActionResponse::rejected(rejection.to_string())),
        )
            .into_response(),
    };
    Ok(response)
}

#[utoipa::path(
    put,
    path = "/api/quizzes/{quiz_id}/publish",
    params(
        ("quiz_id" = String, Path, description = "Quiz id"),
    ),
    responses(
        (status = OK, body = ActionResponse, description = "Whether the quiz is now published",
            example = json!({ "success": true })),
        (status = INTERNAL_SERVER_ERROR, body = ActionResponse),
    ),
    tag = "quizzes"
)]
#[instrument(skip(conn))]
pub(crate) async fn publish_quiz(
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<String>,
) -> Result<Json<ActionResponse>, QuizApiError> {
    let response = match service::publish_quiz(&conn, &quiz_id).await? {
        Verdict::Accepted(()) => ActionResponse::ok(),
        Verdict::Rejected(rejection) => ActionResponse::rejected(rejection.to_string()),
    };
    Ok(Json(response))
}

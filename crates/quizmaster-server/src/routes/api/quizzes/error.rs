use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use quizmaster_model::response::ActionResponse;
use std::error::Error;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum QuizApiError {
    #[error(transparent)]
    Quiz(#[from] quizmaster_core::quiz::error::QuizError),
}

impl IntoResponse for QuizApiError {
    fn into_response(self) -> Response {
        match self {
            QuizApiError::Quiz(error) => {
                tracing::error!(error = &error as &dyn Error, "quiz request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ActionResponse::rejected("Internal server error")),
                )
                    .into_response()
            }
        }
    }
}

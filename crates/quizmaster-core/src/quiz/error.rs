use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

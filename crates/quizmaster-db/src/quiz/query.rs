use quizmaster_entity::quiz::quiz::{self, Model as QuizModel, Status};
use sea_orm::{ConnectionTrait, DbErr};

use crate::document;

pub struct Query;

impl Query {
    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<QuizModel>, DbErr> {
        document::Query::get(db, quiz::COLLECTION, id)
            .await?
            .map(super::decode)
            .transpose()
    }

    /// All quizzes, or only those in `status` when given. No particular order.
    pub async fn find_all<C: ConnectionTrait>(db: &C, status: Option<Status>) -> Result<Vec<QuizModel>, DbErr> {
        let documents = match status {
            Some(status) => document::Query::query(db, quiz::COLLECTION, quiz::STATUS_FIELD, status.as_str()).await?,
            None => document::Query::list(db, quiz::COLLECTION).await?,
        };
        documents.into_iter().map(super::decode).collect()
    }
}

use quizmaster_entity::quiz::quiz::{self, Model as QuizModel, Status};
use sea_orm::{ConnectionTrait, DbErr};

use crate::document;

pub struct Mutation;

impl Mutation {
    pub async fn save<C: ConnectionTrait>(db: &C, quiz: &QuizModel) -> Result<(), DbErr> {
        let data = super::encode(quiz)?;
        document::Mutation::set(db, quiz::COLLECTION, &quiz.id, data).await
    }

    /// Only touches the status field. Fails with [`DbErr::RecordNotFound`] for unknown ids.
    pub async fn update_status<C: ConnectionTrait>(
        db: &C,
        id: &str,
        status: Status,
    ) -> Result<(), DbErr> {
        document::Mutation::update_field(db, quiz::COLLECTION, id, quiz::STATUS_FIELD, status.as_str().into()).await
    }
}

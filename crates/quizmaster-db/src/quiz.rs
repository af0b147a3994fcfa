//! Quiz repository. Each quiz is one document in [`quiz::COLLECTION`], keyed by its id.

mod mutation;
mod query;

pub use mutation::Mutation;
pub use query::Query;

use quizmaster_entity::document::Model as DocumentModel;
use quizmaster_entity::quiz::quiz;
use sea_orm::DbErr;
use sea_orm::prelude::Json;
use std::error::Error;

fn encode(quiz: &quiz::Model) -> Result<Json, DbErr> {
    serde_json::to_value(quiz).map_err(|error| DbErr::Json(error.to_string()))
}

fn decode(document: DocumentModel) -> Result<quiz::Model, DbErr> {
    serde_json::from_value(document.data).map_err(|error| {
        tracing::error!(error = &error as &dyn Error, id = %document.id, "stored quiz is malformed");
        DbErr::Json(error.to_string())
    })
}

use quizmaster_entity::document::Entity as Document;
use sea_orm::{ConnectionTrait, DbErr, Schema};

/// Creates the document table if it does not exist yet.
pub async fn setup_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let mut statement = Schema::new(backend).create_table_from_entity(Document);
    statement.if_not_exists();

    tracing::debug!("creating document table");
    db.execute(backend.build(&statement)).await?;
    Ok(())
}

use quizmaster_entity::document::{self, Entity as Document};
use sea_orm::prelude::Json;
use sea_orm::sea_query::{Expr, OnConflict, SimpleExpr};
use sea_orm::{ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait, QueryFilter, Set, Value};
use std::error::Error;

pub struct Mutation;

impl Mutation {
    /// Writes the whole document, replacing any previous version.
    pub async fn set<C: ConnectionTrait>(db: &C, collection: &str, id: &str, data: Json) -> Result<(), DbErr> {
        let document = document::ActiveModel {
            collection: Set(collection.to_owned()),
            id: Set(id.to_owned()),
            data: Set(data),
        };

        Document::insert(document)
            .on_conflict(
                OnConflict::columns([document::Column::Collection, document::Column::Id])
                    .update_column(document::Column::Data)
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, collection, id, "failed to write document");
            })?;

        Ok(())
    }

    /// Replaces a single top-level field of an existing document in one statement, leaving
    /// the rest of the body as stored at that moment.
    ///
    /// The body is expected to be a JSON object.
    pub async fn update_field<C: ConnectionTrait>(
        db: &C,
        collection: &str,
        id: &str,
        field: &str,
        value: Json,
    ) -> Result<(), DbErr> {
        let result = Document::update_many()
            .col_expr(document::Column::Data, field_set(db.get_database_backend(), field, value))
            .filter(document::Column::Collection.eq(collection))
            .filter(document::Column::Id.eq(id))
            .exec(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, collection, id, field, "failed to update document");
            })?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("Document {collection}/{id} not found")));
        }

        Ok(())
    }
}

fn field_set(backend: DbBackend, field: &str, value: Json) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => Expr::cust_with_values(
            r#"jsonb_set("data", ARRAY[?], ?)"#,
            [Value::from(field.to_owned()), Value::from(value)],
        ),
        _ => Expr::cust_with_values(
            r#"json_set("data", ?, json(?))"#,
            [Value::from(format!("$.{field}")), Value::from(value)],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QueryTrait;
    use serde_json::json;

    #[test]
    fn test_sqlite_field_update_is_a_single_json_set() {
        let statement = Document::update_many()
            .col_expr(document::Column::Data, field_set(DbBackend::Sqlite, "status", json!("published")))
            .filter(document::Column::Id.eq("a"))
            .build(DbBackend::Sqlite);

        assert!(statement.sql.starts_with("UPDATE"), "{}", statement.sql);
        assert!(statement.sql.contains(r#"json_set("data", ?, json(?))"#), "{}", statement.sql);
        let values = statement.values.unwrap().0;
        assert_eq!(values[0], Value::from("$.status".to_owned()));
    }

    #[test]
    fn test_postgres_field_update_uses_jsonb_set() {
        let statement = Document::update_many()
            .col_expr(document::Column::Data, field_set(DbBackend::Postgres, "status", json!("published")))
            .filter(document::Column::Id.eq("a"))
            .build(DbBackend::Postgres);

        assert!(statement.sql.contains(r#"jsonb_set("data", ARRAY[$1], $2)"#), "{}", statement.sql);
    }
}

use quizmaster_entity::document::{self, Entity as Document, Model as DocumentModel};
use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{ColumnTrait, ConnectionTrait, DbBackend, DbErr, EntityTrait, QueryFilter};
use std::error::Error;

pub struct Query;

impl Query {
    pub async fn get<C: ConnectionTrait>(db: &C, collection: &str, id: &str) -> Result<Option<DocumentModel>, DbErr> {
        Document::find_by_id((collection.to_owned(), id.to_owned()))
            .one(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, collection, id, "failed to load document");
            })
    }

    pub async fn list<C: ConnectionTrait>(db: &C, collection: &str) -> Result<Vec<DocumentModel>, DbErr> {
        Document::find()
            .filter(document::Column::Collection.eq(collection))
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, collection, "failed to list documents");
            })
    }

    /// Documents of `collection` whose top-level string `field` equals `value`.
    pub async fn query<C: ConnectionTrait>(
        db: &C,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Vec<DocumentModel>, DbErr> {
        Document::find()
            .filter(document::Column::Collection.eq(collection))
            .filter(field_equals(db.get_database_backend(), field, value))
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, collection, field, "failed to query documents");
            })
    }
}

fn field_equals(backend: DbBackend, field: &str, value: &str) -> SimpleExpr {
    match backend {
        DbBackend::Postgres => Expr::cust_with_values(r#"("data" ->> ?) = ?"#, [field.to_owned(), value.to_owned()]),
        _ => Expr::cust_with_values(
            r#"json_extract("data", ?) = ?"#,
            [format!("$.{field}"), value.to_owned()],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::QueryTrait;

    #[test]
    fn test_sqlite_field_filter_uses_json_path() {
        let statement = Document::find()
            .filter(field_equals(DbBackend::Sqlite, "status", "draft"))
            .build(DbBackend::Sqlite);

        assert!(statement.sql.contains("json_extract"), "{}", statement.sql);
        let values = statement.values.unwrap().0;
        assert_eq!(values, vec!["$.status".into(), "draft".into()]);
    }

    #[test]
    fn test_postgres_field_filter_uses_text_extraction() {
        let statement = Document::find()
            .filter(field_equals(DbBackend::Postgres, "status", "published"))
            .build(DbBackend::Postgres);

        assert!(statement.sql.contains("->> $1"), "{}", statement.sql);
        assert!(statement.sql.contains("= $2"), "{}", statement.sql);
    }
}

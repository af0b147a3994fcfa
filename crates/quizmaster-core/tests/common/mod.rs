use quizmaster_db::schema::setup_schema;
use quizmaster_test_helpers::{SqliteDb, TestDb};
use sea_orm::{Database, DatabaseConnection};

// The returned db has to outlive the connection, it owns the database file.
pub async fn connect() -> (SqliteDb, DatabaseConnection) {
    let sqlite_db = SqliteDb::new().unwrap();
    let conn = Database::connect(sqlite_db.db_uri().as_ref()).await.unwrap();
    setup_schema(&conn).await.unwrap();
    (sqlite_db, conn)
}

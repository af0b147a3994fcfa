use quizmaster_db::{document, quiz};
use quizmaster_entity::quiz::question;
use quizmaster_entity::quiz::quiz::{Model as QuizModel, Status};
use sea_orm::DbErr;
use serde_json::json;
use test_log::test;

mod common;

fn quiz_model(id: &str, status: Status) -> QuizModel {
    QuizModel {
        id: id.to_owned(),
        title: Some(format!("Quiz {id}")),
        description: None,
        time_limit: 30,
        status,
        category: Some("science".to_owned()),
        created_by: None,
        questions: vec![question::Model {
            id: Some("1".to_owned()),
            r#type: Some("MCQ".to_owned()),
            question_text: Some("Which planet is largest?".to_owned()),
            options: Some(vec!["Mars".to_owned(), "Jupiter".to_owned()]),
            correct_answer: Some("Jupiter".to_owned()),
        }],
    }
}

#[test(tokio::test)]
async fn test_save_and_find_by_id() {
    let (_db, conn) = common::connect().await;
    let model = quiz_model("a", Status::Draft);

    quiz::Mutation::save(&conn, &model).await.unwrap();

    assert_eq!(quiz::Query::find_by_id(&conn, "a").await.unwrap(), Some(model));
    assert_eq!(quiz::Query::find_by_id(&conn, "b").await.unwrap(), None);
}

#[test(tokio::test)]
async fn test_find_all_with_status_filter() {
    let (_db, conn) = common::connect().await;
    for (id, status) in [("a", Status::Draft), ("b", Status::Published), ("c", Status::Draft)] {
        quiz::Mutation::save(&conn, &quiz_model(id, status)).await.unwrap();
    }

    let mut all: Vec<_> = quiz::Query::find_all(&conn, None)
        .await
        .unwrap()
        .into_iter()
        .map(|quiz| quiz.id)
        .collect();
    all.sort();
    assert_eq!(all, ["a", "b", "c"]);

    let published = quiz::Query::find_all(&conn, Some(Status::Published)).await.unwrap();
    assert_eq!(published, vec![quiz_model("b", Status::Published)]);

    let mut drafts: Vec<_> = quiz::Query::find_all(&conn, Some(Status::Draft))
        .await
        .unwrap()
        .into_iter()
        .map(|quiz| quiz.id)
        .collect();
    drafts.sort();
    assert_eq!(drafts, ["a", "c"]);
}

#[test(tokio::test)]
async fn test_update_status_only_changes_status() {
    let (_db, conn) = common::connect().await;
    quiz::Mutation::save(&conn, &quiz_model("a", Status::Draft)).await.unwrap();

    quiz::Mutation::update_status(&conn, "a", Status::Published).await.unwrap();

    let stored = quiz::Query::find_by_id(&conn, "a").await.unwrap().unwrap();
    assert_eq!(stored, quiz_model("a", Status::Published));
}

#[test(tokio::test)]
async fn test_update_status_of_missing_quiz() {
    let (_db, conn) = common::connect().await;

    let error = quiz::Mutation::update_status(&conn, "missing", Status::Published)
        .await
        .unwrap_err();
    assert!(matches!(error, DbErr::RecordNotFound(_)), "{error:?}");
}

#[test(tokio::test)]
async fn test_malformed_document_is_reported() {
    let (_db, conn) = common::connect().await;
    document::Mutation::set(&conn, "quizzes", "broken", json!({"status": "archived"}))
        .await
        .unwrap();

    let error = quiz::Query::find_by_id(&conn, "broken").await.unwrap_err();
    assert!(matches!(error, DbErr::Json(_)), "{error:?}");
}

use quizmaster_db::quiz::{Mutation, Query};
use quizmaster_entity::quiz::quiz::{Model as QuizModel, Status as QuizStatusModel};
use quizmaster_model::quiz::quiz::{Quiz, QuizDraft, QuizStatus};
use quizmaster_model_tools::convert::{IntoDbModel, IntoModel};
use sea_orm::{ConnectionTrait, DbErr};
use tracing::instrument;
use uuid::Uuid;

use super::error::QuizError;
use super::{QuizRules, Rejection, Verdict};

/// Stores `draft` under a freshly generated id and returns that id.
///
/// A draft without questions, or with fewer than [`QuizRules::min_questions`], is rejected
/// before anything is written. A missing status defaults to `draft`; a supplied one is kept.
#[instrument(skip_all)]
pub async fn create_quiz<C: ConnectionTrait>(
    db: &C,
    rules: &QuizRules,
    draft: QuizDraft,
) -> Result<Verdict<String>, QuizError> {
    let QuizDraft {
        id: _,
        title,
        description,
        time_limit,
        status,
        category,
        created_by,
        questions,
    } = draft;

    let Some(questions) = questions.filter(|questions| questions.len() >= rules.min_questions) else {
        tracing::info!(min_questions = rules.min_questions, "rejecting quiz with too few questions");
        return Ok(Verdict::Rejected(Rejection::TooFewQuestions(rules.min_questions)));
    };

    let id = Uuid::new_v4().to_string();
    let quiz = QuizModel {
        id: id.clone(),
        title,
        description,
        time_limit,
        status: status.unwrap_or(QuizStatus::Draft).into_db_model(),
        category,
        created_by,
        questions: questions.into_iter().map(IntoDbModel::into_db_model).collect(),
    };

    Mutation::save(db, &quiz).await?;
    tracing::info!(quiz_id = %id, questions = quiz.questions.len(), "created quiz");

    Ok(Verdict::Accepted(id))
}

#[instrument(skip(db))]
pub async fn list_quizzes<C: ConnectionTrait>(db: &C, status: Option<QuizStatus>) -> Result<Vec<Quiz>, QuizError> {
    let quizzes = Query::find_all(db, status.map(IntoDbModel::into_db_model)).await?;
    tracing::debug!(count = quizzes.len(), "listed quizzes");

    Ok(quizzes.into_iter().map(IntoModel::into_model).collect())
}

#[instrument(skip(db))]
pub async fn get_quiz<C: ConnectionTrait>(db: &C, id: &str) -> Result<Verdict<Quiz>, QuizError> {
    let verdict = match Query::find_by_id(db, id).await? {
        Some(quiz) => Verdict::Accepted(quiz.into_model()),
        None => Verdict::Rejected(Rejection::QuizNotFound),
    };
    Ok(verdict)
}

/// Moves the quiz to `published`. Publishing an already published quiz succeeds again.
///
/// The existence check and the status update are separate steps. A quiz that vanishes in
/// between is reported as not found.
#[instrument(skip(db))]
pub async fn publish_quiz<C: ConnectionTrait>(db: &C, id: &str) -> Result<Verdict<()>, QuizError> {
    if Query::find_by_id(db, id).await?.is_none() {
        tracing::info!("quiz to publish not found");
        return Ok(Verdict::Rejected(Rejection::QuizNotFound));
    }

    match Mutation::update_status(db, id, QuizStatusModel::Published).await {
        Ok(()) => {
            tracing::info!("published quiz");
            Ok(Verdict::Accepted(()))
        }
        Err(DbErr::RecordNotFound(_)) => Ok(Verdict::Rejected(Rejection::QuizNotFound)),
        Err(error) => Err(error.into()),
    }
}

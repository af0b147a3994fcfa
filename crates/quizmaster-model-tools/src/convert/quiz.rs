use quizmaster_entity::quiz::question::Model as QuestionModel;
use quizmaster_entity::quiz::quiz::{Model as QuizModel, Status as QuizStatusModel};
use quizmaster_model::quiz::question::Question;
use quizmaster_model::quiz::quiz::{Quiz, QuizStatus};

use crate::convert::{FromDbModel, FromModel, IntoModel};

impl FromDbModel<QuizStatusModel> for QuizStatus {
    fn from_db_model(model: QuizStatusModel) -> Self {
        match model {
            QuizStatusModel::Draft => QuizStatus::Draft,
            QuizStatusModel::Published => QuizStatus::Published,
        }
    }
}

impl FromModel<QuizStatus> for QuizStatusModel {
    fn from_model(model: QuizStatus) -> Self {
        match model {
            QuizStatus::Draft => QuizStatusModel::Draft,
            QuizStatus::Published => QuizStatusModel::Published,
        }
    }
}

impl FromDbModel<QuestionModel> for Question {
    fn from_db_model(model: QuestionModel) -> Self {
        Self {
            id: model.id,
            r#type: model.r#type,
            question_text: model.question_text,
            options: model.options,
            correct_answer: model.correct_answer,
        }
    }
}

impl FromModel<Question> for QuestionModel {
    fn from_model(model: Question) -> Self {
        Self {
            id: model.id,
            r#type: model.r#type,
            question_text: model.question_text,
            options: model.options,
            correct_answer: model.correct_answer,
        }
    }
}

impl FromDbModel<QuizModel> for Quiz {
    fn from_db_model(model: QuizModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            time_limit: model.time_limit,
            status: model.status.into_model(),
            category: model.category,
            created_by: model.created_by,
            questions: model.questions.into_iter().map(IntoModel::into_model).collect(),
        }
    }
}

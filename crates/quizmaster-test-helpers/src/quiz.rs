use quizmaster_model::quiz::question::Question;
use quizmaster_model::quiz::quiz::QuizDraft;

/// A multiple choice question numbered `n`.
#[must_use]
pub fn question(n: usize) -> Question {
    Question {
        id: Some(n.to_string()),
        r#type: Some("MCQ".to_owned()),
        question_text: Some(format!("What is {n} + {n}?")),
        options: Some(vec![(2 * n).to_string(), (2 * n + 1).to_string()]),
        correct_answer: Some((2 * n).to_string()),
    }
}

/// A complete draft carrying `count` questions and no status.
#[must_use]
pub fn draft(count: usize) -> QuizDraft {
    QuizDraft {
        id: None,
        title: Some("Arithmetic".to_owned()),
        description: Some("Adding numbers to themselves".to_owned()),
        time_limit: 20,
        status: None,
        category: Some("math".to_owned()),
        created_by: Some("author@example.com".to_owned()),
        questions: Some((1..=count).map(question).collect()),
    }
}

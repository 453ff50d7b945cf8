use crate::error::{AppError, Result};
use crate::session::SessionsState;
use crate::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::quiz::{NewQuiz, QuizQuestion};
use common::requests::NewQuizForm;
use log::info;

pub async fn process(
    req: HttpRequest,
    payload: web::Json<NewQuizForm>,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse> {
    sessions.require_admin(&req).await?;

    let quiz = payload.into_inner().into_new_quiz();
    validate_new_quiz(&quiz)?;

    let id = state.db.quizzes()?.add(&quiz)?;
    info!("Added quiz {} ({}) with {} options", id, quiz.category, quiz.options.len());

    Ok(HttpResponse::Created().json(QuizQuestion {
        id,
        question: quiz.question,
        options: quiz.options,
        correct_index: quiz.correct_index,
        category: quiz.category,
    }))
}

/// Rejects questions that could never be answered correctly.
pub fn validate_new_quiz(quiz: &NewQuiz) -> Result<()> {
    if quiz.category.trim().is_empty() {
        return Err(AppError::validation("Please select a group."));
    }
    if !quiz.index_in_range() {
        return Err(AppError::validation(format!(
            "Correct answer index {} is out of range for {} options",
            quiz.correct_index,
            quiz.options.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(options: &[&str], correct_index: u32) -> NewQuiz {
        NewQuiz {
            question: "Capital of France?".into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            category: "Group 1".into(),
        }
    }

    #[test]
    fn index_within_options_is_accepted() {
        assert!(validate_new_quiz(&quiz(&["Paris", "London", "Rome"], 2)).is_ok());
    }

    #[test]
    fn index_past_the_last_option_is_rejected() {
        let err = validate_new_quiz(&quiz(&["Paris", "London", "Rome"], 3)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn missing_category_is_rejected() {
        let mut quiz = quiz(&["Paris"], 0);
        quiz.category = "  ".into();
        assert!(validate_new_quiz(&quiz).is_err());
    }
}

use crate::model::quiz::{parse_options_text, NewQuiz};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Optional category filter for the listing endpoints.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Request payload for the admin login endpoint.
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Whether the caller's session may perform admin writes.
pub struct AuthStatus {
    pub authenticated: bool,
}

/// Quiz creation form as submitted by the admin view.
///
/// `options_text` holds every option in a single comma separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewQuizForm {
    pub question: String,
    pub options_text: String,
    pub correct_index: u32,
    pub category: String,
}

impl NewQuizForm {
    pub fn into_new_quiz(self) -> NewQuiz {
        NewQuiz {
            options: parse_options_text(&self.options_text),
            question: self.question,
            correct_index: self.correct_index,
            category: self.category,
        }
    }
}

/// Current answers for a quiz category, keyed by question id.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub category: Option<String>,
    pub selections: HashMap<i64, String>,
}

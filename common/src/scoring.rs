//! Quiz scoring, independent of how or when the quiz is rendered.

use crate::model::quiz::QuizQuestion;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Number of correctly answered questions out of the questions shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.correct, self.total)
    }
}

/// Scores `questions` against the current `selections`.
///
/// `selections` maps a question id to the text of the chosen option. A
/// question without a selection counts toward the total but never as correct.
pub fn score<'a, I>(questions: I, selections: &HashMap<i64, String>) -> Score
where
    I: IntoIterator<Item = &'a QuizQuestion>,
{
    questions
        .into_iter()
        .fold(Score::default(), |mut acc, question| {
            acc.total += 1;
            if selections
                .get(&question.id)
                .is_some_and(|choice| question.is_correct(choice))
            {
                acc.correct += 1;
            }
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: i64, options: &[&str], correct_index: u32) -> QuizQuestion {
        QuizQuestion {
            id,
            question: format!("Question {}", id),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index,
            category: "Group 1".to_string(),
        }
    }

    #[test]
    fn capital_of_france_scenario() {
        let quiz = vec![question(1, &["Paris", "London", "Rome"], 0)];

        let paris = HashMap::from([(1, "Paris".to_string())]);
        assert_eq!(score(&quiz, &paris), Score { correct: 1, total: 1 });

        let rome = HashMap::from([(1, "Rome".to_string())]);
        assert_eq!(score(&quiz, &rome), Score { correct: 0, total: 1 });
    }

    #[test]
    fn missing_selections_count_as_wrong() {
        let quiz = vec![
            question(1, &["a", "b"], 0),
            question(2, &["c", "d"], 1),
            question(3, &["e", "f"], 1),
        ];
        let selections = HashMap::from([(2, "d".to_string())]);
        assert_eq!(score(&quiz, &selections), Score { correct: 1, total: 3 });
    }

    #[test]
    fn selections_for_other_questions_are_ignored() {
        let quiz = vec![question(1, &["a", "b"], 0)];
        let selections = HashMap::from([(99, "a".to_string())]);
        assert_eq!(score(&quiz, &selections), Score { correct: 0, total: 1 });
    }

    #[test]
    fn out_of_range_answer_is_unanswerable() {
        let quiz = vec![question(1, &["a", "b"], 5)];
        let selections = HashMap::from([(1, "a".to_string())]);
        assert_eq!(score(&quiz, &selections), Score { correct: 0, total: 1 });
    }

    #[test]
    fn empty_quiz_scores_zero_of_zero() {
        let result = score(&Vec::<QuizQuestion>::new(), &HashMap::new());
        assert_eq!(result.to_string(), "0/0");
    }
}

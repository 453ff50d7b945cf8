use serde::{Deserialize, Serialize};

/// Separator used by the admin form to enter several options in one text box.
pub const OPTION_DELIMITER: char = ',';

/// A multiple-choice question as stored and served by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
    /// Zero-based index into `options`.
    pub correct_index: u32,
    pub category: String,
}

impl QuizQuestion {
    /// The option at `correct_index`, or `None` when the index is out of range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_index as usize)
            .map(String::as_str)
    }

    /// Whether `choice` is the text of the correct option.
    ///
    /// A question whose index is out of range never matches.
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_option() == Some(choice)
    }
}

/// A question that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: u32,
    pub category: String,
}

impl NewQuiz {
    pub fn index_in_range(&self) -> bool {
        (self.correct_index as usize) < self.options.len()
    }
}

/// Splits the admin form's options text on [`OPTION_DELIMITER`].
///
/// Surrounding whitespace is trimmed from every option. An option whose text
/// contains the delimiter cannot be entered this way: it ends up split in two.
pub fn parse_options_text(text: &str) -> Vec<String> {
    text.split(OPTION_DELIMITER)
        .map(|option| option.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capital_of_france() -> QuizQuestion {
        QuizQuestion {
            id: 7,
            question: "Capital of France?".to_string(),
            options: vec!["Paris".into(), "London".into(), "Rome".into()],
            correct_index: 0,
            category: "Group 1".to_string(),
        }
    }

    #[test]
    fn correct_option_is_looked_up_by_index() {
        let quiz = capital_of_france();
        assert_eq!(quiz.correct_option(), Some("Paris"));
        assert!(quiz.is_correct("Paris"));
        assert!(!quiz.is_correct("Rome"));
    }

    #[test]
    fn out_of_range_index_never_matches() {
        let mut quiz = capital_of_france();
        quiz.correct_index = 3;
        assert_eq!(quiz.correct_option(), None);
        for option in quiz.options.clone() {
            assert!(!quiz.is_correct(&option));
        }
    }

    #[test]
    fn options_text_is_split_and_trimmed() {
        assert_eq!(
            parse_options_text("Paris, London ,Rome"),
            vec!["Paris", "London", "Rome"]
        );
    }

    #[test]
    fn delimiter_inside_an_option_splits_it() {
        let options = parse_options_text("Paris, France,London");
        assert_eq!(options, vec!["Paris", "France", "London"]);
        assert!(!options.contains(&"Paris, France".to_string()));
    }

    #[test]
    fn index_range_check() {
        let mut quiz = NewQuiz {
            question: "Q".into(),
            options: vec!["a".into(), "b".into()],
            correct_index: 1,
            category: "Group 1".into(),
        };
        assert!(quiz.index_in_range());
        quiz.correct_index = 2;
        assert!(!quiz.index_in_range());
    }
}

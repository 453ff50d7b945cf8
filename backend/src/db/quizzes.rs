use super::sql;
use crate::error::Result;
use common::model::quiz::{NewQuiz, QuizQuestion, OPTION_DELIMITER};
use rusqlite::{params, Connection, Row};

/// Multiple-choice questions stored in the `quizzes` table.
pub struct QuizStore {
    conn: Connection,
}

/// Options are persisted as a JSON array of strings.
fn encode_options(options: &[String]) -> Result<String> {
    Ok(serde_json::to_string(options)?)
}

/// Reads the `options` column back into a list.
///
/// Rows written by older deployments hold comma joined text instead of a
/// JSON array; those are split on the delimiter, which cannot restore an
/// option that itself contained a comma.
fn decode_options(raw: &str) -> Vec<String> {
    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(options) => options,
        Err(_) => raw.split(OPTION_DELIMITER).map(str::to_string).collect(),
    }
}

fn quiz_from_row(row: &Row<'_>) -> rusqlite::Result<QuizQuestion> {
    let raw_options: Option<String> = row.get(2)?;
    // Negative answers can only come from hand-edited rows; treat them as unanswerable.
    let answer: i64 = row.get::<_, Option<i64>>(3)?.unwrap_or(-1);
    Ok(QuizQuestion {
        id: row.get(0)?,
        question: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        options: raw_options.as_deref().map(decode_options).unwrap_or_default(),
        correct_index: u32::try_from(answer).unwrap_or(u32::MAX),
        category: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}

impl QuizStore {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Inserts a question and returns its new id.
    ///
    /// `correct_index` is stored as given; range checks belong to the caller.
    pub fn add(&self, quiz: &NewQuiz) -> Result<i64> {
        let options = encode_options(&quiz.options)?;
        self.conn.execute(
            sql::INSERT_QUIZ,
            params![quiz.question, options, quiz.correct_index, quiz.category],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// All questions in insertion order, restricted to `category` when given.
    pub fn list(&self, category: Option<&str>) -> Result<Vec<QuizQuestion>> {
        let quizzes = match category {
            Some(category) => {
                let mut stmt = self.conn.prepare(sql::SELECT_QUIZZES_BY_SUBJECT)?;
                let rows = stmt.query_map(params![category], quiz_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
            None => {
                let mut stmt = self.conn.prepare(sql::SELECT_QUIZZES)?;
                let rows = stmt.query_map([], quiz_from_row)?;
                rows.collect::<rusqlite::Result<Vec<_>>>()?
            }
        };
        Ok(quizzes)
    }

    /// Removes the question with `id`; an unknown id is not an error.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(sql::DELETE_QUIZ, params![id])?;
        Ok(affected > 0)
    }
}

//! SQL statements for the SQLite schema.
//!
//! Column names are kept compatible with existing databases so an older
//! `govtprep.db` keeps working: a resource's link lives in `pdf_url`, the
//! category in `subject`, and a quiz's correct index in `answer`.

pub const CREATE_RESOURCES: &str = r#"
    CREATE TABLE IF NOT EXISTS resources (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT,
        pdf_url TEXT,
        subject TEXT
    )
"#;

pub const CREATE_QUIZZES: &str = r#"
    CREATE TABLE IF NOT EXISTS quizzes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        question TEXT,
        options TEXT,
        answer INTEGER,
        subject TEXT
    )
"#;

pub const INSERT_RESOURCE: &str =
    "INSERT INTO resources (title, pdf_url, subject) VALUES (?1, ?2, ?3)";

pub const SELECT_RESOURCES: &str =
    "SELECT id, title, pdf_url, subject FROM resources ORDER BY id";

pub const SELECT_RESOURCES_BY_SUBJECT: &str =
    "SELECT id, title, pdf_url, subject FROM resources WHERE subject = ?1 ORDER BY id";

pub const DELETE_RESOURCE: &str = "DELETE FROM resources WHERE id = ?1";

pub const INSERT_QUIZ: &str =
    "INSERT INTO quizzes (question, options, answer, subject) VALUES (?1, ?2, ?3, ?4)";

pub const SELECT_QUIZZES: &str =
    "SELECT id, question, options, answer, subject FROM quizzes ORDER BY id";

pub const SELECT_QUIZZES_BY_SUBJECT: &str =
    "SELECT id, question, options, answer, subject FROM quizzes WHERE subject = ?1 ORDER BY id";

pub const DELETE_QUIZ: &str = "DELETE FROM quizzes WHERE id = ?1";

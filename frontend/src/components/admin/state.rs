//! State of the admin view.
//!
//! Holds the login form, the two creation forms and the full resource and
//! quiz lists shown for deletion. `authenticated` mirrors the server-side
//! session state; it is `None` until the first status check answers.

use common::model::category::Category;
use common::model::quiz::QuizQuestion;
use common::model::resource::Resource;
use common::requests::NewQuizForm;
use yew::NodeRef;

#[derive(Default)]
pub struct ResourceForm {
    pub title: String,
    pub category: Category,
    pub file: Option<web_sys::File>,
}

#[derive(Default)]
pub struct QuizForm {
    pub question: String,
    /// Comma separated options, exactly as typed.
    pub options_text: String,
    /// Raw text of the numeric input.
    pub correct_index: String,
    pub category: Category,
}

impl QuizForm {
    /// Converts the form into a request, or explains why it cannot be sent.
    pub fn to_request(&self) -> Result<NewQuizForm, String> {
        let correct_index = self
            .correct_index
            .trim()
            .parse::<u32>()
            .map_err(|_| "Correct Answer Index must be a whole number of 0 or more".to_string())?;
        Ok(NewQuizForm {
            question: self.question.clone(),
            options_text: self.options_text.clone(),
            correct_index,
            category: self.category.as_str().to_string(),
        })
    }
}

pub struct AdminView {
    pub authenticated: Option<bool>,
    pub password: String,
    pub login_error: Option<String>,

    pub resource_form: ResourceForm,
    pub quiz_form: QuizForm,
    /// File input of the resource form, cleared after a successful upload.
    pub file_input_ref: NodeRef,

    pub resources: Vec<Resource>,
    pub quizzes: Vec<QuizQuestion>,
    pub error: Option<String>,
    /// Guards against double submission while a request is in flight.
    pub busy: bool,
}

impl AdminView {
    pub fn new() -> Self {
        Self {
            authenticated: None,
            password: String::new(),
            login_error: None,
            resource_form: ResourceForm::default(),
            quiz_form: QuizForm {
                correct_index: "0".to_string(),
                ..QuizForm::default()
            },
            file_input_ref: NodeRef::default(),
            resources: Vec::new(),
            quizzes: Vec::new(),
            error: None,
            busy: false,
        }
    }
}

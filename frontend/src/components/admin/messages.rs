use common::model::category::Category;
use common::model::quiz::QuizQuestion;
use common::model::resource::Resource;

pub enum Msg {
    StatusLoaded(bool),
    UpdatePassword(String),
    Login,
    LoginSucceeded,
    LoginFailed(String),

    ResourcesLoaded(Vec<Resource>),
    QuizzesLoaded(Vec<QuizQuestion>),
    RequestFailed(String),

    SetResourceTitle(String),
    SetResourceCategory(Category),
    FileSelected(Option<web_sys::File>),
    AddResource,
    ResourceAdded(Resource),
    DeleteResource(i64),
    ResourceDeleted(i64),

    SetQuizQuestion(String),
    SetQuizOptions(String),
    SetQuizAnswer(String),
    SetQuizCategory(Category),
    AddQuiz,
    QuizAdded(QuizQuestion),
    DeleteQuiz(i64),
    QuizDeleted(i64),
}

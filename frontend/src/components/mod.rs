pub mod admin;
pub mod category_select;
pub mod home;
pub mod quizzes;
pub mod resources;

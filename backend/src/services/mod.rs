pub mod admin;
pub mod home;
pub mod quizzes;
pub mod resources;

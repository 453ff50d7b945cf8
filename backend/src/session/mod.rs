pub mod state;

pub use state::{session_cookie, AdminAuth, SessionsState, SESSION_COOKIE};

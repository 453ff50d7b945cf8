//! Types shared between the backend server and the browser frontend.

pub mod home;
pub mod model;
pub mod requests;
pub mod scoring;

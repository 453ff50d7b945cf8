pub mod category;
pub mod quiz;
pub mod resource;

mod recipe_error;
mod recipe_service;
pub mod models;

pub use recipe_error::*;
pub use recipe_service::*;

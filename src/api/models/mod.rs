mod ingredient;
mod recipe;
mod create_or_update_recipe;
mod generic_error;

pub use ingredient::*;
pub use recipe::*;
pub use create_or_update_recipe::*;
pub use generic_error::*;

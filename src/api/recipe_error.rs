use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecipeError {
    #[error("Recipe {0} not found")]
    NotFound(u64),

    /// The allocator handed out an id that is already stored.
    #[error("Recipe id {0} is already in use")]
    IdCollision(u64)
}

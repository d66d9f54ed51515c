use rocket::serde::Serialize;
use crate::api::RecipeError;

#[derive(Serialize, Debug)]
#[serde(crate = "rocket::serde")]
pub struct GenericError {
    pub message: String
}

impl From<RecipeError> for GenericError {
    fn from(error: RecipeError) -> Self {
        GenericError { message: error.to_string() }
    }
}

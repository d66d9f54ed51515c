use crate::api::models::Ingredient;
use serde::Deserialize;

/// Request body for both POST and PUT. Missing fields fall back to their defaults.
#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
pub struct CreateOrUpdateRecipe {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageLink", default)]
    pub image_link: String,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default_to_empty() {
        let recipe: CreateOrUpdateRecipe = serde_json::from_str(r#"{"title": "Soup", "ingredients": [{"name": "Leek"}]}"#).unwrap();
        assert_eq!(recipe.title, "Soup");
        assert_eq!(recipe.description, "");
        assert_eq!(recipe.image_link, "");
        assert_eq!(recipe.ingredients, vec![Ingredient { name: String::from("Leek"), unit_of_measure: String::new(), quantity: 0 }]);
    }
}

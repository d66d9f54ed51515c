use crate::api::models::{ Ingredient, CreateOrUpdateRecipe };
use rocket::serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct Recipe {
    pub id: u64,
    pub title: String,
    pub description: String,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    pub ingredients: Vec<Ingredient>
}

impl Recipe {
    pub fn new(id: u64, recipe: CreateOrUpdateRecipe) -> Self {
        Recipe {
            id,
            title: recipe.title,
            description: recipe.description,
            image_link: recipe.image_link,
            ingredients: recipe.ingredients
        }
    }

    /// Overwrites every field but `id`.
    pub fn replace_with(&mut self, recipe: CreateOrUpdateRecipe) {
        self.title = recipe.title;
        self.description = recipe.description;
        self.image_link = recipe.image_link;
        self.ingredients = recipe.ingredients;
    }

    pub fn title_or_description_contains(&self, filter: &str) -> bool {
        self.title.contains(filter) || self.description.contains(filter)
    }

    pub fn has_ingredient_containing(&self, filter: &str) -> bool {
        self.ingredients.iter().any(|ingredient| ingredient.name.contains(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe() -> Recipe {
        Recipe::new(7, CreateOrUpdateRecipe {
            title: String::from("Pasta"),
            description: String::from("Italian dish"),
            image_link: String::from("x.png"),
            ingredients: vec![
                Ingredient { name: String::from("Tomato"), unit_of_measure: String::from("g"), quantity: 200 },
                Ingredient { name: String::from("Tomato paste"), unit_of_measure: String::from("tbsp"), quantity: 2 }
            ]
        })
    }

    #[test]
    fn title_filter_checks_title_and_description() {
        let recipe = recipe();
        assert!(recipe.title_or_description_contains("Pas"));
        assert!(recipe.title_or_description_contains("dish"));
        assert!(recipe.title_or_description_contains(""));
        assert!(!recipe.title_or_description_contains("pasta"));
        assert!(!recipe.title_or_description_contains("Tomato"));
    }

    #[test]
    fn ingredient_filter_is_case_sensitive() {
        let recipe = recipe();
        assert!(recipe.has_ingredient_containing("paste"));
        assert!(!recipe.has_ingredient_containing("tomato"));
    }

    #[test]
    fn replace_with_keeps_id() {
        let mut recipe = recipe();
        recipe.replace_with(CreateOrUpdateRecipe::default());
        assert_eq!(recipe.id, 7);
        assert_eq!(recipe.title, "");
        assert_eq!(recipe.image_link, "");
        assert!(recipe.ingredients.is_empty());
    }
}

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{ PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard };
use std::sync::atomic::{ AtomicU64, Ordering };
use crate::api::models::{ Recipe, CreateOrUpdateRecipe };
use crate::api::RecipeError;

pub struct RecipeService {
    recipes: RwLock<BTreeMap<u64, Recipe>>,
    last_issued_id: AtomicU64
}

impl RecipeService {
    pub fn new() -> RecipeService {
        RecipeService {
            recipes: RwLock::new(BTreeMap::new()),
            last_issued_id: AtomicU64::new(0)
        }
    }

    pub fn get_recipes(&self) -> Vec<Recipe> {
        self.read_recipes().values().cloned().collect()
    }

    pub fn get_recipe(&self, id: u64) -> Result<Recipe, RecipeError> {
        self.read_recipes().get(&id).cloned().ok_or(RecipeError::NotFound(id))
    }

    pub fn filter_by_title(&self, filter: &str) -> Vec<Recipe> {
        let filtered_recipes: Vec<Recipe> = self.read_recipes()
            .values()
            .filter(|recipe| recipe.title_or_description_contains(filter))
            .cloned()
            .collect();
        log::debug!("{} recipe(s) match title filter \"{}\"", filtered_recipes.len(), filter);
        filtered_recipes
    }

    /// A recipe is returned once no matter how many of its ingredients match.
    pub fn filter_by_ingredient(&self, filter: &str) -> Vec<Recipe> {
        let filtered_recipes: Vec<Recipe> = self.read_recipes()
            .values()
            .filter(|recipe| recipe.has_ingredient_containing(filter))
            .cloned()
            .collect();
        log::debug!("{} recipe(s) match ingredient filter \"{}\"", filtered_recipes.len(), filter);
        filtered_recipes
    }

    pub fn create_recipe(&self, new_recipe: CreateOrUpdateRecipe) -> Result<Recipe, RecipeError> {
        let id = self.next_id();
        let recipe_to_add = Recipe::new(id, new_recipe);
        match self.write_recipes().entry(id) {
            Entry::Occupied(_) => {
                log::error!("Allocated recipe id {} is already in use", id);
                Err(RecipeError::IdCollision(id))
            },
            Entry::Vacant(entry) => {
                log::info!("Created recipe {} \"{}\"", id, recipe_to_add.title);
                Ok(entry.insert(recipe_to_add).clone())
            }
        }
    }

    pub fn update_recipe(&self, id: u64, updated_recipe: CreateOrUpdateRecipe) -> Result<Recipe, RecipeError> {
        let mut recipes = self.write_recipes();
        match recipes.get_mut(&id) {
            Some(recipe) => {
                recipe.replace_with(updated_recipe);
                log::info!("Updated recipe {}", id);
                Ok(recipe.clone())
            },
            None => {
                log::warn!("Cannot update missing recipe {}", id);
                Err(RecipeError::NotFound(id))
            }
        }
    }

    pub fn delete_recipe(&self, id: u64) -> Result<(), RecipeError> {
        if self.write_recipes().remove(&id).is_none() {
            log::warn!("Cannot delete missing recipe {}", id);
            return Err(RecipeError::NotFound(id));
        }
        log::info!("Deleted recipe {}", id);
        Ok(())
    }

    /// Puts a recipe straight into the map, bypassing id allocation.
    #[cfg(test)]
    pub fn insert_recipe(&self, recipe: Recipe) {
        self.write_recipes().insert(recipe.id, recipe);
    }

    fn next_id(&self) -> u64 {
        self.last_issued_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    // Every critical section leaves the map whole, so a poisoned lock is still usable
    fn read_recipes(&self) -> RwLockReadGuard<'_, BTreeMap<u64, Recipe>> {
        self.recipes.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_recipes(&self) -> RwLockWriteGuard<'_, BTreeMap<u64, Recipe>> {
        self.recipes.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RecipeService {
    fn default() -> Self {
        RecipeService::new()
    }
}

mod api;

#[macro_use] extern crate rocket;
extern crate env_logger;
use rocket::{ Build, Rocket, State };
use rocket::http::Status;
use rocket::response::status;
use rocket::serde::json::Json;
use crate::api::models::{ Recipe, CreateOrUpdateRecipe, GenericError };
use crate::api::{ RecipeService, RecipeError };

const DEFAULT_INDEX_MESSAGE: &str = "Hello World!";

pub struct IndexMessage(String);

#[get("/")]
fn index_get(index_message: &State<IndexMessage>) -> String {
    index_message.0.clone()
}

#[get("/recipes")]
fn recipes_get(recipe_service: &State<RecipeService>) -> Json<Vec<Recipe>> {
    Json(recipe_service.get_recipes())
}

#[get("/recipes/<id>")]
fn recipe_id_get(recipe_service: &State<RecipeService>, id: u64) -> Result<Json<Recipe>, Status> {
    match recipe_service.get_recipe(id) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(error) => Err(to_status(error))
    }
}

#[get("/recipes/filter-by-title/<filter>")]
fn recipes_filter_by_title_get(recipe_service: &State<RecipeService>, filter: &str) -> Json<Vec<Recipe>> {
    Json(recipe_service.filter_by_title(filter))
}

#[get("/recipes/filter-by-ingredient/<filter>")]
fn recipes_filter_by_ingredient_get(recipe_service: &State<RecipeService>, filter: &str) -> Json<Vec<Recipe>> {
    Json(recipe_service.filter_by_ingredient(filter))
}

#[post("/recipes", data = "<new_recipe>")]
fn recipes_post(recipe_service: &State<RecipeService>, new_recipe: Json<CreateOrUpdateRecipe>) -> Result<status::Created<Json<Recipe>>, status::Custom<Json<GenericError>>> {
    match recipe_service.create_recipe(new_recipe.into_inner()) {
        Ok(recipe) => Ok(status::Created::new(format!("recipes/{}", recipe.id)).body(Json(recipe))),
        Err(error) => Err(status::Custom(to_status(error.clone()), Json(GenericError::from(error))))
    }
}

#[put("/recipes/<id>", data = "<updated_recipe>")]
fn recipe_id_put(recipe_service: &State<RecipeService>, id: u64, updated_recipe: Json<CreateOrUpdateRecipe>) -> Result<Json<Recipe>, Status> {
    match recipe_service.update_recipe(id, updated_recipe.into_inner()) {
        Ok(recipe) => Ok(Json(recipe)),
        Err(error) => Err(to_status(error))
    }
}

#[delete("/recipes/<id>")]
fn recipe_id_delete(recipe_service: &State<RecipeService>, id: u64) -> Status {
    match recipe_service.delete_recipe(id) {
        Ok(()) => Status::NoContent,
        Err(error) => to_status(error)
    }
}

// Error statuses go out without Rocket's HTML page
#[catch(404)]
fn not_found() -> status::NotFound<()> {
    status::NotFound(())
}

// Unparseable path ids and request bodies
#[catch(422)]
fn unprocessable_entity() -> status::Custom<()> {
    status::Custom(Status::UnprocessableEntity, ())
}

fn to_status(error: RecipeError) -> Status {
    match error {
        RecipeError::NotFound(_) => Status::NotFound,
        RecipeError::IdCollision(_) => Status::InternalServerError
    }
}

fn build_rocket(recipe_service: RecipeService, index_message: String) -> Rocket<Build> {
    rocket::build()
        .mount("/", routes![
            index_get,
            recipes_get,
            recipe_id_get,
            recipes_filter_by_title_get,
            recipes_filter_by_ingredient_get,
            recipes_post,
            recipe_id_put,
            recipe_id_delete
        ])
        .register("/", catchers![not_found, unprocessable_entity])
        .manage(recipe_service)
        .manage(IndexMessage(index_message))
}

#[launch]
fn rocket() -> _ {
    // Only settings read at build time (ROCKET_ADDRESS, ROCKET_PORT) can come from .env;
    // the runtime is already configured by the time this runs
    dotenv::dotenv().ok();
    env_logger::init();
    let index_message = dotenv::var("INDEX_MESSAGE").unwrap_or_else(|_| String::from(DEFAULT_INDEX_MESSAGE));
    log::info!("Starting recipe service with an empty store");
    build_rocket(RecipeService::new(), index_message)
}

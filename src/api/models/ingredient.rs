use serde::{ Deserialize, Serialize };

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Ingredient {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "unitOfMeasure", default)]
    pub unit_of_measure: String,
    #[serde(default)]
    pub quantity: i32
}

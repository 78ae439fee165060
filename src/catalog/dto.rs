use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::repo::{Dish, Ingredient, MealSlot};

#[derive(Debug, Deserialize)]
pub struct CategoryRequest {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct IngredientRequest {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct DishRequest {
    pub title: String,
    pub calories: i32,
    pub meal_of_the_day: MealSlot,
    #[serde(default)]
    pub ingredient_ids: Vec<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct DishDetails {
    #[serde(flatten)]
    pub dish: Dish,
    pub ingredients: Vec<Ingredient>,
}

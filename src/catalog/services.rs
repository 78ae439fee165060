//! Validate-and-derive steps for catalog entities, run right before every
//! persistence write. Slugs are recomputed from the title on each save.

use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::dto::{CategoryRequest, DishRequest, IngredientRequest};
use crate::catalog::repo::{Category, Dish, Ingredient};
use crate::error::ApiError;
use crate::slug::slugify;

pub const CATEGORY_SLUG_LEN: usize = 30;
pub const INGREDIENT_SLUG_LEN: usize = 30;
pub const DISH_SLUG_LEN: usize = 60;

pub fn validate_title(title: &str, max_len: usize, field: &'static str) -> Result<(), ApiError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(ApiError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Length-only check for optional/free-form text columns; empty is fine.
pub fn validate_max_len(value: &str, max_len: usize, field: &'static str) -> Result<(), ApiError> {
    if value.chars().count() > max_len {
        return Err(ApiError::validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

pub fn validate_calories(calories: i32) -> Result<(), ApiError> {
    if calories < 0 {
        return Err(ApiError::validation("calories must be >= 0"));
    }
    Ok(())
}

pub async fn create_category(db: &PgPool, req: &CategoryRequest) -> Result<Category, ApiError> {
    validate_title(&req.title, 30, "title")?;
    validate_max_len(&req.description, 1000, "description")?;
    let slug = slugify(&req.title, CATEGORY_SLUG_LEN);
    Category::insert(db, req.title.trim(), &req.description, &slug).await
}

pub async fn update_category(
    db: &PgPool,
    id: Uuid,
    req: &CategoryRequest,
) -> Result<Category, ApiError> {
    validate_title(&req.title, 30, "title")?;
    validate_max_len(&req.description, 1000, "description")?;
    let slug = slugify(&req.title, CATEGORY_SLUG_LEN);
    Category::update(db, id, req.title.trim(), &req.description, &slug)
        .await?
        .ok_or(ApiError::NotFound("category"))
}

pub async fn create_ingredient(
    db: &PgPool,
    req: &IngredientRequest,
) -> Result<Ingredient, ApiError> {
    validate_title(&req.title, 30, "title")?;
    let slug = slugify(&req.title, INGREDIENT_SLUG_LEN);
    Ingredient::insert(db, req.title.trim(), &slug).await
}

pub async fn update_ingredient(
    db: &PgPool,
    id: Uuid,
    req: &IngredientRequest,
) -> Result<Ingredient, ApiError> {
    validate_title(&req.title, 30, "title")?;
    let slug = slugify(&req.title, INGREDIENT_SLUG_LEN);
    Ingredient::update(db, id, req.title.trim(), &slug)
        .await?
        .ok_or(ApiError::NotFound("ingredient"))
}

pub async fn create_dish(db: &PgPool, req: &DishRequest) -> Result<Dish, ApiError> {
    validate_title(&req.title, 60, "title")?;
    validate_calories(req.calories)?;
    let slug = slugify(&req.title, DISH_SLUG_LEN);

    let mut tx = db.begin().await?;
    let dish = Dish::insert(
        &mut tx,
        req.title.trim(),
        req.calories,
        req.meal_of_the_day,
        &slug,
    )
    .await?;
    Dish::set_ingredients(&mut tx, dish.id, &req.ingredient_ids).await?;
    tx.commit().await?;
    Ok(dish)
}

pub async fn update_dish(db: &PgPool, id: Uuid, req: &DishRequest) -> Result<Dish, ApiError> {
    validate_title(&req.title, 60, "title")?;
    validate_calories(req.calories)?;
    let slug = slugify(&req.title, DISH_SLUG_LEN);

    let mut tx = db.begin().await?;
    let dish = Dish::update(
        &mut tx,
        id,
        req.title.trim(),
        req.calories,
        req.meal_of_the_day,
        &slug,
    )
    .await?
    .ok_or(ApiError::NotFound("dish"))?;
    Dish::set_ingredients(&mut tx, dish.id, &req.ingredient_ids).await?;
    tx.commit().await?;
    Ok(dish)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_blank_title_is_rejected() {
        assert!(validate_title("", 30, "title").is_err());
        assert!(validate_title("   ", 30, "title").is_err());
        assert!(validate_title("Breakfast menu", 30, "title").is_ok());
    }

    #[test]
    fn overlong_title_is_rejected() {
        let long = "x".repeat(31);
        assert!(validate_title(&long, 30, "title").is_err());
        let exact = "x".repeat(30);
        assert!(validate_title(&exact, 30, "title").is_ok());
    }

    #[test]
    fn overlong_description_is_rejected() {
        let long = "d".repeat(1001);
        assert!(validate_max_len(&long, 1000, "description").is_err());
        let exact = "d".repeat(1000);
        assert!(validate_max_len(&exact, 1000, "description").is_ok());
        assert!(validate_max_len("", 1000, "description").is_ok());
    }

    #[test]
    fn negative_calories_are_rejected() {
        assert!(validate_calories(-1).is_err());
        assert!(validate_calories(0).is_ok());
        assert!(validate_calories(550).is_ok());
    }
}

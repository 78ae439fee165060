use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ApiError;

/// Meal-of-the-day classifier for a dish, stored as SMALLINT 1..5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[repr(i16)]
pub enum MealSlot {
    Breakfast = 1,
    Brunch = 2,
    Lunch = 3,
    Dinner = 4,
    Supper = 5,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ingredient {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Dish {
    pub id: Uuid,
    pub title: String,
    pub calories: i32,
    pub meal_of_the_day: MealSlot,
    pub slug: String,
    pub created_at: OffsetDateTime,
}

impl Category {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Category>, ApiError> {
        let rows = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, description, slug, created_at
            FROM categories
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Category>, ApiError> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, title, description, slug, created_at
            FROM categories
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        db: &PgPool,
        title: &str,
        description: &str,
        slug: &str,
    ) -> Result<Category, ApiError> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (title, description, slug)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, slug, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(slug)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
        slug: &str,
    ) -> Result<Option<Category>, ApiError> {
        let row = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories
            SET title = $2, description = $3, slug = $4
            WHERE id = $1
            RETURNING id, title, description, slug, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(slug)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Ingredient {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Ingredient>, ApiError> {
        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, title, slug, created_at
            FROM ingredients
            ORDER BY title ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Ingredient>, ApiError> {
        let row = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT id, title, slug, created_at
            FROM ingredients
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(db: &PgPool, title: &str, slug: &str) -> Result<Ingredient, ApiError> {
        let row = sqlx::query_as::<_, Ingredient>(
            r#"
            INSERT INTO ingredients (title, slug)
            VALUES ($1, $2)
            RETURNING id, title, slug, created_at
            "#,
        )
        .bind(title)
        .bind(slug)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        slug: &str,
    ) -> Result<Option<Ingredient>, ApiError> {
        let row = sqlx::query_as::<_, Ingredient>(
            r#"
            UPDATE ingredients
            SET title = $2, slug = $3
            WHERE id = $1
            RETURNING id, title, slug, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(slug)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM ingredients WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Dish {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Dish>, ApiError> {
        let rows = sqlx::query_as::<_, Dish>(
            r#"
            SELECT id, title, calories, meal_of_the_day, slug, created_at
            FROM dishes
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Dish>, ApiError> {
        let row = sqlx::query_as::<_, Dish>(
            r#"
            SELECT id, title, calories, meal_of_the_day, slug, created_at
            FROM dishes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        tx: &mut Transaction<'_, Postgres>,
        title: &str,
        calories: i32,
        meal_of_the_day: MealSlot,
        slug: &str,
    ) -> Result<Dish, ApiError> {
        let row = sqlx::query_as::<_, Dish>(
            r#"
            INSERT INTO dishes (title, calories, meal_of_the_day, slug)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, calories, meal_of_the_day, slug, created_at
            "#,
        )
        .bind(title)
        .bind(calories)
        .bind(meal_of_the_day)
        .bind(slug)
        .fetch_one(&mut **tx)
        .await?;
        Ok(row)
    }

    pub async fn update(
        tx: &mut Transaction<'_, Postgres>,
        id: Uuid,
        title: &str,
        calories: i32,
        meal_of_the_day: MealSlot,
        slug: &str,
    ) -> Result<Option<Dish>, ApiError> {
        let row = sqlx::query_as::<_, Dish>(
            r#"
            UPDATE dishes
            SET title = $2, calories = $3, meal_of_the_day = $4, slug = $5
            WHERE id = $1
            RETURNING id, title, calories, meal_of_the_day, slug, created_at
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(calories)
        .bind(meal_of_the_day)
        .bind(slug)
        .fetch_optional(&mut **tx)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM dishes WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    /// Replace the ingredient set of a dish inside the caller's transaction.
    pub async fn set_ingredients(
        tx: &mut Transaction<'_, Postgres>,
        dish_id: Uuid,
        ingredient_ids: &[Uuid],
    ) -> Result<(), ApiError> {
        sqlx::query("DELETE FROM dish_ingredients WHERE dish_id = $1")
            .bind(dish_id)
            .execute(&mut **tx)
            .await?;
        for ingredient_id in ingredient_ids {
            sqlx::query(
                r#"
                INSERT INTO dish_ingredients (dish_id, ingredient_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(dish_id)
            .bind(ingredient_id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    pub async fn ingredients_of(db: &PgPool, dish_id: Uuid) -> Result<Vec<Ingredient>, ApiError> {
        let rows = sqlx::query_as::<_, Ingredient>(
            r#"
            SELECT i.id, i.title, i.slug, i.created_at
            FROM ingredients i
            JOIN dish_ingredients di ON di.ingredient_id = i.id
            WHERE di.dish_id = $1
            ORDER BY i.title ASC
            "#,
        )
        .bind(dish_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }
}

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::ApiError;

/// One day's meal plan, breakfast through supper. Dish slots are nullable in
/// storage (a deleted dish vacates its slot) but must all be filled to save.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DailyMeal {
    pub id: Uuid,
    pub title: String,
    pub dish_1: Option<Uuid>,
    pub dish_2: Option<Uuid>,
    pub dish_3: Option<Uuid>,
    pub dish_4: Option<Uuid>,
    pub dish_5: Option<Uuid>,
    pub calories: i32,
    pub created_at: OffsetDateTime,
}

/// A seven-day menu with derived slug, pricing and average calories.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Menu {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category_id: Option<Uuid>,
    pub price_custom: bool,
    pub price_daily: Decimal,
    pub price_weekly: Decimal,
    pub price_monthly: Decimal,
    pub calories_daily: i32,
    pub day_1: Uuid,
    pub day_2: Uuid,
    pub day_3: Uuid,
    pub day_4: Uuid,
    pub day_5: Uuid,
    pub day_6: Uuid,
    pub day_7: Uuid,
    pub slug: String,
    pub created_at: OffsetDateTime,
}

const DAILY_MEAL_COLUMNS: &str =
    "id, title, dish_1, dish_2, dish_3, dish_4, dish_5, calories, created_at";

const MENU_COLUMNS: &str = "id, title, description, category_id, price_custom, price_daily, \
     price_weekly, price_monthly, calories_daily, \
     day_1, day_2, day_3, day_4, day_5, day_6, day_7, slug, created_at";

impl DailyMeal {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<DailyMeal>, ApiError> {
        let rows = sqlx::query_as::<_, DailyMeal>(&format!(
            "SELECT {DAILY_MEAL_COLUMNS} FROM daily_meals \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<DailyMeal>, ApiError> {
        let row = sqlx::query_as::<_, DailyMeal>(&format!(
            "SELECT {DAILY_MEAL_COLUMNS} FROM daily_meals WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        db: &PgPool,
        title: &str,
        dishes: &[Uuid; 5],
        calories: i32,
    ) -> Result<DailyMeal, ApiError> {
        let row = sqlx::query_as::<_, DailyMeal>(&format!(
            "INSERT INTO daily_meals (title, dish_1, dish_2, dish_3, dish_4, dish_5, calories) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {DAILY_MEAL_COLUMNS}"
        ))
        .bind(title)
        .bind(dishes[0])
        .bind(dishes[1])
        .bind(dishes[2])
        .bind(dishes[3])
        .bind(dishes[4])
        .bind(calories)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        dishes: &[Uuid; 5],
        calories: i32,
    ) -> Result<Option<DailyMeal>, ApiError> {
        let row = sqlx::query_as::<_, DailyMeal>(&format!(
            "UPDATE daily_meals \
             SET title = $2, dish_1 = $3, dish_2 = $4, dish_3 = $5, dish_4 = $6, dish_5 = $7, \
                 calories = $8 \
             WHERE id = $1 \
             RETURNING {DAILY_MEAL_COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .bind(dishes[0])
        .bind(dishes[1])
        .bind(dishes[2])
        .bind(dishes[3])
        .bind(dishes[4])
        .bind(calories)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM daily_meals WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Menu {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Menu>, ApiError> {
        let rows = sqlx::query_as::<_, Menu>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Menu>, ApiError> {
        let row = sqlx::query_as::<_, Menu>(&format!(
            "SELECT {MENU_COLUMNS} FROM menus WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn insert(
        db: &PgPool,
        title: &str,
        description: &str,
        category_id: Option<Uuid>,
        price_custom: bool,
        prices: (Decimal, Decimal, Decimal),
        calories_daily: i32,
        days: &[Uuid; 7],
        slug: &str,
    ) -> Result<Menu, ApiError> {
        let row = sqlx::query_as::<_, Menu>(&format!(
            "INSERT INTO menus (title, description, category_id, price_custom, price_daily, \
                 price_weekly, price_monthly, calories_daily, \
                 day_1, day_2, day_3, day_4, day_5, day_6, day_7, slug) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16) \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(price_custom)
        .bind(prices.0)
        .bind(prices.1)
        .bind(prices.2)
        .bind(calories_daily)
        .bind(days[0])
        .bind(days[1])
        .bind(days[2])
        .bind(days[3])
        .bind(days[4])
        .bind(days[5])
        .bind(days[6])
        .bind(slug)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        title: &str,
        description: &str,
        category_id: Option<Uuid>,
        price_custom: bool,
        prices: (Decimal, Decimal, Decimal),
        calories_daily: i32,
        days: &[Uuid; 7],
        slug: &str,
    ) -> Result<Option<Menu>, ApiError> {
        let row = sqlx::query_as::<_, Menu>(&format!(
            "UPDATE menus \
             SET title = $2, description = $3, category_id = $4, price_custom = $5, \
                 price_daily = $6, price_weekly = $7, price_monthly = $8, calories_daily = $9, \
                 day_1 = $10, day_2 = $11, day_3 = $12, day_4 = $13, day_5 = $14, \
                 day_6 = $15, day_7 = $16, slug = $17 \
             WHERE id = $1 \
             RETURNING {MENU_COLUMNS}"
        ))
        .bind(id)
        .bind(title)
        .bind(description)
        .bind(category_id)
        .bind(price_custom)
        .bind(prices.0)
        .bind(prices.1)
        .bind(prices.2)
        .bind(calories_daily)
        .bind(days[0])
        .bind(days[1])
        .bind(days[2])
        .bind(days[3])
        .bind(days[4])
        .bind(days[5])
        .bind(days[6])
        .bind(slug)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM menus WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

/// Calorie lookup for a set of dishes.
pub async fn dish_calories(db: &PgPool, ids: &[Uuid]) -> Result<HashMap<Uuid, i32>, ApiError> {
    let rows: Vec<(Uuid, i32)> =
        sqlx::query_as("SELECT id, calories FROM dishes WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .fetch_all(db)
            .await?;
    Ok(rows.into_iter().collect())
}

/// Calorie lookup for a set of daily meals.
pub async fn daily_meal_calories(
    db: &PgPool,
    ids: &[Uuid],
) -> Result<HashMap<Uuid, i32>, ApiError> {
    let rows: Vec<(Uuid, i32)> =
        sqlx::query_as("SELECT id, calories FROM daily_meals WHERE id = ANY($1)")
            .bind(ids.to_vec())
            .fetch_all(db)
            .await?;
    Ok(rows.into_iter().collect())
}

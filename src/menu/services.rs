//! Validate-and-derive for daily meals and menus.
//!
//! Every derived column (slug, calories, weekly/monthly price) is recomputed
//! synchronously right before the write; nothing is cached. A value can only
//! go stale if a referenced dish or daily meal changes afterwards without the
//! referencing record being re-saved.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::catalog::services::{validate_max_len, validate_title};
use crate::error::ApiError;
use crate::menu::dto::{DailyMealRequest, MenuRequest};
use crate::menu::repo::{self, DailyMeal, Menu};
use crate::slug::slugify;

pub const MENU_SLUG_LEN: usize = 30;

/// Slot names in storage order, breakfast through supper.
pub const SLOT_NAMES: [&str; 5] = ["breakfast", "brunch", "lunch", "dinner", "supper"];

pub const DAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Sum the five dish slots of a daily meal.
///
/// All five slots must be filled; a partially filled meal fails validation
/// rather than summing what is there (missing slots are NOT treated as zero).
pub fn sum_slot_calories(slots: &[Option<i32>; 5]) -> Result<i32, ApiError> {
    let mut total = 0;
    for (slot, calories) in SLOT_NAMES.iter().zip(slots) {
        match calories {
            Some(c) => total += c,
            None => {
                return Err(ApiError::validation(format!("{slot} slot has no dish")));
            }
        }
    }
    Ok(total)
}

/// Weekly/monthly prices: derived from the daily price unless the menu is
/// custom-priced, in which case the submitted values pass through untouched.
/// The month is a flat 30 days; calendar-aware pricing is deliberately off.
pub fn derive_prices(
    price_custom: bool,
    price_daily: Decimal,
    submitted_weekly: Decimal,
    submitted_monthly: Decimal,
) -> (Decimal, Decimal) {
    if price_custom {
        (submitted_weekly, submitted_monthly)
    } else {
        (
            price_daily * Decimal::from(7),
            price_daily * Decimal::from(30),
        )
    }
}

/// Average daily calories over the seven day slots, rounded to the nearest
/// whole calorie.
pub fn average_daily_calories(day_calories: &[i32; 7]) -> i32 {
    let sum: i64 = day_calories.iter().map(|&c| c as i64).sum();
    (sum as f64 / 7.0).round() as i32
}

async fn resolve_dish_slots(
    db: &PgPool,
    slots: &[Option<Uuid>; 5],
) -> Result<([Uuid; 5], i32), ApiError> {
    // fail fast on empty slots before touching the database
    let mut ids = [Uuid::nil(); 5];
    for (i, (slot, id)) in SLOT_NAMES.iter().zip(slots).enumerate() {
        match id {
            Some(id) => ids[i] = *id,
            None => {
                return Err(ApiError::validation(format!("{slot} slot has no dish")));
            }
        }
    }

    let calories = repo::dish_calories(db, &ids).await?;
    let mut resolved = [None; 5];
    for (i, (slot, id)) in SLOT_NAMES.iter().zip(&ids).enumerate() {
        resolved[i] = Some(
            *calories
                .get(id)
                .ok_or_else(|| ApiError::validation(format!("{slot} references an unknown dish")))?,
        );
    }
    Ok((ids, sum_slot_calories(&resolved)?))
}

async fn resolve_day_slots(db: &PgPool, days: &[Uuid; 7]) -> Result<i32, ApiError> {
    let calories = repo::daily_meal_calories(db, days).await?;
    let mut day_calories = [0i32; 7];
    for (i, (day, id)) in DAY_NAMES.iter().zip(days).enumerate() {
        day_calories[i] = *calories.get(id).ok_or_else(|| {
            ApiError::validation(format!("{day} references an unknown daily meal"))
        })?;
    }
    Ok(average_daily_calories(&day_calories))
}

pub async fn create_daily_meal(db: &PgPool, req: &DailyMealRequest) -> Result<DailyMeal, ApiError> {
    validate_title(&req.title, 100, "title")?;
    let (dishes, calories) = resolve_dish_slots(db, &req.dish_slots()).await?;
    DailyMeal::insert(db, req.title.trim(), &dishes, calories).await
}

pub async fn update_daily_meal(
    db: &PgPool,
    id: Uuid,
    req: &DailyMealRequest,
) -> Result<DailyMeal, ApiError> {
    validate_title(&req.title, 100, "title")?;
    let (dishes, calories) = resolve_dish_slots(db, &req.dish_slots()).await?;
    DailyMeal::update(db, id, req.title.trim(), &dishes, calories)
        .await?
        .ok_or(ApiError::NotFound("daily meal"))
}

fn validate_menu(req: &MenuRequest) -> Result<(), ApiError> {
    validate_title(&req.title, 30, "title")?;
    validate_max_len(&req.description, 1000, "description")?;
    if req.price_daily < Decimal::ZERO {
        return Err(ApiError::validation("price_daily must be >= 0"));
    }
    if req.price_custom && (req.price_weekly < Decimal::ZERO || req.price_monthly < Decimal::ZERO) {
        return Err(ApiError::validation("custom prices must be >= 0"));
    }
    Ok(())
}

pub async fn create_menu(db: &PgPool, req: &MenuRequest) -> Result<Menu, ApiError> {
    validate_menu(req)?;
    let slug = slugify(&req.title, MENU_SLUG_LEN);
    let days = req.day_slots();
    let calories_daily = resolve_day_slots(db, &days).await?;
    let (weekly, monthly) = derive_prices(
        req.price_custom,
        req.price_daily,
        req.price_weekly,
        req.price_monthly,
    );
    Menu::insert(
        db,
        req.title.trim(),
        &req.description,
        req.category_id,
        req.price_custom,
        (req.price_daily, weekly, monthly),
        calories_daily,
        &days,
        &slug,
    )
    .await
}

pub async fn update_menu(db: &PgPool, id: Uuid, req: &MenuRequest) -> Result<Menu, ApiError> {
    validate_menu(req)?;
    let slug = slugify(&req.title, MENU_SLUG_LEN);
    let days = req.day_slots();
    let calories_daily = resolve_day_slots(db, &days).await?;
    let (weekly, monthly) = derive_prices(
        req.price_custom,
        req.price_daily,
        req.price_weekly,
        req.price_monthly,
    );
    Menu::update(
        db,
        id,
        req.title.trim(),
        &req.description,
        req.category_id,
        req.price_custom,
        (req.price_daily, weekly, monthly),
        calories_daily,
        &days,
        &slug,
    )
    .await?
    .ok_or(ApiError::NotFound("menu"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_five_filled_slots() {
        let slots = [Some(100), Some(200), Some(150), Some(300), Some(50)];
        assert_eq!(sum_slot_calories(&slots).unwrap(), 800);
    }

    #[test]
    fn empty_slot_fails_and_names_the_slot() {
        let slots = [Some(100), Some(200), None, Some(300), Some(50)];
        let err = sum_slot_calories(&slots).unwrap_err();
        assert_eq!(err.to_string(), "lunch slot has no dish");
    }

    #[test]
    fn derived_prices_use_flat_7_and_30_multipliers() {
        let daily: Decimal = "10.00".parse().unwrap();
        let (weekly, monthly) = derive_prices(false, daily, Decimal::ZERO, Decimal::ZERO);
        assert_eq!(weekly, "70.00".parse::<Decimal>().unwrap());
        assert_eq!(monthly, "300.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn custom_prices_pass_through_untouched() {
        let daily: Decimal = "10.00".parse().unwrap();
        let weekly_in: Decimal = "65.00".parse().unwrap();
        let monthly_in: Decimal = "250.00".parse().unwrap();
        let (weekly, monthly) = derive_prices(true, daily, weekly_in, monthly_in);
        assert_eq!(weekly, weekly_in);
        assert_eq!(monthly, monthly_in);
    }

    #[test]
    fn overlong_menu_description_fails_validation() {
        let req = MenuRequest {
            title: "Keto week".into(),
            description: "d".repeat(1001),
            category_id: None,
            price_custom: false,
            price_daily: Decimal::ZERO,
            price_weekly: Decimal::ZERO,
            price_monthly: Decimal::ZERO,
            day_1: Uuid::nil(),
            day_2: Uuid::nil(),
            day_3: Uuid::nil(),
            day_4: Uuid::nil(),
            day_5: Uuid::nil(),
            day_6: Uuid::nil(),
            day_7: Uuid::nil(),
        };
        let err = validate_menu(&req).unwrap_err();
        assert_eq!(err.to_string(), "description must be at most 1000 characters");
    }

    #[test]
    fn average_rounds_to_nearest_calorie() {
        let days = [1000, 1200, 900, 1100, 1050, 1300, 950];
        // 7500 / 7 = 1071.43
        assert_eq!(average_daily_calories(&days), 1071);
        assert_eq!(average_daily_calories(&[1000; 7]), 1000);
    }
}

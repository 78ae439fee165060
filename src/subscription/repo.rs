use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "order_status", rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Profile {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DeliverySchedule {
    pub id: Uuid,
    pub delivery_vendor: String,
    pub delivery_days_per_week: i16,
    pub price_per_delivery: Decimal,
    pub created_at: OffsetDateTime,
}

/// Subscription to a menu. The three price columns are derived and read-only
/// through the API; menu/days/weekdays_only are frozen once the row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Subscription {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub days: i32,
    pub weekdays_only: bool,
    pub delivery_schedule_id: Uuid,
    pub price_menu: Decimal,
    pub price_delivery: Decimal,
    pub price_total: Decimal,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub subscription_id: Uuid,
    pub data_start: Date,
    pub data_end: Date,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: OffsetDateTime,
}

const SUBSCRIPTION_COLUMNS: &str = "id, menu_id, days, weekdays_only, delivery_schedule_id, \
     price_menu, price_delivery, price_total, created_at";

const ORDER_COLUMNS: &str =
    "id, profile_id, subscription_id, data_start, data_end, price, status, created_at";

impl Profile {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Profile>, ApiError> {
        let rows = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, first_name, last_name, email, phone, created_at
            FROM profiles
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

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Profile>, ApiError> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            SELECT id, first_name, last_name, email, phone, created_at
            FROM profiles
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
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Profile, ApiError> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (first_name, last_name, email, phone)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email, phone, created_at
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        first_name: &str,
        last_name: &str,
        email: &str,
        phone: Option<&str>,
    ) -> Result<Option<Profile>, ApiError> {
        let row = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET first_name = $2, last_name = $3, email = $4, phone = $5
            WHERE id = $1
            RETURNING id, first_name, last_name, email, phone, created_at
            "#,
        )
        .bind(id)
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(phone)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl DeliverySchedule {
    pub async fn list(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<DeliverySchedule>, ApiError> {
        let rows = sqlx::query_as::<_, DeliverySchedule>(
            r#"
            SELECT id, delivery_vendor, delivery_days_per_week, price_per_delivery, created_at
            FROM delivery_schedules
            ORDER BY delivery_vendor ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<DeliverySchedule>, ApiError> {
        let row = sqlx::query_as::<_, DeliverySchedule>(
            r#"
            SELECT id, delivery_vendor, delivery_days_per_week, price_per_delivery, created_at
            FROM delivery_schedules
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
        delivery_vendor: &str,
        delivery_days_per_week: i16,
        price_per_delivery: Decimal,
    ) -> Result<DeliverySchedule, ApiError> {
        let row = sqlx::query_as::<_, DeliverySchedule>(
            r#"
            INSERT INTO delivery_schedules (delivery_vendor, delivery_days_per_week, price_per_delivery)
            VALUES ($1, $2, $3)
            RETURNING id, delivery_vendor, delivery_days_per_week, price_per_delivery, created_at
            "#,
        )
        .bind(delivery_vendor)
        .bind(delivery_days_per_week)
        .bind(price_per_delivery)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    pub async fn update(
        db: &PgPool,
        id: Uuid,
        delivery_vendor: &str,
        delivery_days_per_week: i16,
        price_per_delivery: Decimal,
    ) -> Result<Option<DeliverySchedule>, ApiError> {
        let row = sqlx::query_as::<_, DeliverySchedule>(
            r#"
            UPDATE delivery_schedules
            SET delivery_vendor = $2, delivery_days_per_week = $3, price_per_delivery = $4
            WHERE id = $1
            RETURNING id, delivery_vendor, delivery_days_per_week, price_per_delivery, created_at
            "#,
        )
        .bind(id)
        .bind(delivery_vendor)
        .bind(delivery_days_per_week)
        .bind(price_per_delivery)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM delivery_schedules WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Subscription {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Subscription>, ApiError> {
        let rows = sqlx::query_as::<_, Subscription>(&format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions \
             ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Subscription>, ApiError> {
        let row = sqlx::query_as::<_, Subscription>(&format!(
            "SELECT {SUBSCRIPTION_COLUMNS} FROM subscriptions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        db: &PgPool,
        menu_id: Uuid,
        days: i32,
        weekdays_only: bool,
        delivery_schedule_id: Uuid,
        prices: (Decimal, Decimal, Decimal),
    ) -> Result<Subscription, ApiError> {
        let row = sqlx::query_as::<_, Subscription>(&format!(
            "INSERT INTO subscriptions \
                 (menu_id, days, weekdays_only, delivery_schedule_id, \
                  price_menu, price_delivery, price_total) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {SUBSCRIPTION_COLUMNS}"
        ))
        .bind(menu_id)
        .bind(days)
        .bind(weekdays_only)
        .bind(delivery_schedule_id)
        .bind(prices.0)
        .bind(prices.1)
        .bind(prices.2)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Only the delivery schedule and the derived prices may change after
    /// creation; menu, days and weekdays_only are frozen.
    pub async fn update_schedule(
        db: &PgPool,
        id: Uuid,
        delivery_schedule_id: Uuid,
        prices: (Decimal, Decimal, Decimal),
    ) -> Result<Option<Subscription>, ApiError> {
        let row = sqlx::query_as::<_, Subscription>(&format!(
            "UPDATE subscriptions \
             SET delivery_schedule_id = $2, price_menu = $3, price_delivery = $4, \
                 price_total = $5 \
             WHERE id = $1 \
             RETURNING {SUBSCRIPTION_COLUMNS}"
        ))
        .bind(id)
        .bind(delivery_schedule_id)
        .bind(prices.0)
        .bind(prices.1)
        .bind(prices.2)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM subscriptions WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

impl Order {
    pub async fn list(db: &PgPool, limit: i64, offset: i64) -> Result<Vec<Order>, ApiError> {
        let rows = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders ORDER BY created_at DESC LIMIT $1 OFFSET $2"
        ))
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn get(db: &PgPool, id: Uuid) -> Result<Option<Order>, ApiError> {
        let row = sqlx::query_as::<_, Order>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn insert(
        db: &PgPool,
        profile_id: Uuid,
        subscription_id: Uuid,
        data_start: Date,
        data_end: Date,
        price: Decimal,
        status: OrderStatus,
    ) -> Result<Order, ApiError> {
        let row = sqlx::query_as::<_, Order>(&format!(
            "INSERT INTO orders \
                 (profile_id, subscription_id, data_start, data_end, price, status) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(profile_id)
        .bind(subscription_id)
        .bind(data_start)
        .bind(data_end)
        .bind(price)
        .bind(status)
        .fetch_one(db)
        .await?;
        Ok(row)
    }

    /// Everything except the status is frozen once the order exists.
    pub async fn update_status(
        db: &PgPool,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, ApiError> {
        let row = sqlx::query_as::<_, Order>(&format!(
            "UPDATE orders SET status = $2 WHERE id = $1 RETURNING {ORDER_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    pub async fn delete(db: &PgPool, id: Uuid) -> Result<bool, ApiError> {
        let res = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(res.rows_affected() > 0)
    }
}

/// Pricing inputs read off the referenced menu and schedule.
#[derive(Debug, FromRow)]
pub struct MenuPrice {
    pub price_daily: Decimal,
}

#[derive(Debug, FromRow)]
pub struct SchedulePrice {
    pub price_per_delivery: Decimal,
}

pub async fn menu_price(db: &PgPool, menu_id: Uuid) -> Result<Option<MenuPrice>, ApiError> {
    let row = sqlx::query_as::<_, MenuPrice>("SELECT price_daily FROM menus WHERE id = $1")
        .bind(menu_id)
        .fetch_optional(db)
        .await?;
    Ok(row)
}

pub async fn schedule_price(
    db: &PgPool,
    schedule_id: Uuid,
) -> Result<Option<SchedulePrice>, ApiError> {
    let row = sqlx::query_as::<_, SchedulePrice>(
        "SELECT price_per_delivery FROM delivery_schedules WHERE id = $1",
    )
    .bind(schedule_id)
    .fetch_optional(db)
    .await?;
    Ok(row)
}

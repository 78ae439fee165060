use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::{Date, OffsetDateTime};
use uuid::Uuid;

use crate::subscription::repo::OrderStatus;

fn default_limit() -> i64 {
    20
}

/// Query parameters for the subscription admin list view, mirroring its
/// configured filters: menu FK, vendor, price_total and menu calorie sliders,
/// plus free-text search over the menu's title/description.
#[derive(Debug, Deserialize)]
pub struct SubscriptionListQuery {
    pub menu_id: Option<Uuid>,
    pub delivery_vendor: Option<String>,
    pub price_total_min: Option<Decimal>,
    pub price_total_max: Option<Decimal>,
    pub menu_calories_daily_min: Option<i32>,
    pub menu_calories_daily_max: Option<i32>,
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct SubscriptionListRow {
    pub id: Uuid,
    pub menu_id: Uuid,
    pub menu_title: String,
    pub days: i32,
    pub weekdays_only: bool,
    pub delivery_vendor: String,
    pub price_menu: Decimal,
    pub price_delivery: Decimal,
    pub price_total: Decimal,
    pub menu_calories_daily: i32,
    pub created_at: OffsetDateTime,
}

/// Query parameters for the order admin list view: status choice, price
/// slider, created_at/data_end date ranges, vendor FK, name search.
#[derive(Debug, Deserialize)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub price_min: Option<Decimal>,
    pub price_max: Option<Decimal>,
    pub created_after: Option<Date>,
    pub created_before: Option<Date>,
    pub data_end_after: Option<Date>,
    pub data_end_before: Option<Date>,
    pub delivery_vendor: Option<String>,
    pub q: Option<String>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct OrderListRow {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub profile_first_name: String,
    pub profile_last_name: String,
    pub subscription_id: Uuid,
    pub delivery_vendor: String,
    pub data_start: Date,
    pub data_end: Date,
    pub price: Decimal,
    pub status: OrderStatus,
    pub created_at: OffsetDateTime,
}

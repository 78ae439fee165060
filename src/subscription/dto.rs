use rust_decimal::Decimal;
use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use crate::subscription::repo::OrderStatus;

#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeliveryScheduleRequest {
    pub delivery_vendor: String,
    pub delivery_days_per_week: i16,
    pub price_per_delivery: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct CreateSubscriptionRequest {
    pub menu_id: Uuid,
    pub days: i32,
    #[serde(default)]
    pub weekdays_only: bool,
    pub delivery_schedule_id: Uuid,
}

/// Once a subscription exists, menu/days/weekdays_only are locked; only the
/// delivery schedule can still be swapped (prices are re-derived).
#[derive(Debug, Deserialize)]
pub struct UpdateSubscriptionRequest {
    pub delivery_schedule_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    pub profile_id: Uuid,
    pub subscription_id: Uuid,
    pub data_start: Date,
    pub data_end: Date,
    pub status: Option<OrderStatus>,
}

/// Identity, period and price are locked after creation; only status moves.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderRequest {
    pub status: OrderStatus,
}

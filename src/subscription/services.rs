//! Subscription and order pricing, derived right before every write.

use rust_decimal::Decimal;
use sqlx::PgPool;
use time::Date;
use uuid::Uuid;

use crate::catalog::services::{validate_max_len, validate_title};
use crate::error::ApiError;
use crate::subscription::dto::{
    CreateOrderRequest, CreateSubscriptionRequest, DeliveryScheduleRequest, ProfileRequest,
    UpdateSubscriptionRequest,
};
use crate::subscription::repo::{self, Order, OrderStatus, Subscription};

/// Number of billed/delivered days over a subscription of `days` calendar
/// days. Weekday-only subscriptions bill five days out of every seven,
/// rounded down for partial weeks.
pub fn delivery_count(days: i32, weekdays_only: bool) -> i32 {
    if weekdays_only {
        // widen before multiplying; days * 5 can exceed i32
        (i64::from(days) * 5 / 7) as i32
    } else {
        days
    }
}

/// (price_menu, price_delivery, price_total) for a subscription.
pub fn subscription_prices(
    menu_price_daily: Decimal,
    price_per_delivery: Decimal,
    days: i32,
    weekdays_only: bool,
) -> (Decimal, Decimal, Decimal) {
    let count = Decimal::from(delivery_count(days, weekdays_only));
    let price_menu = menu_price_daily * count;
    let price_delivery = price_per_delivery * count;
    let price_total = price_menu + price_delivery;
    (price_menu, price_delivery, price_total)
}

pub fn validate_profile(req: &ProfileRequest) -> Result<(), ApiError> {
    validate_title(&req.first_name, 60, "first_name")?;
    validate_title(&req.last_name, 60, "last_name")?;
    validate_title(&req.email, 254, "email")?;
    if let Some(phone) = &req.phone {
        validate_max_len(phone, 30, "phone")?;
    }
    Ok(())
}

pub fn validate_schedule(req: &DeliveryScheduleRequest) -> Result<(), ApiError> {
    validate_title(&req.delivery_vendor, 60, "delivery_vendor")?;
    if !(1..=7).contains(&req.delivery_days_per_week) {
        return Err(ApiError::validation(
            "delivery_days_per_week must be between 1 and 7",
        ));
    }
    if req.price_per_delivery < Decimal::ZERO {
        return Err(ApiError::validation("price_per_delivery must be >= 0"));
    }
    Ok(())
}

pub fn validate_period(data_start: Date, data_end: Date) -> Result<(), ApiError> {
    if data_start > data_end {
        return Err(ApiError::validation("data_start must not be after data_end"));
    }
    Ok(())
}

async fn derive_prices(
    db: &PgPool,
    menu_id: Uuid,
    delivery_schedule_id: Uuid,
    days: i32,
    weekdays_only: bool,
) -> Result<(Decimal, Decimal, Decimal), ApiError> {
    let menu = repo::menu_price(db, menu_id)
        .await?
        .ok_or(ApiError::NotFound("menu"))?;
    let schedule = repo::schedule_price(db, delivery_schedule_id)
        .await?
        .ok_or(ApiError::NotFound("delivery schedule"))?;
    Ok(subscription_prices(
        menu.price_daily,
        schedule.price_per_delivery,
        days,
        weekdays_only,
    ))
}

pub async fn create_subscription(
    db: &PgPool,
    req: &CreateSubscriptionRequest,
) -> Result<Subscription, ApiError> {
    if req.days < 1 {
        return Err(ApiError::validation("days must be >= 1"));
    }
    let prices = derive_prices(
        db,
        req.menu_id,
        req.delivery_schedule_id,
        req.days,
        req.weekdays_only,
    )
    .await?;
    Subscription::insert(
        db,
        req.menu_id,
        req.days,
        req.weekdays_only,
        req.delivery_schedule_id,
        prices,
    )
    .await
}

pub async fn update_subscription(
    db: &PgPool,
    id: Uuid,
    req: &UpdateSubscriptionRequest,
) -> Result<Subscription, ApiError> {
    let existing = Subscription::get(db, id)
        .await?
        .ok_or(ApiError::NotFound("subscription"))?;
    let prices = derive_prices(
        db,
        existing.menu_id,
        req.delivery_schedule_id,
        existing.days,
        existing.weekdays_only,
    )
    .await?;
    Subscription::update_schedule(db, id, req.delivery_schedule_id, prices)
        .await?
        .ok_or(ApiError::NotFound("subscription"))
}

/// Price and status of a new order: the price snapshots the subscription's
/// total as of save time (later subscription edits do not touch it), and the
/// status defaults to pending when the caller supplies none.
pub fn order_snapshot(
    subscription_total: Decimal,
    status: Option<OrderStatus>,
) -> (Decimal, OrderStatus) {
    (subscription_total, status.unwrap_or(OrderStatus::Pending))
}

pub async fn create_order(db: &PgPool, req: &CreateOrderRequest) -> Result<Order, ApiError> {
    validate_period(req.data_start, req.data_end)?;
    let subscription = Subscription::get(db, req.subscription_id)
        .await?
        .ok_or(ApiError::NotFound("subscription"))?;
    let (price, status) = order_snapshot(subscription.price_total, req.status);
    Order::insert(
        db,
        req.profile_id,
        req.subscription_id,
        req.data_start,
        req.data_end,
        price,
        status,
    )
    .await
}

pub async fn update_order(db: &PgPool, id: Uuid, status: OrderStatus) -> Result<Order, ApiError> {
    Order::update_status(db, id, status)
        .await?
        .ok_or(ApiError::NotFound("order"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn weekday_only_bills_five_of_seven_days() {
        assert_eq!(delivery_count(14, true), 10);
        assert_eq!(delivery_count(7, true), 5);
        assert_eq!(delivery_count(10, true), 7);
        assert_eq!(delivery_count(14, false), 14);
    }

    #[test]
    fn huge_day_counts_do_not_overflow() {
        assert_eq!(delivery_count(500_000_000, true), 357_142_857);
        assert_eq!(delivery_count(i32::MAX, true), 1_533_916_890);
        assert_eq!(delivery_count(i32::MAX, false), i32::MAX);
    }

    #[test]
    fn prices_add_up() {
        let daily: Decimal = "12.50".parse().unwrap();
        let per_delivery: Decimal = "2.00".parse().unwrap();
        let (menu, delivery, total) = subscription_prices(daily, per_delivery, 14, true);
        assert_eq!(menu, "125.00".parse::<Decimal>().unwrap());
        assert_eq!(delivery, "20.00".parse::<Decimal>().unwrap());
        assert_eq!(total, "145.00".parse::<Decimal>().unwrap());
    }

    #[test]
    fn order_price_snapshots_subscription_total() {
        let total: Decimal = "145.00".parse().unwrap();
        let (price, status) = order_snapshot(total, None);
        assert_eq!(price, total);
        assert_eq!(status, OrderStatus::Pending);

        let (price, status) = order_snapshot(total, Some(OrderStatus::Confirmed));
        assert_eq!(price, total);
        assert_eq!(status, OrderStatus::Confirmed);
    }

    #[test]
    fn schedule_and_profile_text_fields_are_validated() {
        let schedule = DeliveryScheduleRequest {
            delivery_vendor: "v".repeat(61),
            delivery_days_per_week: 5,
            price_per_delivery: Decimal::ZERO,
        };
        assert!(validate_schedule(&schedule).is_err());

        let schedule = DeliveryScheduleRequest {
            delivery_vendor: "Velotaxi".into(),
            delivery_days_per_week: 8,
            price_per_delivery: Decimal::ZERO,
        };
        let err = validate_schedule(&schedule).unwrap_err();
        assert_eq!(err.to_string(), "delivery_days_per_week must be between 1 and 7");

        let profile = ProfileRequest {
            first_name: "Kim".into(),
            last_name: "Law".into(),
            email: "kim@example.com".into(),
            phone: Some("0".repeat(31)),
        };
        assert!(validate_profile(&profile).is_err());

        let profile = ProfileRequest {
            first_name: "Kim".into(),
            last_name: "Law".into(),
            email: "kim@example.com".into(),
            phone: None,
        };
        assert!(validate_profile(&profile).is_ok());
    }

    #[test]
    fn inverted_period_is_rejected() {
        assert!(validate_period(date!(2026 - 09 - 10), date!(2026 - 09 - 01)).is_err());
        assert!(validate_period(date!(2026 - 09 - 01), date!(2026 - 09 - 01)).is_ok());
        assert!(validate_period(date!(2026 - 09 - 01), date!(2026 - 09 - 30)).is_ok());
    }
}

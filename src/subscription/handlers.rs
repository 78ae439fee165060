use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::dto::Pagination;
use crate::error::ApiError;
use crate::subscription::dto::{
    CreateOrderRequest, CreateSubscriptionRequest, DeliveryScheduleRequest, ProfileRequest,
    UpdateOrderRequest, UpdateSubscriptionRequest,
};
use crate::subscription::repo::{DeliverySchedule, Order, Profile, Subscription};
use crate::subscription::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(list_profiles).post(create_profile))
        .route(
            "/profiles/:id",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
        .route(
            "/delivery-schedules",
            get(list_schedules).post(create_schedule),
        )
        .route(
            "/delivery-schedules/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
        .route(
            "/subscriptions",
            get(list_subscriptions).post(create_subscription),
        )
        .route(
            "/subscriptions/:id",
            get(get_subscription)
                .put(update_subscription)
                .delete(delete_subscription),
        )
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

// --- profiles ---

#[instrument(skip(state))]
async fn list_profiles(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Profile>>, ApiError> {
    Ok(Json(Profile::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Profile>, ApiError> {
    Profile::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("profile"))
}

#[instrument(skip(state, body))]
async fn create_profile(
    State(state): State<AppState>,
    Json(body): Json<ProfileRequest>,
) -> Result<(StatusCode, Json<Profile>), ApiError> {
    services::validate_profile(&body)?;
    let profile = Profile::insert(
        &state.db,
        &body.first_name,
        &body.last_name,
        &body.email,
        body.phone.as_deref(),
    )
    .await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

#[instrument(skip(state, body))]
async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<ProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    services::validate_profile(&body)?;
    Profile::update(
        &state.db,
        id,
        &body.first_name,
        &body.last_name,
        &body.email,
        body.phone.as_deref(),
    )
    .await?
    .map(Json)
    .ok_or(ApiError::NotFound("profile"))
}

#[instrument(skip(state))]
async fn delete_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Profile::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("profile"))
    }
}

// --- delivery schedules ---

#[instrument(skip(state))]
async fn list_schedules(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<DeliverySchedule>>, ApiError> {
    Ok(Json(
        DeliverySchedule::list(&state.db, p.limit, p.offset).await?,
    ))
}

#[instrument(skip(state))]
async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliverySchedule>, ApiError> {
    DeliverySchedule::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("delivery schedule"))
}

#[instrument(skip(state, body))]
async fn create_schedule(
    State(state): State<AppState>,
    Json(body): Json<DeliveryScheduleRequest>,
) -> Result<(StatusCode, Json<DeliverySchedule>), ApiError> {
    services::validate_schedule(&body)?;
    let schedule = DeliverySchedule::insert(
        &state.db,
        &body.delivery_vendor,
        body.delivery_days_per_week,
        body.price_per_delivery,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(schedule)))
}

#[instrument(skip(state, body))]
async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DeliveryScheduleRequest>,
) -> Result<Json<DeliverySchedule>, ApiError> {
    services::validate_schedule(&body)?;
    DeliverySchedule::update(
        &state.db,
        id,
        &body.delivery_vendor,
        body.delivery_days_per_week,
        body.price_per_delivery,
    )
    .await?
    .map(Json)
    .ok_or(ApiError::NotFound("delivery schedule"))
}

#[instrument(skip(state))]
async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if DeliverySchedule::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("delivery schedule"))
    }
}

// --- subscriptions ---

#[instrument(skip(state))]
async fn list_subscriptions(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Subscription>>, ApiError> {
    Ok(Json(
        Subscription::list(&state.db, p.limit, p.offset).await?,
    ))
}

#[instrument(skip(state))]
async fn get_subscription(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Subscription>, ApiError> {
    Subscription::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("subscription"))
}

#[instrument(skip(state, body))]
async fn create_subscription(
    State(state): State<AppState>,
    Json(body): Json<CreateSubscriptionRequest>,
) -> Result<(StatusCode, Json<Subscription>), ApiError> {
    let subscription = services::create_subscription(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(subscription)))
}

#[instrument(skip(state, body))]
async fn update_subscription(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateSubscriptionRequest>,
) -> Result<Json<Subscription>, ApiError> {
    Ok(Json(
        services::update_subscription(&state.db, id, &body).await?,
    ))
}

#[instrument(skip(state))]
async fn delete_subscription(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Subscription::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("subscription"))
    }
}

// --- orders ---

#[instrument(skip(state))]
async fn list_orders(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(Order::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, ApiError> {
    Order::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("order"))
}

#[instrument(skip(state, body))]
async fn create_order(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let order = services::create_order(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[instrument(skip(state, body))]
async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(
        services::update_order(&state.db, id, body.status).await?,
    ))
}

#[instrument(skip(state))]
async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Order::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("order"))
    }
}

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::admin::config::AdminResource;
use crate::admin::dto::{OrderListQuery, OrderListRow, SubscriptionListQuery, SubscriptionListRow};
use crate::admin::repo;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/admin/resources", get(list_resources))
        .route("/admin/resources/:name", get(get_resource))
        .route("/admin/subscriptions", get(list_subscriptions))
        .route("/admin/orders", get(list_orders))
}

#[instrument(skip(state))]
async fn list_resources(State(state): State<AppState>) -> Json<Vec<AdminResource>> {
    Json(state.admin.all().to_vec())
}

#[instrument(skip(state))]
async fn get_resource(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<AdminResource>, ApiError> {
    state
        .admin
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound("admin resource"))
}

#[instrument(skip(state))]
async fn list_subscriptions(
    State(state): State<AppState>,
    Query(q): Query<SubscriptionListQuery>,
) -> Result<Json<Vec<SubscriptionListRow>>, ApiError> {
    Ok(Json(repo::list_subscriptions(&state.db, &q).await?))
}

#[instrument(skip(state))]
async fn list_orders(
    State(state): State<AppState>,
    Query(q): Query<OrderListQuery>,
) -> Result<Json<Vec<OrderListRow>>, ApiError> {
    Ok(Json(repo::list_orders(&state.db, &q).await?))
}

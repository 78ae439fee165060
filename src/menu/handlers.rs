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
use crate::menu::dto::{DailyMealRequest, MenuRequest};
use crate::menu::repo::{DailyMeal, Menu};
use crate::menu::services;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/daily-meals", get(list_daily_meals).post(create_daily_meal))
        .route(
            "/daily-meals/:id",
            get(get_daily_meal)
                .put(update_daily_meal)
                .delete(delete_daily_meal),
        )
        .route("/menus", get(list_menus).post(create_menu))
        .route(
            "/menus/:id",
            get(get_menu).put(update_menu).delete(delete_menu),
        )
}

#[instrument(skip(state))]
async fn list_daily_meals(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<DailyMeal>>, ApiError> {
    Ok(Json(DailyMeal::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_daily_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DailyMeal>, ApiError> {
    DailyMeal::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("daily meal"))
}

#[instrument(skip(state, body))]
async fn create_daily_meal(
    State(state): State<AppState>,
    Json(body): Json<DailyMealRequest>,
) -> Result<(StatusCode, Json<DailyMeal>), ApiError> {
    let meal = services::create_daily_meal(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(meal)))
}

#[instrument(skip(state, body))]
async fn update_daily_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DailyMealRequest>,
) -> Result<Json<DailyMeal>, ApiError> {
    Ok(Json(
        services::update_daily_meal(&state.db, id, &body).await?,
    ))
}

#[instrument(skip(state))]
async fn delete_daily_meal(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if DailyMeal::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("daily meal"))
    }
}

#[instrument(skip(state))]
async fn list_menus(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Menu>>, ApiError> {
    Ok(Json(Menu::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Menu>, ApiError> {
    Menu::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("menu"))
}

#[instrument(skip(state, body))]
async fn create_menu(
    State(state): State<AppState>,
    Json(body): Json<MenuRequest>,
) -> Result<(StatusCode, Json<Menu>), ApiError> {
    let menu = services::create_menu(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(menu)))
}

#[instrument(skip(state, body))]
async fn update_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<MenuRequest>,
) -> Result<Json<Menu>, ApiError> {
    Ok(Json(services::update_menu(&state.db, id, &body).await?))
}

#[instrument(skip(state))]
async fn delete_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Menu::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("menu"))
    }
}

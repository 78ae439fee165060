use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::instrument;
use uuid::Uuid;

use crate::catalog::dto::{CategoryRequest, DishDetails, DishRequest, IngredientRequest};
use crate::catalog::repo::{Category, Dish, Ingredient};
use crate::catalog::services;
use crate::dto::Pagination;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:id",
            get(get_category).put(update_category).delete(delete_category),
        )
        .route("/ingredients", get(list_ingredients).post(create_ingredient))
        .route(
            "/ingredients/:id",
            get(get_ingredient)
                .put(update_ingredient)
                .delete(delete_ingredient),
        )
        .route("/dishes", get(list_dishes).post(create_dish))
        .route(
            "/dishes/:id",
            get(get_dish).put(update_dish).delete(delete_dish),
        )
}

// --- categories ---

#[instrument(skip(state))]
async fn list_categories(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Category>>, ApiError> {
    Ok(Json(Category::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Category>, ApiError> {
    Category::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("category"))
}

#[instrument(skip(state, body))]
async fn create_category(
    State(state): State<AppState>,
    Json(body): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), ApiError> {
    let category = services::create_category(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

#[instrument(skip(state, body))]
async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<CategoryRequest>,
) -> Result<Json<Category>, ApiError> {
    Ok(Json(services::update_category(&state.db, id, &body).await?))
}

#[instrument(skip(state))]
async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Category::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("category"))
    }
}

// --- ingredients ---

#[instrument(skip(state))]
async fn list_ingredients(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    Ok(Json(Ingredient::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_ingredient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Ingredient>, ApiError> {
    Ingredient::get(&state.db, id)
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("ingredient"))
}

#[instrument(skip(state, body))]
async fn create_ingredient(
    State(state): State<AppState>,
    Json(body): Json<IngredientRequest>,
) -> Result<(StatusCode, Json<Ingredient>), ApiError> {
    let ingredient = services::create_ingredient(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(ingredient)))
}

#[instrument(skip(state, body))]
async fn update_ingredient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<IngredientRequest>,
) -> Result<Json<Ingredient>, ApiError> {
    Ok(Json(
        services::update_ingredient(&state.db, id, &body).await?,
    ))
}

#[instrument(skip(state))]
async fn delete_ingredient(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Ingredient::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("ingredient"))
    }
}

// --- dishes ---

#[instrument(skip(state))]
async fn list_dishes(
    State(state): State<AppState>,
    Query(p): Query<Pagination>,
) -> Result<Json<Vec<Dish>>, ApiError> {
    Ok(Json(Dish::list(&state.db, p.limit, p.offset).await?))
}

#[instrument(skip(state))]
async fn get_dish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DishDetails>, ApiError> {
    let dish = Dish::get(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("dish"))?;
    let ingredients = Dish::ingredients_of(&state.db, id).await?;
    Ok(Json(DishDetails { dish, ingredients }))
}

#[instrument(skip(state, body))]
async fn create_dish(
    State(state): State<AppState>,
    Json(body): Json<DishRequest>,
) -> Result<(StatusCode, Json<Dish>), ApiError> {
    let dish = services::create_dish(&state.db, &body).await?;
    Ok((StatusCode::CREATED, Json(dish)))
}

#[instrument(skip(state, body))]
async fn update_dish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(body): Json<DishRequest>,
) -> Result<Json<Dish>, ApiError> {
    Ok(Json(services::update_dish(&state.db, id, &body).await?))
}

#[instrument(skip(state))]
async fn delete_dish(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if Dish::delete(&state.db, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound("dish"))
    }
}

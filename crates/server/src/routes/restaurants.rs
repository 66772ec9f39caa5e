use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use models::views::{RestaurantDetail, RestaurantSummary};
use service::{db::restaurant_service, domain::NewRestaurant};

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    get, path = "/restaurants", tag = "restaurants",
    responses(
        (status = 200, description = "Restaurant summaries", body = [crate::openapi::RestaurantSummaryDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let list = restaurant_service::list_restaurants(&state.db).await?;
    info!(count = list.len(), "list restaurants");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 200, description = "Restaurant with its pizzas", body = crate::openapi::RestaurantDetailDoc),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn get(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let id = ApiError::entity_id(id, "Restaurant")?;
    Ok(Json(restaurant_service::get_restaurant(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/restaurants", tag = "restaurants",
    request_body = crate::openapi::NewRestaurantDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantSummaryDoc),
        (status = 400, description = "Missing or invalid data", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewRestaurant>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantSummary>), ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "unreadable restaurant body");
        ApiError::missing_data()
    })?;
    let created = restaurant_service::create_restaurant(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/restaurants/{id}", tag = "restaurants",
    params(("id" = i32, Path, description = "Restaurant ID")),
    responses(
        (status = 204, description = "Deleted along with its restaurant pizzas"),
        (status = 404, description = "Restaurant not found", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = ApiError::entity_id(id, "Restaurant")?;
    restaurant_service::delete_restaurant(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use models::views::RestaurantPizzaCreated;
use service::{db::restaurant_pizza_service, domain::NewRestaurantPizza};

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    post, path = "/restaurant_pizzas", tag = "restaurant_pizzas",
    request_body = crate::openapi::NewRestaurantPizzaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::RestaurantPizzaCreatedDoc),
        (status = 400, description = "Missing data or price outside 1..=30", body = crate::openapi::ErrorsDoc),
        (status = 404, description = "Pizza or Restaurant not found", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    // An absent or unparsable body is treated like a body with no fields.
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "unreadable restaurant_pizza body");
        ApiError::missing_data()
    })?;
    let created = restaurant_pizza_service::create_restaurant_pizza(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

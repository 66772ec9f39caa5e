use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use models::views::PizzaSummary;
use service::{db::pizza_service, domain::NewPizza};

use crate::{errors::ApiError, routes::AppState};

#[utoipa::path(
    get, path = "/pizzas", tag = "pizzas",
    responses(
        (status = 200, description = "Pizza summaries", body = [crate::openapi::PizzaSummaryDoc]),
        (status = 500, description = "Store error", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PizzaSummary>>, ApiError> {
    let list = pizza_service::list_pizzas(&state.db).await?;
    info!(count = list.len(), "list pizzas");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/pizzas", tag = "pizzas",
    request_body = crate::openapi::NewPizzaDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::PizzaSummaryDoc),
        (status = 400, description = "Missing or invalid data", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<NewPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<PizzaSummary>), ApiError> {
    let Json(input) = payload.map_err(|e| {
        debug!(error = %e, "unreadable pizza body");
        ApiError::missing_data()
    })?;
    let created = pizza_service::create_pizza(&state.db, input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    delete, path = "/pizzas/{id}", tag = "pizzas",
    params(("id" = i32, Path, description = "Pizza ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Pizza not found", body = crate::openapi::ErrorDoc),
        (status = 409, description = "Pizza is still offered by a restaurant", body = crate::openapi::ErrorsDoc)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = ApiError::entity_id(id, "Pizza")?;
    pizza_service::delete_pizza(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

use axum::extract::{rejection::PathRejection, Path};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use service::errors::ServiceError;
use tracing::{debug, error, warn};

/// Handler error carrying the service taxonomy to the wire.
///
/// Client mistakes on writes render as `{"errors": [..]}`, a missing
/// addressed entity as `{"error": ..}`. Store failures are logged and
/// rendered without detail.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl ApiError {
    pub fn missing_data() -> Self {
        Self(ServiceError::MissingData("Missing data".into()))
    }

    /// Unwrap an id path segment; ids that are not an `i32` cannot name a
    /// stored row, so they answer as that entity not being found.
    pub fn entity_id(path: Result<Path<i32>, PathRejection>, entity: &str) -> Result<i32, Self> {
        path.map(|Path(id)| id).map_err(|e| {
            debug!(error = %e, entity, "unparsable id in path");
            Self(ServiceError::not_found(entity))
        })
    }

    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::Validation(_) | ServiceError::MissingData(_) => StatusCode::BAD_REQUEST,
            ServiceError::ReferenceNotFound(_) | ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            ServiceError::NotFound(msg) => json!({ "error": msg }),
            ServiceError::Db(detail) => {
                error!(error = %detail, "request failed on store error");
                json!({ "error": "Internal server error" })
            }
            other => {
                warn!(status = status.as_u16(), error = %other, "request rejected");
                json!({ "errors": [other.message()] })
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_taxonomy() {
        let cases = [
            (ServiceError::Validation("v".into()), StatusCode::BAD_REQUEST),
            (ServiceError::MissingData("m".into()), StatusCode::BAD_REQUEST),
            (ServiceError::ReferenceNotFound("r".into()), StatusCode::NOT_FOUND),
            (ServiceError::NotFound("n".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("c".into()), StatusCode::CONFLICT),
            (ServiceError::Db("d".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError(err).status(), expected);
        }
    }

    #[test]
    fn internal_errors_do_not_leak() {
        let resp = ApiError(ServiceError::Db("connection refused at 10.0.0.3".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

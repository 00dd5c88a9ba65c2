use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use server_api::{PredictError, PredictRequest};
use shared::{error::ErrorBody, protocol::PredictionResult};
use tracing::{error, info, warn};

pub(crate) type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorBody>)>;

pub(crate) async fn healthz() -> &'static str {
    "ok"
}

pub(crate) async fn predict(
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> ApiResult<PredictionResult> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected prediction request body");
        (rejection.status(), Json(ErrorBody::new(rejection.body_text())))
    })?;

    info!(
        courses = request.courses.len(),
        certificates = request.certificates.len(),
        "received prediction request"
    );

    match server_api::predict(&request) {
        Ok(result) => {
            info!(
                grade = %result.predicted_grade,
                risk = %result.risk_level,
                "returning prediction"
            );
            Ok(Json(result))
        }
        Err(err) => {
            let status = status_for(&err);
            if status.is_server_error() {
                error!(%err, "prediction failed");
            } else {
                warn!(%err, "prediction request invalid");
            }
            Err((status, Json(err.body())))
        }
    }
}

pub(crate) async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

fn status_for(err: &PredictError) -> StatusCode {
    match err {
        PredictError::Validation(_) => StatusCode::BAD_REQUEST,
        PredictError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;

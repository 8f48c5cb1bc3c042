use std::sync::Arc;

use axum::extract::Path;
use axum::{Extension, Json};
use tracing::info;

use super::dto::{ApiIndex, ConversionResponse, ConvertIndex};
use super::error::{ApiError, ApiResult};
use crate::domain::{Service, parse_temperature};

pub async fn root() -> Json<ApiIndex> {
    Json(ApiIndex::default())
}

pub async fn convert_index() -> Json<ConvertIndex> {
    Json(ConvertIndex::default())
}

/// `GET /convert/{temperature}/{unit}/{convertTo}`
pub async fn convert_temperature(
    Extension(svc): Extension<Arc<Service>>,
    Path((temperature, unit, convert_to)): Path<(String, String, String)>,
) -> ApiResult<Json<ConversionResponse>> {
    info!(%temperature, %unit, %convert_to, "Converting temperature");

    let value = parse_temperature(&temperature)?;
    let result = svc.convert(value, &unit, &convert_to)?;

    Ok(Json(result.into()))
}

pub async fn not_found() -> ApiError {
    ApiError::not_found()
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}

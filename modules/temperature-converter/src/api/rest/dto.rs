//! REST DTOs for the temperature converter module
//!
//! These types are transport-specific (serde for JSON).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::ConversionResult;

pub const DOCUMENTATION_URL: &str = "/documentation";
pub const OPENAPI_URL: &str = "/openapi.json";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub message: String,
    pub endpoints: Vec<String>,
    pub documentation: String,
    #[serde(rename = "open-api-doc")]
    pub open_api_doc: String,
}

impl Default for ApiIndex {
    fn default() -> Self {
        Self {
            message: "Welcome to the Temperature Converter API".to_owned(),
            endpoints: vec!["/convert".to_owned()],
            documentation: DOCUMENTATION_URL.to_owned(),
            open_api_doc: OPENAPI_URL.to_owned(),
        }
    }
}

/// Body of `GET /convert`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertIndex {
    pub message: String,
    pub documentation: String,
    #[serde(rename = "open-api-doc")]
    pub open_api_doc: String,
}

impl Default for ConvertIndex {
    fn default() -> Self {
        Self {
            message: "This endpoint is Used to convert temperatures".to_owned(),
            documentation: DOCUMENTATION_URL.to_owned(),
            open_api_doc: OPENAPI_URL.to_owned(),
        }
    }
}

/// Converted temperature. `value` is written as a JSON number carrying every
/// digit of the decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub value: Decimal,
}

impl From<ConversionResult> for ConversionResponse {
    fn from(result: ConversionResult) -> Self {
        Self {
            value: result.value(),
        }
    }
}

/// Error body shared by every non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub detail: String,
}

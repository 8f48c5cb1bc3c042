//! Route registration for the temperature converter module

use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use super::handlers;
use crate::domain::Service;

pub const ROOT_PATH: &str = "/";
pub const CONVERT_INDEX_PATH: &str = "/convert";
pub const CONVERT_PATH: &str = "/convert/{temperature}/{unit}/{convert_to}";
/// Same route with one trailing slash, which existing clients send.
const CONVERT_PATH_SLASH: &str = "/convert/{temperature}/{unit}/{convert_to}/";

/// Register all REST routes of the module.
///
/// Any path of another shape (e.g. an extra segment after `convert_to`)
/// falls through to a `404 {"detail": "Not Found"}`; a known path hit with
/// another method gets `405 {"detail": "Method Not Allowed"}`.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route(ROOT_PATH, get(handlers::root))
        .route(CONVERT_INDEX_PATH, get(handlers::convert_index))
        .route(CONVERT_PATH, get(handlers::convert_temperature))
        .route(CONVERT_PATH_SLASH, get(handlers::convert_temperature))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(Extension(service))
}

//! REST surface of the temperature converter module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;

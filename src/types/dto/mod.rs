// DTOs - poem-openapi request/response objects
pub mod audit;
pub mod common;
pub mod monitor;

// Library exports for integration tests and external use

pub mod api;
pub mod app_data;
pub mod config;
pub mod errors;
pub mod monitor;
pub mod services;
pub mod stores;
pub mod types;

pub use app_data::AppData;

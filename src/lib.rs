pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod storage;
pub mod telemetry;
pub mod validation;

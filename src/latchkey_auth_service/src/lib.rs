//! HTTP service assembly: routes, CORS, request tracing and the standalone runner.

mod auth_service;
pub mod telemetry;

pub use auth_service::AuthService;

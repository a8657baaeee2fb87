use axum::{Json, extract::State, response::IntoResponse};
use chrono::Utc;
use latchkey_core::{AccountStore, PasswordHasher};
use serde::{Deserialize, Serialize};

use crate::config::SERVICE_TITLE;
use crate::http::AuthState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Endpoints {
    pub health: String,
    pub check_email: String,
    pub signup: String,
    pub login: String,
}

pub async fn root<S, H>(State(state): State<AuthState<S, H>>) -> impl IntoResponse
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    Json(ServiceDescriptor {
        service: SERVICE_TITLE.to_string(),
        version: state.service.version.clone(),
        status: "running".to_string(),
        endpoints: Endpoints {
            health: "/health".to_string(),
            check_email: "/check-email".to_string(),
            signup: "/signup".to_string(),
            login: "/login".to_string(),
        },
    })
}

pub async fn health<S, H>(State(state): State<AuthState<S, H>>) -> impl IntoResponse
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: state.service.name.clone(),
        timestamp: Utc::now().to_rfc3339(),
        version: state.service.version.clone(),
    })
}

use axum::{Json, extract::State, response::IntoResponse};
use latchkey_application::LoginUseCase;
use latchkey_core::{AccountStore, PasswordHasher};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AuthApiError;
use crate::http::AuthState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login<S, H>(
    State(state): State<AuthState<S, H>>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    let use_case = LoginUseCase::new(&state.account_store, state.password_hasher.as_ref());

    let account = use_case.execute(request.email, request.password).await?;

    Ok(Json(account))
}

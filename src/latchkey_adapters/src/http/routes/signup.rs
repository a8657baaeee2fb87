use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use latchkey_application::SignupUseCase;
use latchkey_core::{AccountStore, PasswordHasher};
use secrecy::Secret;
use serde::Deserialize;

use super::error::AuthApiError;
use crate::http::AuthState;

#[derive(Deserialize)]
pub struct SignupRequest {
    pub email: Secret<String>,
    pub password: Secret<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[tracing::instrument(name = "Signup", skip_all)]
pub async fn signup<S, H>(
    State(state): State<AuthState<S, H>>,
    Json(request): Json<SignupRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    let use_case = SignupUseCase::new(&state.account_store, state.password_hasher.as_ref());

    let account = use_case
        .execute(request.email, request.password, request.display_name)
        .await?;

    Ok((StatusCode::CREATED, Json(account)))
}

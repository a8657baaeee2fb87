use axum::{Json, extract::State, response::IntoResponse};
use latchkey_application::CheckEmailUseCase;
use latchkey_core::{AccountStore, PasswordHasher};
use secrecy::Secret;
use serde::{Deserialize, Serialize};

use super::error::AuthApiError;
use crate::http::AuthState;

#[derive(Deserialize)]
pub struct CheckEmailRequest {
    pub email: Secret<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CheckEmailResponse {
    pub exists: bool,
}

#[tracing::instrument(name = "Check email", skip_all)]
pub async fn check_email<S, H>(
    State(state): State<AuthState<S, H>>,
    Json(request): Json<CheckEmailRequest>,
) -> Result<impl IntoResponse, AuthApiError>
where
    S: AccountStore + Clone + 'static,
    H: PasswordHasher + 'static,
{
    let use_case = CheckEmailUseCase::new(&state.account_store);

    let exists = use_case.execute(request.email).await?;

    Ok(Json(CheckEmailResponse { exists }))
}

use color_eyre::eyre::Result;
use latchkey_adapters::{
    config::{AllowedOrigins, AuthServiceSetting},
    hashing::Argon2PasswordHasher,
    persistence::HashMapAccountStore,
};
use latchkey_auth_service::{AuthService, telemetry::init_tracing};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = AuthServiceSetting::load()?;

    // The account map lives for the whole process and starts empty
    let account_store = HashMapAccountStore::new();
    let password_hasher = Argon2PasswordHasher::new(&config.hashing)?;
    let allowed_origins = AllowedOrigins::from_setting(&config.cors)?;

    let auth_service = AuthService::new(
        account_store.clone(),
        password_hasher,
        config.service.clone(),
    );

    let listener = tokio::net::TcpListener::bind(config.server.address.as_str()).await?;
    tracing::info!("Starting {} v{}", config.service.name, config.service.version);

    auth_service
        .run_standalone(listener, allowed_origins)
        .await?;

    tracing::info!(
        accounts = account_store.len().await,
        "Auth service stopped, discarding in-memory accounts"
    );

    Ok(())
}

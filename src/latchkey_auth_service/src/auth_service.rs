use axum::{
    Router,
    http::{HeaderValue, Method, header, request},
    routing::{get, post},
};
use latchkey_adapters::{
    config::{AllowedOrigins, ServiceSetting},
    http::{
        AuthState,
        routes::{check_email, health, login, root, signup},
    },
};
use latchkey_core::{AccountStore, PasswordHasher};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::telemetry::{make_span_with_request_id, on_request, on_response};

/// Main authentication service that provides the credential routes
pub struct AuthService {
    router: Router,
}

impl AuthService {
    /// Create a new AuthService around an account store and password hasher
    ///
    /// # Arguments
    /// * `account_store` - Store for accounts (must be Clone; clones share state)
    /// * `password_hasher` - Hasher used for registration and login
    /// * `service` - Name and version reported by `/` and `/health`
    pub fn new<S, H>(account_store: S, password_hasher: H, service: ServiceSetting) -> Self
    where
        S: AccountStore + Clone + 'static,
        H: PasswordHasher + 'static,
    {
        let state = AuthState::new(account_store, password_hasher, service);

        let router = Router::new()
            .route("/", get(root::<S, H>))
            .route("/health", get(health::<S, H>))
            .route("/check-email", post(check_email::<S, H>))
            .route("/signup", post(signup::<S, H>))
            .route("/login", post(login::<S, H>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthService into a router that can be mounted on another router
    ///
    /// # Arguments
    /// * `allowed_origins` - CORS origins; `None` accepts any origin without credentials
    pub fn as_nested_router(mut self, allowed_origins: Option<AllowedOrigins>) -> Router {
        let cors = match allowed_origins {
            Some(allowed_origins) => CorsLayer::new()
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        allowed_origins.contains(origin)
                    },
                )),
            None => CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        };

        self.router = self.router.layer(cors);
        self.with_trace_layer().router
    }

    /// Run the auth service as a standalone server until Ctrl-C or SIGTERM
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: Option<AllowedOrigins>,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Auth service listening on {}", listener.local_addr()?);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

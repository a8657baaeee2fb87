use fake::Fake;
use fake::faker::internet::en::SafeEmail;
use latchkey_adapters::{
    config::{self, AllowedOrigins, CorsSetting, HashingSetting, ServiceSetting},
    hashing::Argon2PasswordHasher,
    persistence::HashMapAccountStore,
};
use latchkey_auth_service::AuthService;
use serde::Serialize;
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub http_client: reqwest::Client,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::spawn(None).await
    }

    /// Spawn a server that only accepts the given CORS origins.
    pub async fn with_allowed_origins(origins: &[&str]) -> Self {
        let setting = CorsSetting {
            allowed_origins: origins.iter().map(|origin| origin.to_string()).collect(),
        };
        let allowed_origins =
            AllowedOrigins::from_setting(&setting).expect("Invalid allowed origins");
        Self::spawn(allowed_origins).await
    }

    async fn spawn(allowed_origins: Option<AllowedOrigins>) -> Self {
        let password_hasher = Argon2PasswordHasher::new(&HashingSetting::for_tests())
            .expect("Failed to build password hasher");
        let auth_service = AuthService::new(
            HashMapAccountStore::new(),
            password_hasher,
            ServiceSetting::default(),
        );

        let listener = TcpListener::bind(config::test::APP_ADDRESS)
            .await
            .expect("Failed to bind test listener");
        let address = format!(
            "http://{}",
            listener.local_addr().expect("Failed to read local address")
        );

        tokio::spawn(auth_service.run_standalone(listener, allowed_origins));

        Self {
            address,
            http_client: reqwest::Client::new(),
        }
    }

    pub async fn get_root(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health_from_origin(&self, origin: &str) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .header("Origin", origin)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.http_client
            .get(format!("{}/health", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_check_email<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/check-email", body).await
    }

    pub async fn post_signup<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/signup", body).await
    }

    pub async fn post_login<Body>(&self, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.post("/login", body).await
    }

    async fn post<Body>(&self, path: &str, body: &Body) -> reqwest::Response
    where
        Body: Serialize,
    {
        self.http_client
            .post(format!("{}{}", &self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn get_random_email() -> String {
    SafeEmail().fake::<String>().to_lowercase()
}

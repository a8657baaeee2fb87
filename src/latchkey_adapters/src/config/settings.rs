use axum::http::HeaderValue;
use config::{
    Config, ConfigError, Environment, File, Map,
    builder::{ConfigBuilder, DefaultState},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{SERVICE_NAME, env, files, prod, test};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid allowed origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthServiceSetting {
    pub service: ServiceSetting,
    pub server: ServerSetting,
    pub hashing: HashingSetting,
    #[serde(default)]
    pub cors: CorsSetting,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceSetting {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSetting {
    pub address: String,
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HashingSetting {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

/// An empty list allows any origin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsSetting {
    pub allowed_origins: Vec<String>,
}

impl Default for AuthServiceSetting {
    fn default() -> Self {
        Self {
            service: ServiceSetting::default(),
            server: ServerSetting {
                address: prod::APP_ADDRESS.to_string(),
            },
            hashing: HashingSetting::default(),
            cors: CorsSetting::default(),
        }
    }
}

impl Default for ServiceSetting {
    fn default() -> Self {
        Self {
            name: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl Default for HashingSetting {
    fn default() -> Self {
        Self {
            memory_kib: prod::hashing::MEMORY_KIB,
            iterations: prod::hashing::ITERATIONS,
            parallelism: prod::hashing::PARALLELISM,
        }
    }
}

impl HashingSetting {
    /// Cheap parameters for tests.
    pub fn for_tests() -> Self {
        Self {
            memory_kib: test::hashing::MEMORY_KIB,
            iterations: test::hashing::ITERATIONS,
            parallelism: test::hashing::PARALLELISM,
        }
    }
}

impl AuthServiceSetting {
    /// Load settings from, in increasing priority: built-in defaults,
    /// `config/default.*`, `config/local.*`, and `LATCHKEY__*` environment
    /// variables (a `.env` file is read first if present).
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let builder = Self::base_builder()?
            .add_source(File::with_name(files::DEFAULT_CONFIG).required(false))
            .add_source(File::with_name(files::LOCAL_CONFIG).required(false))
            .add_source(Self::environment(None));

        Self::assemble(builder)
    }

    /// `LATCHKEY__SECTION__KEY` variables; `cors.allowed_origins` is comma separated.
    /// `source` replaces the process environment when given.
    fn environment(source: Option<Map<String, String>>) -> Environment {
        Environment::with_prefix(env::ENV_PREFIX)
            .prefix_separator(env::ENV_SEPARATOR)
            .separator(env::ENV_SEPARATOR)
            .list_separator(",")
            .with_list_parse_key("cors.allowed_origins")
            .try_parsing(true)
            .source(source)
    }

    fn base_builder() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        let defaults = Config::try_from(&Self::default())?;
        Ok(Config::builder().add_source(defaults))
    }

    fn assemble(builder: ConfigBuilder<DefaultState>) -> Result<Self, SettingsError> {
        Ok(builder.build()?.try_deserialize()?)
    }
}

/// Origins accepted by the CORS layer.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// `None` when the list is empty, meaning any origin is accepted.
    pub fn from_setting(setting: &CorsSetting) -> Result<Option<Self>, SettingsError> {
        if setting.allowed_origins.is_empty() {
            return Ok(None);
        }

        let origins = setting
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin.trim())
                    .map_err(|_| SettingsError::InvalidOrigin(origin.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(Self(origins)))
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }
}

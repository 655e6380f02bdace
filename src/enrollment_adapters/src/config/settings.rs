use axum::http::HeaderValue;
use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;

use super::constants::{CONFIG_FILE, DEFAULT_LOG_FILTER, env, prod};

const ALLOWED_ORIGINS_KEY: &str = "server.allowed_origins";

#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentSetting {
    pub server: ServerSetting,
    pub log: LogSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSetting {
    pub address: String,
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSetting {
    pub filter: String,
}

impl EnrollmentSetting {
    /// Load settings from defaults, the optional `config/base.json` file and
    /// `ENROLLMENT__*` environment variables, in increasing priority.
    /// A `.env` file is read first when present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load_from(File::with_name(CONFIG_FILE).required(false), environment())
    }

    pub fn load_from<S>(file: S, environment: Environment) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        Config::builder()
            .set_default("server.address", prod::APP_ADDRESS)?
            .set_default(ALLOWED_ORIGINS_KEY, Vec::<String>::new())?
            .set_default("log.filter", DEFAULT_LOG_FILTER)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()
    }
}

/// The environment source used by [`EnrollmentSetting::load`].
pub fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .prefix_separator(env::ENV_SEPARATOR)
        .separator(env::ENV_SEPARATOR)
        .list_separator(",")
        .with_list_parse_key(ALLOWED_ORIGINS_KEY)
        .try_parsing(true)
}

impl ServerSetting {
    /// `None` when no origins are configured, meaning no CORS layer is added.
    pub fn allowed_origins(&self) -> Option<AllowedOrigins> {
        let origins = AllowedOrigins::from_strings(&self.allowed_origins);
        (!origins.is_empty()).then_some(origins)
    }
}

/// Origins permitted to make cross-origin requests.
#[derive(Debug, Clone, Default)]
pub struct AllowedOrigins(Vec<HeaderValue>);

impl AllowedOrigins {
    /// Invalid header values are skipped with a warning.
    pub fn from_strings<S: AsRef<str>>(origins: &[S]) -> Self {
        let origins = origins
            .iter()
            .map(AsRef::as_ref)
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(origin, error = %e, "ignoring invalid allowed origin");
                    None
                }
            })
            .collect();

        Self(origins)
    }

    pub fn contains(&self, origin: &HeaderValue) -> bool {
        self.0.contains(origin)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

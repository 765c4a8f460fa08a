// Start of file: /src/config/environment.rs

// * Environment configuration, read once at start-up and handed to
// * AppState explicitly. Nothing in here is global.

use std::{borrow::Cow, collections::HashMap, fmt, str::FromStr};
// * anyhow for convenient error handling
use anyhow::{Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
// ! Must stay above the downstream timeout, otherwise the request layer
// ! fires before the books call can report its own failure.
const DEFAULT_TIMEOUT: u64 = 90;
const DEFAULT_CRUD_URL: &str = "http://crud-service/";
const DEFAULT_DOWNSTREAM_TIMEOUT: u64 = 60;

const DEFAULT_USERID_HEADER_KEY: &str = "miauserid";
const DEFAULT_GROUPS_HEADER_KEY: &str = "miausergroups";
const DEFAULT_CLIENTTYPE_HEADER_KEY: &str = "client-type";
const DEFAULT_BACKOFFICE_HEADER_KEY: &str = "isbackoffice";
const DEFAULT_USER_PROPERTIES_HEADER_KEY: &str = "miauserproperties";

/// How much of each outbound HTTP exchange the books client logs.
// ? Variants are ordered by verbosity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum HttpLogLevel {
    #[default]
    None,
    Basic,
    Headers,
    Body,
}

impl FromStr for HttpLogLevel {
    type Err = std::convert::Infallible;

    // ? Unknown values fall back to `None`, never an error
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_uppercase().as_str() {
            "BASIC" => HttpLogLevel::Basic,
            "HEADERS" => HttpLogLevel::Headers,
            "BODY" => HttpLogLevel::Body,
            _ => HttpLogLevel::None,
        })
    }
}

impl fmt::Display for HttpLogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            HttpLogLevel::None => "NONE",
            HttpLogLevel::Basic => "BASIC",
            HttpLogLevel::Headers => "HEADERS",
            HttpLogLevel::Body => "BODY",
        };
        f.write_str(name)
    }
}

/// Header names the request logger reads the caller identity from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlatformHeaderKeys {
    pub user_id: Cow<'static, str>,
    pub user_groups: Cow<'static, str>,
    pub client_type: Cow<'static, str>,
    pub is_backoffice: Cow<'static, str>,
    pub user_properties: Cow<'static, str>,
}

impl Default for PlatformHeaderKeys {
    fn default() -> Self {
        Self {
            user_id: Cow::Borrowed(DEFAULT_USERID_HEADER_KEY),
            user_groups: Cow::Borrowed(DEFAULT_GROUPS_HEADER_KEY),
            client_type: Cow::Borrowed(DEFAULT_CLIENTTYPE_HEADER_KEY),
            is_backoffice: Cow::Borrowed(DEFAULT_BACKOFFICE_HEADER_KEY),
            user_properties: Cow::Borrowed(DEFAULT_USER_PROPERTIES_HEADER_KEY),
        }
    }
}

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub additional_headers_to_proxy: Cow<'static, str>,
    pub crud_url: Cow<'static, str>,
    pub http_log_level: HttpLogLevel,
    pub downstream_timeout_seconds: u64,
    pub platform_headers: PlatformHeaderKeys,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            additional_headers_to_proxy: Cow::Borrowed(""),
            crud_url: Cow::Borrowed(DEFAULT_CRUD_URL),
            http_log_level: HttpLogLevel::None,
            downstream_timeout_seconds: DEFAULT_DOWNSTREAM_TIMEOUT,
            platform_headers: PlatformHeaderKeys::default(),
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables once at start-up.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        Self::load_dotenv();

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        let config: EnvironmentVariables = Self::from_vars(&vars)?;

        if cfg!(debug_assertions) {
            tracing::debug!("Loaded environment configuration: {:#?}", config);
        }

        Ok(config)
    }

    /// Reads `.env` into the process environment unless running in production.
    /// Variables already set are left alone, so calling it twice is harmless.
    pub fn load_dotenv() {
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }
    }

    // * Builds the configuration from an already collected key/value map
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        // * A small helper closure to fetch a variable by key
        let get_var = |key: &str| vars.get(key).map(String::as_str);
        let owned = |s: &str| -> Cow<'static, str> { Cow::Owned(s.to_owned()) };

        // * Build our EnvironmentVariables, providing defaults if missing
        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(owned)
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(owned)
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.trim().parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.trim().parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.trim().parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            additional_headers_to_proxy: get_var("ADDITIONAL_HEADERS_TO_PROXY")
                .map(owned)
                .unwrap_or(Cow::Borrowed("")),

            crud_url: get_var("CRUD_URL")
                .map(owned)
                .unwrap_or_else(|| {
                    warn!("Missing CRUD_URL, defaulting to '{DEFAULT_CRUD_URL}'");
                    Cow::Borrowed(DEFAULT_CRUD_URL)
                }),

            http_log_level: get_var("HTTP_LOG_LEVEL")
                .map(|s| s.parse::<HttpLogLevel>().unwrap_or_default())
                .unwrap_or_default(),

            downstream_timeout_seconds: get_var("DOWNSTREAM_TIMEOUT_SECONDS")
                .map(|s| s.trim().parse().context("Invalid DOWNSTREAM_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_DOWNSTREAM_TIMEOUT),

            platform_headers: PlatformHeaderKeys {
                user_id: get_var("USERID_HEADER_KEY")
                    .map(owned)
                    .unwrap_or(Cow::Borrowed(DEFAULT_USERID_HEADER_KEY)),
                user_groups: get_var("GROUPS_HEADER_KEY")
                    .map(owned)
                    .unwrap_or(Cow::Borrowed(DEFAULT_GROUPS_HEADER_KEY)),
                client_type: get_var("CLIENTTYPE_HEADER_KEY")
                    .map(owned)
                    .unwrap_or(Cow::Borrowed(DEFAULT_CLIENTTYPE_HEADER_KEY)),
                is_backoffice: get_var("BACKOFFICE_HEADER_KEY")
                    .map(owned)
                    .unwrap_or(Cow::Borrowed(DEFAULT_BACKOFFICE_HEADER_KEY)),
                user_properties: get_var("USER_PROPERTIES_HEADER_KEY")
                    .map(owned)
                    .unwrap_or(Cow::Borrowed(DEFAULT_USER_PROPERTIES_HEADER_KEY)),
            },
        })
    }
}


// End of file: /src/config/environment.rs

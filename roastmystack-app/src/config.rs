use url::Url;

/// Knobs that varied across revisions of the product. Exposed as
/// configuration so there is a single pipeline instead of near-duplicate
/// code paths.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Stricter variant also requires the `database` field on submission.
    pub require_database: bool,
    /// Character limit for the preview-image excerpt.
    pub excerpt_limit: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            require_database: false,
            excerpt_limit: 100,
        }
    }
}

/// Process configuration, read from the environment exactly once at
/// startup and passed by reference from there on. Business logic never
/// touches `std::env`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub openai_api_key: String,
    /// Absolute base for share links and preview-image URLs.
    pub public_base_url: Url,
    pub bind_addr: String,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingVar(&'static str),

    #[error("PUBLIC_BASE_URL is not a valid URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let openai_api_key = require_var("OPENAI_API_KEY")?;
        let public_base_url = Url::parse(&require_var("PUBLIC_BASE_URL")?)?;
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3000".to_string());

        let mut pipeline = PipelineConfig::default();
        if let Ok(value) = std::env::var("REQUIRE_DATABASE_FIELD") {
            pipeline.require_database = matches!(value.as_str(), "1" | "true" | "yes");
        }
        if let Ok(value) = std::env::var("EXCERPT_LIMIT") {
            pipeline.excerpt_limit = value
                .parse()
                .map_err(|_| ConfigError::InvalidNumber("EXCERPT_LIMIT"))?;
        }

        Ok(Self {
            database_url,
            openai_api_key,
            public_base_url,
            bind_addr,
            pipeline,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(name))
}

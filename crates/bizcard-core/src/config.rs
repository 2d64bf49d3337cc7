use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

/// Default delay before a handed-off temporary object is released.
pub const DEFAULT_RELEASE_DELAY_MS: u64 = 2_000;

/// Default upper bound on an uploaded profile image.
pub const DEFAULT_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub card: CardConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub delivery: DeliveryConfig,
    pub image: ImageConfig,
}

/// The contact details shown on the card and written into the vCard.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardConfig {
    #[serde(default)]
    pub full_name: String,
    pub title: Option<String>,
    pub organization: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "address_lines")]
    pub address_lines: Vec<String>,
    /// Image source shown until a profile image is uploaded.
    pub placeholder_image: Option<String>,
}

/// Accepts a list, or one `;`-separated string as set through the environment.
fn address_lines<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lines {
        Joined(String),
        List(Vec<String>),
    }

    Ok(match Lines::deserialize(deserializer)? {
        Lines::Joined(joined) => joined
            .split(';')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect(),
        Lines::List(lines) => lines,
    })
}

impl CardConfig {
    /// ## Summary
    /// Checks the one required field.
    ///
    /// ## Errors
    /// Returns a validation error if `full_name` is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.full_name.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "card.full_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// ## Summary
    /// Returns the bind address in the format "host:port".
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// How a saved contact reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryPolicy {
    /// Serve the file as an attachment with a suggested filename.
    Download,
    /// Redirect to the temporary object and let the client import it.
    Handoff,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeliveryConfig {
    pub policy: DeliveryPolicy,
    pub release_delay_ms: u64,
}

impl DeliveryConfig {
    #[must_use]
    pub const fn release_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.release_delay_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageConfig {
    pub max_bytes: usize,
}

impl Settings {
    /// ## Summary
    /// Returns a configuration builder with every default applied.
    ///
    /// ## Errors
    /// Returns an error if a default value cannot be set.
    pub fn default_builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("card.address_lines", Vec::<String>::new())?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8699)?
            .set_default("logging.level", "info")?
            .set_default("delivery.policy", "download")?
            .set_default("delivery.release_delay_ms", DEFAULT_RELEASE_DELAY_MS)?
            .set_default("image.max_bytes", DEFAULT_MAX_IMAGE_BYTES as u64)?)
    }

    /// ## Summary
    /// Builds settings from the defaults alone.
    ///
    /// ## Errors
    /// Returns an error if the defaults fail to deserialize.
    pub fn with_defaults() -> Result<Self> {
        Ok(Self::default_builder()?
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and `config.toml` into a `Settings`.
    /// Environment variables take precedence over the TOML file.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Self::load_with(Self::environment())
    }

    /// The `BIZCARD__` environment source, e.g. `BIZCARD__CARD__FULL_NAME`.
    ///
    /// Values stay strings so phone numbers keep their `+` and leading zeros.
    #[must_use]
    pub fn environment() -> config::Environment {
        config::Environment::with_prefix("BIZCARD")
            .prefix_separator("__")
            .separator("__")
            .ignore_empty(true)
    }

    /// ## Summary
    /// Layers `config.toml` and then `environment` over the defaults.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load_with(environment: config::Environment) -> Result<Self> {
        let settings = Self::default_builder()?
            .add_source(config::File::with_name("config.toml").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        if let Err(e) = settings.card.validate() {
            tracing::warn!(error = %e, "Card configuration is incomplete");
        }

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load()
}

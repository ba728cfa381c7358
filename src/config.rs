use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    pub google: GoogleSettings,
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8000 }

/// Google Maps Platform web services
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_google_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_google_base_url() -> String { "https://maps.googleapis.com/maps/api".to_string() }

/// OpenAI-compatible chat completions
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_openai_base_url() -> String { "https://api.openai.com/v1".to_string() }
fn default_model() -> String { "gpt-3.5-turbo".to_string() }
fn default_max_tokens() -> u32 { 500 }
fn default_timeout_secs() -> u64 { 30 }

/// Fixed parameters of the nearby search
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_radius_m")]
    pub radius_m: u32,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            radius_m: default_radius_m(),
            language: default_language(),
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
        }
    }
}

fn default_radius_m() -> u32 { 1500 }
fn default_language() -> String { "ja".to_string() }
// Tokyo city centre
fn default_latitude() -> f64 { 35.6895 }
fn default_longitude() -> f64 { 139.6917 }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CONCIERGE_)
    /// 4. GOOGLE_MAPS_API_KEY / OPENAI_API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Development overrides
            .add_source(File::with_name("config/local").required(false))
            // e.g., CONCIERGE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CONCIERGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_api_keys(settings)?;

        let settings: Settings = settings.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CONCIERGE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = substitute_api_keys(settings)?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Both third-party credentials are required; the service refuses to start without them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.google.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "Google Maps API key is required (GOOGLE_MAPS_API_KEY)".to_string(),
            ));
        }
        if self.openai.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "OpenAI API key is required (OPENAI_API_KEY)".to_string(),
            ));
        }
        Ok(())
    }
}

/// Apply the conventional credential variables on top of the layered config
fn substitute_api_keys(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let google_key = env::var("GOOGLE_MAPS_API_KEY").ok();
    let openai_key = env::var("OPENAI_API_KEY").ok();

    // Make sure both sections exist even when only the env keys are set
    let mut builder = Config::builder()
        .set_default("google.api_key", "")?
        .set_default("openai.api_key", "")?
        .add_source(settings);

    if let Some(key) = google_key {
        builder = builder.set_override("google.api_key", key)?;
    }
    if let Some(key) = openai_key {
        builder = builder.set_override("openai.api_key", key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with_keys(google: &str, openai: &str) -> Settings {
        Settings {
            server: ServerSettings::default(),
            google: GoogleSettings {
                api_key: google.to_string(),
                base_url: default_google_base_url(),
                request_timeout_secs: default_timeout_secs(),
            },
            openai: OpenAiSettings {
                api_key: openai.to_string(),
                base_url: default_openai_base_url(),
                model: default_model(),
                max_tokens: default_max_tokens(),
                request_timeout_secs: default_timeout_secs(),
            },
            search: SearchSettings::default(),
        }
    }

    #[test]
    fn test_default_search_settings() {
        let search = SearchSettings::default();
        assert_eq!(search.radius_m, 1500);
        assert_eq!(search.language, "ja");
        assert_eq!(search.default_latitude, 35.6895);
        assert_eq!(search.default_longitude, 139.6917);
    }

    #[test]
    fn test_default_completion_settings() {
        assert_eq!(default_model(), "gpt-3.5-turbo");
        assert_eq!(default_max_tokens(), 500);
    }

    #[test]
    fn test_missing_google_key_rejected() {
        let err = settings_with_keys("", "sk-test").validate().unwrap_err();
        assert!(err.to_string().contains("Google Maps"));
    }

    #[test]
    fn test_blank_openai_key_rejected() {
        let err = settings_with_keys("maps-key", "   ").validate().unwrap_err();
        assert!(err.to_string().contains("OpenAI"));
    }

    #[test]
    fn test_both_keys_accepted() {
        assert!(settings_with_keys("maps-key", "sk-test").validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("concierge-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(
            &path,
            "[server]\nport = 9001\n\n[google]\napi_key = \"file-maps-key\"\n\n[openai]\napi_key = \"file-openai-key\"\nmodel = \"gpt-4o-mini\"\n",
        )
        .unwrap();

        let settings = Settings::load_from(&path);
        std::fs::remove_file(&path).ok();

        // Environment keys may override the file when set on the test machine
        let settings = settings.unwrap();
        assert_eq!(settings.server.port, 9001);
        assert_eq!(settings.openai.model, "gpt-4o-mini");
        assert_eq!(settings.search.radius_m, 1500);
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub app: AppSettings,
    pub groq: GroqSettings,
    #[serde(default)]
    pub security: SecuritySettings,
    #[serde(default)]
    pub rate_limit: RateLimitSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            environment: default_environment(),
        }
    }
}

fn default_environment() -> String {
    "development".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqSettings {
    pub api_key: String,
    #[serde(default = "default_groq_base_url")]
    pub base_url: String,
    #[serde(default = "default_groq_model")]
    pub model: String,
    #[serde(default = "default_groq_temperature")]
    pub temperature: f64,
    #[serde(default = "default_groq_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_groq_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_groq_base_url() -> String {
    "https://api.groq.com/v1".to_string()
}

fn default_groq_model() -> String {
    "mixtral-8x7b-32768".to_string()
}

fn default_groq_temperature() -> f64 {
    0.7
}

fn default_groq_max_tokens() -> u32 {
    4096
}

fn default_groq_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecuritySettings {
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    #[serde(default = "default_jwt_expire_minutes")]
    pub jwt_expire_minutes: i64,
}

impl Default for SecuritySettings {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_expire_minutes: default_jwt_expire_minutes(),
        }
    }
}

fn default_jwt_secret() -> String {
    "development_secret".to_string()
}

fn default_jwt_expire_minutes() -> i64 {
    30
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitSettings {
    #[serde(default = "default_rate_limit_requests")]
    pub max_requests: u32,
    #[serde(default = "default_rate_limit_window_secs")]
    pub window_secs: u64,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            max_requests: default_rate_limit_requests(),
            window_secs: default_rate_limit_window_secs(),
        }
    }
}

fn default_rate_limit_requests() -> u32 {
    100
}

fn default_rate_limit_window_secs() -> u64 {
    3600
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_min_score")]
    pub default_min_score: f64,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            default_min_score: default_min_score(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

fn default_min_score() -> f64 {
    50.0
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_hobbies_weight")]
    pub hobbies: f64,
    #[serde(default = "default_relationship_goals_weight")]
    pub relationship_goals: f64,
    #[serde(default = "default_values_weight")]
    pub values: f64,
    #[serde(default = "default_languages_weight")]
    pub languages: f64,
    #[serde(default = "default_affinity_weight")]
    pub affinity: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            hobbies: default_hobbies_weight(),
            relationship_goals: default_relationship_goals_weight(),
            values: default_values_weight(),
            languages: default_languages_weight(),
            affinity: default_affinity_weight(),
        }
    }
}

fn default_hobbies_weight() -> f64 { 3.0 }
fn default_relationship_goals_weight() -> f64 { 5.0 }
fn default_values_weight() -> f64 { 4.0 }
fn default_languages_weight() -> f64 { 2.0 }
fn default_affinity_weight() -> f64 { 3.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with DATEMATE_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with DATEMATE_)
            // e.g., DATEMATE__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("DATEMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("DATEMATE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply bare env-var overrides for the secrets people set directly:
/// GROQ_API_KEY and JWT_SECRET_KEY win over both files and prefixed vars.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let groq_api_key = env::var("GROQ_API_KEY")
        .or_else(|_| env::var("DATEMATE__GROQ__API_KEY"))
        .ok();
    let jwt_secret = env::var("JWT_SECRET_KEY")
        .or_else(|_| env::var("DATEMATE__SECURITY__JWT_SECRET"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = groq_api_key {
        builder = builder.set_override("groq.api_key", api_key)?;
    }
    if let Some(secret) = jwt_secret {
        builder = builder.set_override("security.jwt_secret", secret)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.hobbies, 3.0);
        assert_eq!(weights.relationship_goals, 5.0);
        assert_eq!(weights.values, 4.0);
        assert_eq!(weights.languages, 2.0);
        assert_eq!(weights.affinity, 3.0);
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.default_min_score, 50.0);
        assert_eq!(matching.default_limit, 10);
        assert_eq!(matching.max_limit, 100);
    }

    #[test]
    fn test_default_rate_limit() {
        let rate_limit = RateLimitSettings::default();
        assert_eq!(rate_limit.max_requests, 100);
        assert_eq!(rate_limit.window_secs, 3600);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }
}

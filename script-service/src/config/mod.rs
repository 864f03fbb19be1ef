use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ScriptConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
    pub groq: GroqConfig,
    pub static_dir: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model used for idea batches (e.g., gemini-2.5-flash)
    pub idea_model: String,
    /// Model used for full scripts (e.g., openai/gpt-oss-20b)
    pub script_model: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GroqConfig {
    pub api_key: String,
}

impl ScriptConfig {
    /// Load configuration from the environment.
    ///
    /// Both provider keys are required; a missing key is a fatal
    /// configuration error at startup, never a per-request check.
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;

        Ok(ScriptConfig {
            common: common_config,
            models: ModelConfig {
                idea_model: get_env("IDEA_MODEL", Some("gemini-2.5-flash"))?,
                script_model: get_env("SCRIPT_MODEL", Some("openai/gpt-oss-20b"))?,
            },
            google: GoogleConfig {
                api_key: get_env("GOOGLE_API_KEY", None)?,
            },
            groq: GroqConfig {
                api_key: get_env("GROQ_API_KEY", None)?,
            },
            static_dir: get_env("STATIC_DIR", Some("script-service/static"))?,
        })
    }
}

fn get_env(key: &str, default: Option<&str>) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

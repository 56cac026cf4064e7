use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub api_key_source: ApiKeySource,
    pub model_preferences: ModelPreferences,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ApiKeySource {
    #[default]
    Environment,
    ConfigFile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelPreferences {
    pub default_model: String,
    pub temperature: f32,
    pub max_tokens: u16,
}

impl Default for ModelPreferences {
    fn default() -> Self {
        Self {
            default_model: "gpt-4".to_string(),
            temperature: 0.3,
            max_tokens: 2048,
        }
    }
}

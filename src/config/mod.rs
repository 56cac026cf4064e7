mod types;
mod loader;
mod validators;

pub use types::*;
pub use loader::{load_config, save_config, get_config_path};
pub use validators::validate_config;

use anyhow::Result;
use colored::*;

impl Config {
    pub fn load() -> Result<Self> {
        let config = load_config()?;
        validate_config(&config)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        save_config(self)
    }

    pub fn get_api_key(&self) -> Option<&str> {
        self.openai_api_key.as_deref()
    }

    pub fn set_api_key(key: &str) -> Result<()> {
        let mut config = load_config()?;
        config.openai_api_key = Some(key.to_string());
        config.api_key_source = ApiKeySource::ConfigFile;
        config.save()?;
        Ok(())
    }

    pub fn reset() -> Result<()> {
        let config_path = get_config_path()?;
        if config_path.exists() {
            std::fs::remove_file(&config_path)?;
        }
        Ok(())
    }

    pub fn display(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "현재 설정:".bright_cyan().bold()));
        output.push_str(&format!("{}\n", "=".repeat(50).dimmed()));

        let masked_key = self
            .openai_api_key
            .as_deref()
            .map(mask_key)
            .unwrap_or_else(|| "미설정".red().to_string());

        output.push_str(&format!("API 키: {masked_key}\n"));
        output.push_str(&format!("\n모델 설정:\n"));
        output.push_str(&format!("  기본 모델: {}\n", self.model_preferences.default_model.yellow()));
        output.push_str(&format!("  Temperature: {}\n", self.model_preferences.temperature.to_string().yellow()));
        output.push_str(&format!("  Max Tokens: {}\n", self.model_preferences.max_tokens.to_string().yellow()));

        output
    }
}

/// 키 앞 6자와 뒤 4자만 남기고 가린다. 멀티바이트 키도 문자 단위로 자른다.
fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(6).collect();
    let suffix_start = key.chars().count().saturating_sub(4);
    let suffix: String = key.chars().skip(suffix_start).collect();
    format!("{prefix}...{suffix}")
}

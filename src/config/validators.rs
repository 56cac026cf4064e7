use anyhow::{Result, anyhow};
use crate::config::types::Config;

pub fn validate_config(config: &Config) -> Result<()> {
    if config.openai_api_key.is_none() {
        return Err(anyhow!(
            "API 키가 필요합니다.\n\
            환경 변수 OPENAI_API_KEY를 설정하거나 'prism config set-key <KEY>'를 실행하세요."
        ));
    }

    if config.model_preferences.temperature < 0.0 || config.model_preferences.temperature > 2.0 {
        return Err(anyhow!("temperature는 0.0에서 2.0 사이여야 합니다"));
    }

    if config.model_preferences.max_tokens == 0 {
        return Err(anyhow!("max_tokens는 0보다 커야 합니다"));
    }

    Ok(())
}

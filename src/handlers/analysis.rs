use anyhow::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use crate::{
    api::OpenAIClient,
    config::Config,
    engine::QualityEngine,
    store,
};

pub async fn handle_analyze(path: &str, language: Option<&str>, format: &str, config: &Config) -> Result<()> {
    let document = store::load_source(path)?;
    let language = language
        .map(String::from)
        .unwrap_or_else(|| detect_language(path));

    println!("{} {} ({})", "분석 중:".yellow(), path, language.dimmed());

    let engine = build_engine(config)?;
    let bar = spinner("백엔드 응답 대기 중...");
    let result = engine.analyze_code(&document.content, &language).await;
    bar.finish_and_clear();
    let result = result?;

    match format {
        "terminal" => {
            result.print_summary();
        }
        "markdown" => {
            println!("\n{}", result.format_markdown());
        }
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "yaml" => {
            println!("{}", serde_yaml::to_string(&result)?);
        }
        _ => {
            anyhow::bail!("지원하지 않는 형식: {format}");
        }
    }

    Ok(())
}

pub async fn handle_improve(path: &str, language: Option<&str>, config: &Config) -> Result<()> {
    let document = store::load_source(path)?;
    let language = language
        .map(String::from)
        .unwrap_or_else(|| detect_language(path));

    println!("{} {}", "개선안 생성 중:".yellow(), path);

    let engine = build_engine(config)?;

    let bar = spinner("백엔드 응답 대기 중...");
    let analysis = engine.analyze_code(&document.content, &language).await;
    bar.finish_and_clear();
    let analysis = analysis?;

    if analysis.issues.is_empty() {
        println!("{}", "발견된 이슈가 없습니다.".green());
        return Ok(());
    }

    let bar = spinner("유형별 개선안 요청 중...");
    let suggestions = engine.suggest_improvements(&analysis.issues).await;
    bar.finish_and_clear();
    let suggestions = suggestions?;

    println!("\n{}", "개선 제안 (영향 내림차순)".bright_cyan().bold());
    println!("{}", "=".repeat(50).dimmed());

    for (idx, suggestion) in suggestions.iter().enumerate() {
        println!(
            "\n{}. {} {}",
            idx + 1,
            suggestion.title.bold(),
            format!("(영향: {:?}, 노력: {:?})", suggestion.impact, suggestion.effort).dimmed()
        );
        println!("   {}", suggestion.description);

        if let Some(example) = &suggestion.code_example {
            println!("{}", "   ---".dimmed());
            for line in example.lines() {
                println!("   {line}");
            }
        }
    }

    println!();
    Ok(())
}

pub fn build_engine(config: &Config) -> Result<QualityEngine> {
    let client = OpenAIClient::new(config)?;
    Ok(QualityEngine::new(
        Arc::new(client),
        config.model_preferences.default_model.clone(),
    ))
}

pub fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(100));
    bar
}

fn detect_language(path: &str) -> String {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    match extension {
        "swift" => "swift",
        "rs" => "rust",
        "py" => "python",
        "js" => "javascript",
        "ts" => "typescript",
        "go" => "go",
        "java" => "java",
        "kt" => "kotlin",
        _ => "plain",
    }
    .to_string()
}

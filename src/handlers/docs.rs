use anyhow::Result;
use colored::*;
use std::path::Path;
use crate::config::Config;
use crate::handlers::analysis::{build_engine, spinner};
use crate::store;

/// 대상이 파일이면 내용을 읽고, 아니면 인라인 코드로 취급한다
pub async fn handle_doc(target: &str, config: &Config) -> Result<()> {
    let code = if Path::new(target).is_file() {
        store::load_source(target)?.content
    } else {
        target.to_string()
    };

    println!("{}", "문서 생성 중...".yellow());

    let engine = build_engine(config)?;
    let bar = spinner("백엔드 응답 대기 중...");
    let documentation = engine.generate_documentation(&code).await;
    bar.finish_and_clear();

    println!("\n{}", documentation?);
    Ok(())
}

mod types;
mod prompts;
mod decode;
mod classify;
mod suggest;
mod score;
mod docs;
mod report;

pub use types::*;
pub use decode::decode;
pub use classify::classify;
pub use suggest::{aggregate, rank};
pub use score::score;
pub use docs::format_documentation;

use std::sync::Arc;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use crate::analyzer::compute_metrics;
use crate::api::InferenceBackend;
use crate::error::EngineError;

/// 분석 파이프라인 오케스트레이터.
///
/// 백엔드는 주입된 능력이다 - 테스트에서는 정해진 응답이나 오류를 돌려주는
/// 더블을 꽂는다. 백엔드 클라이언트가 유일한 공유 자원이며 동시 호출에 안전해야 한다.
pub struct QualityEngine {
    backend: Arc<dyn InferenceBackend>,
    model: String,
}

impl QualityEngine {
    pub fn new(backend: Arc<dyn InferenceBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// 코드 하나를 네 가지 분석 스펙트럼으로 분해한다.
    ///
    /// 스타일 / 코드 스멜 / 성능 / 리팩토링 요청 네 건을 동시에 보내고 전부
    /// 합류한다. 하나라도 실패하면 전체가 실패한다 - 하류 점수 계산이 네 입력을
    /// 모두 전제하므로 부분 분석은 만들지 않는다.
    pub async fn analyze_code(&self, code: &str, language: &str) -> Result<AnalysisResult, EngineError> {
        info!(language, bytes = code.len(), "분석 요청 4건 팬아웃");

        let (style, smells, performance, refactorings) = tokio::try_join!(
            self.request::<StyleReview>("style", prompts::style_review(code, language)),
            self.request::<Vec<CodeSmell>>("smells", prompts::code_smells(code, language)),
            self.request::<PerformanceAnalysis>("performance", prompts::performance(code, language)),
            self.request::<Vec<RefactoringSuggestion>>("refactoring", prompts::refactorings(code, language)),
        )?;

        let metrics = compute_metrics(code);
        let issues = classify(&smells);
        let suggestions = aggregate(&style, &refactorings, &performance);
        let (complexity_score, maintainability_index) = score::score(&metrics, &issues);

        Ok(AnalysisResult {
            complexity_score,
            maintainability_index,
            issues,
            metrics,
            suggestions,
        })
    }

    /// 이슈를 유형별로 묶어 유형마다 개선안 요청 한 건씩 동시 발행하고,
    /// 전체 결과를 합쳐 순위를 매긴다.
    pub async fn suggest_improvements(&self, issues: &[Issue]) -> Result<Vec<Suggestion>, EngineError> {
        // 등장 순서를 보존하며 중복 없는 유형 목록을 만든다
        let mut present: Vec<IssueType> = Vec::new();
        for issue in issues {
            if !present.contains(&issue.issue_type) {
                present.push(issue.issue_type);
            }
        }

        info!(types = present.len(), "유형별 개선안 요청 팬아웃");

        let requests = present.into_iter().map(|issue_type| {
            let grouped: Vec<&Issue> = issues
                .iter()
                .filter(|issue| issue.issue_type == issue_type)
                .collect();
            let prompt = prompts::improvements(issue_type, &grouped);
            self.request::<Vec<Suggestion>>("improvements", prompt)
        });

        let batches = futures::future::try_join_all(requests).await?;

        let mut merged: Vec<Suggestion> = batches.into_iter().flatten().collect();
        rank(&mut merged);
        Ok(merged)
    }

    /// 문서 생성 요청 한 건을 보내고 결과를 주석 블록으로 렌더링한다.
    pub async fn generate_documentation(&self, code: &str) -> Result<String, EngineError> {
        let raw: DocumentationResult = self
            .request("documentation", prompts::documentation(code))
            .await?;
        Ok(format_documentation(&raw))
    }

    async fn request<T: DeserializeOwned>(&self, aspect: &str, prompt: String) -> Result<T, EngineError> {
        debug!(aspect, "백엔드 하위 호출");
        let raw = self.backend.generate(&prompt, &self.model).await?;
        debug!(aspect, bytes = raw.len(), "응답 수신, 디코딩 시작");
        let decoded = decode(&raw)?;
        Ok(decoded)
    }
}

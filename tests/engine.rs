//! 모의 백엔드로 구동하는 오케스트레이터 종단 테스트

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use prism_cli::{
    compute_metrics,
    engine::{score, Impact, IssueType, Severity},
    BackendError, EngineError, InferenceBackend, QualityEngine,
};

const STYLE_JSON: &str = r#"{
    "rating": 8,
    "violations": ["암시적 언래핑"],
    "recommendations": ["가드 구문을 사용하세요"],
    "examples": {"example_1": "guard let value = maybe else { return }"}
}"#;

const EMPTY_PERFORMANCE_JSON: &str =
    r#"{"issues": [], "optimizations": [], "expected_improvements": []}"#;

const SMELLS_JSON: &str = r#"[
    {"type": "performance bottleneck", "severity": "high",
     "description": "루프 안에서 매번 할당", "refactoring": "할당을 밖으로 빼세요"},
    {"type": "long method", "severity": "medium",
     "description": "함수가 너무 깁니다", "refactoring": "extract method"}
]"#;

const DOCUMENTATION_JSON: &str = r#"{
    "overview": "작업 큐 구현",
    "documented_code": "fn push() {}",
    "examples": [],
    "notes": ["용량 제한 없음"]
}"#;

const STYLE_IMPROVEMENTS_JSON: &str = r#"[
    {"title": "이름 정리", "description": "의도가 드러나게", "impact": "low", "effort": "trivial"}
]"#;

const PERFORMANCE_IMPROVEMENTS_JSON: &str = r#"[
    {"title": "캐시 도입", "description": "재계산 제거", "code_example": "let cached = memo();",
     "impact": "high", "effort": "medium"}
]"#;

/// 프롬프트 내용으로 요청 종류를 판별해 정해진 응답을 돌려주는 백엔드 더블
struct ScriptedBackend {
    fail_on: Option<&'static str>,
    smells: &'static str,
    calls: Mutex<Vec<&'static str>>,
}

impl ScriptedBackend {
    fn new(fail_on: Option<&'static str>, smells: &'static str) -> Arc<Self> {
        Arc::new(Self {
            fail_on,
            smells,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn aspect_of(prompt: &str) -> &'static str {
        if prompt.contains("스타일을 검토") {
            "style"
        } else if prompt.contains("코드 스멜") {
            "smells"
        } else if prompt.contains("성능을 분석") {
            "performance"
        } else if prompt.contains("적용할 리팩토링") {
            "refactoring"
        } else if prompt.contains("문서를 생성") {
            "documentation"
        } else if prompt.contains("개선안을 제안") {
            "improvements"
        } else {
            "unknown"
        }
    }
}

#[async_trait]
impl InferenceBackend for ScriptedBackend {
    async fn generate(&self, prompt: &str, _model: &str) -> Result<String, BackendError> {
        let aspect = Self::aspect_of(prompt);
        self.calls.lock().unwrap().push(aspect);

        if self.fail_on == Some(aspect) {
            return Err(BackendError::Request("백엔드 불능".to_string()));
        }

        let response = match aspect {
            "style" => STYLE_JSON.to_string(),
            "smells" => self.smells.to_string(),
            "performance" => EMPTY_PERFORMANCE_JSON.to_string(),
            "refactoring" => "[]".to_string(),
            "documentation" => DOCUMENTATION_JSON.to_string(),
            "improvements" if prompt.contains("Performance") => {
                PERFORMANCE_IMPROVEMENTS_JSON.to_string()
            }
            "improvements" => STYLE_IMPROVEMENTS_JSON.to_string(),
            _ => return Err(BackendError::EmptyResponse),
        };

        Ok(response)
    }
}

fn engine_with(backend: Arc<ScriptedBackend>) -> QualityEngine {
    QualityEngine::new(backend, "gpt-4")
}

const SOURCE: &str = "if ready {\n    run()\n}\nfor item in items {\n    handle(item)\n}";

#[tokio::test]
async fn analyze_with_zero_smells_yields_complexity_only_score() {
    let backend = ScriptedBackend::new(None, "[]");
    let engine = engine_with(backend.clone());

    let result = engine.analyze_code(SOURCE, "swift").await.unwrap();

    // if 하나 + for 하나 → 기본 1 + 2
    assert_eq!(result.metrics.cyclomatic_complexity, 3);
    assert!(result.issues.is_empty());

    // 이슈가 없으니 점수는 복잡도 항만 반영해야 한다
    let (expected_complexity, expected_maintainability) = score(&compute_metrics(SOURCE), &[]);
    assert_eq!(result.complexity_score, expected_complexity);
    assert_eq!(result.maintainability_index, expected_maintainability);

    // 네 가지 요청이 모두 나갔는지 확인
    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls.len(), 4);
    for aspect in ["style", "smells", "performance", "refactoring"] {
        assert!(calls.contains(&aspect), "{aspect} 요청 누락");
    }
}

#[tokio::test]
async fn analyze_classifies_smells_and_ranks_suggestions() {
    let backend = ScriptedBackend::new(None, SMELLS_JSON);
    let engine = engine_with(backend);

    let result = engine.analyze_code(SOURCE, "swift").await.unwrap();

    assert_eq!(result.issues.len(), 2);
    assert_eq!(result.issues[0].issue_type, IssueType::Performance);
    assert_eq!(result.issues[0].severity, Severity::Critical);
    assert_eq!(result.issues[1].severity, Severity::Warning);
    assert_eq!(result.issues[1].rule_id.as_deref(), Some("long_method"));

    // 스타일 권고 하나가 제안으로 들어오고 예제가 연결된다
    assert_eq!(result.suggestions.len(), 1);
    assert_eq!(result.suggestions[0].title, "Style Improvement 1");
    assert_eq!(
        result.suggestions[0].code_example.as_deref(),
        Some("guard let value = maybe else { return }")
    );
}

#[tokio::test]
async fn analyze_fails_fast_when_one_sub_call_fails() {
    let backend = ScriptedBackend::new(Some("smells"), SMELLS_JSON);
    let engine = engine_with(backend);

    let result = engine.analyze_code(SOURCE, "swift").await;

    // 부분 결과 없이 전체가 실패해야 한다
    assert!(matches!(result, Err(EngineError::Backend(_))));
}

#[tokio::test]
async fn malformed_response_propagates_as_decode_error() {
    let backend = ScriptedBackend::new(None, "스멜이 없는 것 같습니다만 확신은 없습니다.");
    let engine = engine_with(backend);

    let result = engine.analyze_code(SOURCE, "swift").await;

    assert!(matches!(result, Err(EngineError::Decode(_))));
}

#[tokio::test]
async fn suggest_improvements_issues_one_call_per_distinct_type() {
    let backend = ScriptedBackend::new(None, SMELLS_JSON);
    let engine = engine_with(backend.clone());

    let analysis = engine.analyze_code(SOURCE, "swift").await.unwrap();
    backend.calls.lock().unwrap().clear();

    let suggestions = engine.suggest_improvements(&analysis.issues).await.unwrap();

    // Performance + Maintainability 두 유형 → 호출 두 건
    assert_eq!(backend.calls.lock().unwrap().len(), 2);

    // 병합 후 영향 내림차순
    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].impact, Impact::High);
    assert_eq!(suggestions[0].title, "캐시 도입");
    assert_eq!(suggestions[1].impact, Impact::Low);
}

#[tokio::test]
async fn suggest_improvements_with_no_issues_makes_no_calls() {
    let backend = ScriptedBackend::new(None, "[]");
    let engine = engine_with(backend.clone());

    let suggestions = engine.suggest_improvements(&[]).await.unwrap();

    assert!(suggestions.is_empty());
    assert!(backend.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn generate_documentation_renders_annotated_block() {
    let backend = ScriptedBackend::new(None, "[]");
    let engine = engine_with(backend);

    let documentation = engine.generate_documentation("fn push() {}").await.unwrap();

    assert!(documentation.starts_with("/// 작업 큐 구현"));
    assert!(documentation.contains("fn push() {}"));
    assert!(documentation.contains("/// Notes:\n/// - 용량 제한 없음"));
    // 예제가 비었으니 Examples 헤더는 나오지 않아야 한다
    assert!(!documentation.contains("Examples"));
}

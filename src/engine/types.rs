use serde::{Serialize, Deserialize};
use std::collections::HashMap;
use crate::analyzer::CodeMetrics;

/// 한 번의 분석 호출이 만들어내는 최종 결과. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub complexity_score: f64,
    pub maintainability_index: f64,
    pub issues: Vec<Issue>,
    pub metrics: CodeMetrics,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    pub line_number: Option<u32>,
    pub column_number: Option<u32>,
    pub rule_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueType {
    Style,
    Performance,
    Security,
    Maintainability,
    Bug,
    Documentation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
    Critical,
}

/// 백엔드가 감지한 코드 스멜 원본 레코드.
/// 디코딩과 분류 사이에만 존재하며 분류 후에는 버려진다.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeSmell {
    #[serde(rename = "type")]
    pub smell_type: String,
    pub severity: String,
    pub location: Option<String>,
    pub description: String,
    pub refactoring: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub code_example: Option<String>,
    pub impact: Impact,
    pub effort: Effort,
}

/// 제안 정렬의 1차 키. 파생 Ord는 선언 순서 오름차순이므로
/// 내림차순 정렬은 정렬 시점에 뒤집는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Effort {
    Trivial,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StyleReview {
    pub rating: i32,
    #[serde(default)]
    pub violations: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub examples: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceAnalysis {
    #[serde(default)]
    pub issues: Vec<PerformanceIssue>,
    #[serde(default)]
    pub optimizations: Vec<Optimization>,
    #[serde(default)]
    pub expected_improvements: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PerformanceIssue {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub description: String,
    pub impact: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Optimization {
    pub suggestion: String,
    pub code_example: Option<String>,
    pub benefit: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefactoringSuggestion {
    #[serde(rename = "type")]
    pub refactoring_type: String,
    pub problem: String,
    pub location: Option<String>,
    pub before_code: String,
    pub after_code: String,
    #[serde(default)]
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DocumentationResult {
    pub overview: String,
    pub documented_code: String,
    #[serde(default)]
    pub examples: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
}

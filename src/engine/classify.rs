use crate::engine::types::{CodeSmell, Issue, IssueType, Severity};

/// 자유 형식 코드 스멜 레코드를 정규화된 이슈로 분류한다.
/// 전체 함수이며 입력 순서를 보존한다 - 스멜 하나당 이슈 정확히 하나.
pub fn classify(smells: &[CodeSmell]) -> Vec<Issue> {
    smells.iter().map(classify_smell).collect()
}

fn classify_smell(smell: &CodeSmell) -> Issue {
    Issue {
        issue_type: map_type(&smell.smell_type),
        severity: map_severity(&smell.severity),
        message: smell.description.clone(),
        // 원본 location 문자열은 좌표로 파싱하지 않는다
        line_number: None,
        column_number: None,
        rule_id: Some(smell.smell_type.to_lowercase().replace(' ', "_")),
    }
}

/// 심각도 매핑. 대소문자 무시 부분 일치, 매칭 실패 시 보수적으로 warning.
fn map_severity(raw: &str) -> Severity {
    let lowered = raw.to_lowercase();

    if lowered.contains("critical") || lowered.contains("high") {
        Severity::Critical
    } else if lowered.contains("medium") {
        Severity::Warning
    } else if lowered.contains("low") {
        Severity::Info
    } else {
        Severity::Warning
    }
}

/// 유형 매핑. 우선순위 순서대로 부분 일치를 검사한다.
fn map_type(raw: &str) -> IssueType {
    let lowered = raw.to_lowercase();

    if lowered.contains("performance") {
        IssueType::Performance
    } else if lowered.contains("security") {
        IssueType::Security
    } else if lowered.contains("style") {
        IssueType::Style
    } else if lowered.contains("documentation") {
        IssueType::Documentation
    } else {
        IssueType::Maintainability
    }
}

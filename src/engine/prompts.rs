//! 백엔드로 보내는 프롬프트 템플릿.
//! 각 템플릿은 전체 소스를 포함하고, 타입별 고정 키 집합의 JSON 응답을 요구한다.

use crate::engine::types::{Issue, IssueType};

pub fn style_review(code: &str, language: &str) -> String {
    format!(
        "다음 {language} 코드의 스타일을 검토해주세요:\n\n```{language}\n{code}\n```\n\n\
        JSON 형식으로만 응답해주세요:\n\
        {{\n\
          \"rating\": 1-10,\n\
          \"violations\": [\"위반 사항\"],\n\
          \"recommendations\": [\"개선 권고\"],\n\
          \"examples\": {{\"example_1\": \"첫 번째 권고에 대한 예제 코드\"}}\n\
        }}"
    )
}

pub fn code_smells(code: &str, language: &str) -> String {
    format!(
        "다음 {language} 코드에서 코드 스멜을 찾아주세요:\n\n```{language}\n{code}\n```\n\n\
        JSON 배열로만 응답해주세요:\n\
        [\n\
          {{\n\
            \"type\": \"스멜 유형 (예: long method)\",\n\
            \"severity\": \"high|medium|low\",\n\
            \"location\": \"대략적인 위치\",\n\
            \"description\": \"문제 설명\",\n\
            \"refactoring\": \"권장 리팩토링\"\n\
          }}\n\
        ]"
    )
}

pub fn performance(code: &str, language: &str) -> String {
    format!(
        "다음 {language} 코드의 성능을 분석해주세요:\n\n```{language}\n{code}\n```\n\n\
        JSON 형식으로만 응답해주세요:\n\
        {{\n\
          \"issues\": [{{\"type\": \"\", \"description\": \"\", \"impact\": \"\"}}],\n\
          \"optimizations\": [{{\"suggestion\": \"\", \"code_example\": \"\", \"benefit\": \"\"}}],\n\
          \"expected_improvements\": [\"\"]\n\
        }}"
    )
}

pub fn refactorings(code: &str, language: &str) -> String {
    format!(
        "다음 {language} 코드에 적용할 리팩토링을 제안해주세요:\n\n```{language}\n{code}\n```\n\n\
        JSON 배열로만 응답해주세요:\n\
        [\n\
          {{\n\
            \"type\": \"extract method|extract class|rename variable|rename method|기타\",\n\
            \"problem\": \"해결하려는 문제\",\n\
            \"location\": \"대상 위치\",\n\
            \"before_code\": \"변경 전 코드\",\n\
            \"after_code\": \"변경 후 코드\",\n\
            \"benefits\": [\"기대 효과\"]\n\
          }}\n\
        ]"
    )
}

pub fn documentation(code: &str) -> String {
    format!(
        "다음 코드에 대한 문서를 생성해주세요:\n\n```\n{code}\n```\n\n\
        JSON 형식으로만 응답해주세요:\n\
        {{\n\
          \"overview\": \"코드 개요 한 줄\",\n\
          \"documented_code\": \"주석이 달린 코드 전체\",\n\
          \"examples\": [\"사용 예제\"],\n\
          \"notes\": [\"주의 사항\"]\n\
        }}"
    )
}

pub fn improvements(issue_type: IssueType, issues: &[&Issue]) -> String {
    let listed: String = issues
        .iter()
        .map(|issue| format!("- {}\n", issue.message))
        .collect();

    format!(
        "다음 {issue_type:?} 이슈들을 해결할 개선안을 제안해주세요:\n\n{listed}\n\
        JSON 배열로만 응답해주세요:\n\
        [\n\
          {{\n\
            \"title\": \"제안 제목\",\n\
            \"description\": \"상세 설명\",\n\
            \"code_example\": \"예제 코드 (선택)\",\n\
            \"impact\": \"low|medium|high|critical\",\n\
            \"effort\": \"trivial|low|medium|high\"\n\
          }}\n\
        ]"
    )
}

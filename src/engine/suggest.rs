use std::cmp::Reverse;
use crate::engine::types::{
    Effort, Impact, PerformanceAnalysis, RefactoringSuggestion, StyleReview, Suggestion,
};

/// 스타일/리팩토링/성능 분석 결과를 하나의 순위 매겨진 제안 목록으로 합친다.
pub fn aggregate(
    style: &StyleReview,
    refactorings: &[RefactoringSuggestion],
    performance: &PerformanceAnalysis,
) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    for (idx, recommendation) in style.recommendations.iter().enumerate() {
        let number = idx + 1;
        suggestions.push(Suggestion {
            title: format!("Style Improvement {number}"),
            description: recommendation.clone(),
            // 예제는 관례상 "example_N" 키로 들어온다
            code_example: style.examples.get(&format!("example_{number}")).cloned(),
            impact: Impact::Low,
            effort: Effort::Low,
        });
    }

    for refactoring in refactorings {
        suggestions.push(Suggestion {
            title: refactoring.refactoring_type.clone(),
            description: refactoring.problem.clone(),
            code_example: Some(refactoring.after_code.clone()),
            impact: refactoring_impact(&refactoring.refactoring_type),
            effort: refactoring_effort(&refactoring.refactoring_type),
        });
    }

    for optimization in &performance.optimizations {
        suggestions.push(Suggestion {
            title: optimization.suggestion.clone(),
            description: optimization.benefit.clone(),
            code_example: optimization.code_example.clone(),
            impact: Impact::High,
            effort: Effort::Medium,
        });
    }

    rank(&mut suggestions);
    suggestions
}

/// 영향 내림차순, 노력 오름차순의 안정 정렬.
/// 영향 큰 것 중에서도 손쉬운 것부터 보여준다.
pub fn rank(suggestions: &mut [Suggestion]) {
    suggestions.sort_by_key(|s| (Reverse(s.impact), s.effort));
}

fn refactoring_impact(refactoring_type: &str) -> Impact {
    match refactoring_type.to_lowercase().as_str() {
        "extract method" | "extract class" => Impact::High,
        "rename variable" | "rename method" => Impact::Medium,
        _ => Impact::Medium,
    }
}

fn refactoring_effort(refactoring_type: &str) -> Effort {
    let lowered = refactoring_type.to_lowercase();

    if lowered.starts_with("rename") {
        Effort::Trivial
    } else if lowered == "extract method" {
        Effort::Low
    } else {
        Effort::Medium
    }
}

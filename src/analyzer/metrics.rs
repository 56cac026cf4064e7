use std::collections::HashSet;
use crate::analyzer::types::CodeMetrics;

/// 순환 복잡도에 기여하는 제어 키워드. 실제 파서 없이 단어 단위로 센다.
const CYCLOMATIC_KEYWORDS: [&str; 8] = [
    "if", "else", "for", "while", "switch", "case", "catch", "guard",
];

/// 인지 복잡도에 기여하는 줄 머리 제어 키워드
const COGNITIVE_PREFIXES: [&str; 6] = ["if", "else if", "for", "while", "switch", "catch"];

/// 소스 텍스트에서 결정적 구조 지표를 계산한다.
/// AST 없이 줄/키워드 스캔으로 근사하는 휴리스틱이며, 어떤 입력에도 실패하지 않는다.
pub fn compute_metrics(source: &str) -> CodeMetrics {
    CodeMetrics {
        lines_of_code: source.split('\n').count(),
        cyclomatic_complexity: cyclomatic_complexity(source),
        cognitive_complexity: cognitive_complexity(source),
        duplication_percentage: duplication_percentage(source),
    }
}

fn cyclomatic_complexity(source: &str) -> u32 {
    let mut complexity = 1u32;

    for word in source.split(|c: char| !c.is_alphanumeric() && c != '_') {
        if CYCLOMATIC_KEYWORDS.contains(&word) {
            complexity += 1;
        }
    }

    complexity
}

fn cognitive_complexity(source: &str) -> u32 {
    let mut complexity = 0u32;

    for line in source.split('\n') {
        let trimmed = line.trim_start();

        if starts_with_control_keyword(trimmed) {
            complexity += 1;
        }

        // 들여쓰기 깊이를 중첩 수준의 근사치로 가산 (공백 4칸 = 1단계)
        let leading_spaces = line.len() - trimmed.len();
        complexity += (leading_spaces / 4) as u32;
    }

    complexity
}

fn starts_with_control_keyword(trimmed: &str) -> bool {
    COGNITIVE_PREFIXES.iter().any(|prefix| {
        trimmed.starts_with(prefix)
            && trimmed[prefix.len()..]
                .chars()
                .next()
                .map(|c| !c.is_alphanumeric() && c != '_')
                .unwrap_or(true)
    })
}

fn duplication_percentage(source: &str) -> f64 {
    let non_empty: Vec<&str> = source
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    if non_empty.is_empty() {
        return 0.0;
    }

    let unique: HashSet<&str> = non_empty.iter().copied().collect();
    let total = non_empty.len();

    (total - unique.len()) as f64 / total as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metrics_are_deterministic() {
        let source = "if a {\n    for b in c {\n        work()\n    }\n}";
        assert_eq!(compute_metrics(source), compute_metrics(source));
    }

    #[test]
    fn cyclomatic_base_is_one_for_empty_source() {
        let metrics = compute_metrics("");
        assert_eq!(metrics.cyclomatic_complexity, 1);
        assert_eq!(metrics.duplication_percentage, 0.0);
    }

    #[test]
    fn cyclomatic_counts_if_and_for() {
        let source = "if ready {\n    run()\n}\nfor item in items {\n    use_it(item)\n}";
        assert_eq!(compute_metrics(source).cyclomatic_complexity, 3);
    }

    #[test]
    fn cyclomatic_ignores_keyword_substrings() {
        // "iffy"나 "guarded" 같은 식별자는 제어 키워드가 아니다
        let source = "let iffy = guarded + switcher + forward";
        assert_eq!(compute_metrics(source).cyclomatic_complexity, 1);
    }

    #[test]
    fn cognitive_counts_control_prefix_and_indentation() {
        // "if" +1, 들여쓰기 8칸의 "for" +1+2, 들여쓰기 4칸 줄 +1
        let source = "if a {\n    let x = 1\n        for b in c {\n}";
        assert_eq!(compute_metrics(source).cognitive_complexity, 5);
    }

    #[test]
    fn duplication_of_four_identical_lines_is_75_percent() {
        let source = "let x = 1\nlet x = 1\nlet x = 1\nlet x = 1";
        assert_eq!(compute_metrics(source).duplication_percentage, 75.0);
    }

    #[test]
    fn duplication_ignores_empty_lines() {
        // 비어 있지 않은 10줄 중 동일한 3줄 → (10 - 8) / 10 = 20%
        let mut lines: Vec<String> = (0..7).map(|i| format!("line {i}")).collect();
        lines.extend(std::iter::repeat("dup".to_string()).take(3));
        let source = lines.join("\n");
        let metrics = compute_metrics(&source);
        assert_eq!(metrics.lines_of_code, 10);
        assert!((metrics.duplication_percentage - 20.0).abs() < 1e-9);
    }

    #[test]
    fn lines_of_code_follows_split_semantics() {
        assert_eq!(compute_metrics("a\nb\nc").lines_of_code, 3);
        assert_eq!(compute_metrics("a\nb\n").lines_of_code, 3);
    }
}

use crate::analyzer::CodeMetrics;
use crate::engine::types::{Issue, Severity};

/// 지표와 분류된 이슈에서 (복잡도 점수, 유지보수성 지수)를 계산한다.
/// 전체 함수이며 어떤 입력에도 범위를 벗어나지 않는다.
pub fn score(metrics: &CodeMetrics, issues: &[Issue]) -> (f64, f64) {
    (complexity_score(metrics, issues), maintainability_index(metrics, issues))
}

fn complexity_score(metrics: &CodeMetrics, issues: &[Issue]) -> f64 {
    let critical = count_severity(issues, Severity::Critical) as f64;
    let warning = count_severity(issues, Severity::Warning) as f64;

    let raw = 0.3 * metrics.cyclomatic_complexity as f64
        + 0.2 * metrics.cognitive_complexity as f64
        + 0.2 * metrics.duplication_percentage
        + 2.0 * critical
        + 1.0 * warning;

    raw.clamp(0.0, 10.0)
}

fn maintainability_index(metrics: &CodeMetrics, issues: &[Issue]) -> f64 {
    let raw = 100.0
        - 0.1 * metrics.lines_of_code as f64
        - 2.0 * metrics.cyclomatic_complexity as f64
        - 5.0 * issues.len() as f64;

    raw.clamp(0.0, 100.0)
}

fn count_severity(issues: &[Issue], severity: Severity) -> usize {
    issues.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::types::IssueType;

    fn metrics(loc: usize, cyclomatic: u32, cognitive: u32, duplication: f64) -> CodeMetrics {
        CodeMetrics {
            lines_of_code: loc,
            cyclomatic_complexity: cyclomatic,
            cognitive_complexity: cognitive,
            duplication_percentage: duplication,
        }
    }

    fn issue(severity: Severity) -> Issue {
        Issue {
            issue_type: IssueType::Maintainability,
            severity,
            message: String::new(),
            line_number: None,
            column_number: None,
            rule_id: None,
        }
    }

    #[test]
    fn clean_source_scores_only_complexity_terms() {
        let (complexity, maintainability) = score(&metrics(10, 3, 2, 0.0), &[]);
        assert!((complexity - (0.3 * 3.0 + 0.2 * 2.0)).abs() < 1e-9);
        assert!((maintainability - (100.0 - 1.0 - 6.0)).abs() < 1e-9);
    }

    #[test]
    fn issue_penalties_enter_complexity_score() {
        let issues = vec![issue(Severity::Critical), issue(Severity::Warning), issue(Severity::Info)];
        let (complexity, _) = score(&metrics(1, 1, 0, 0.0), &issues);
        // 0.3 + 2.0(critical) + 1.0(warning), info는 가산 없음
        assert!((complexity - 3.3).abs() < 1e-9);
    }

    #[test]
    fn scores_stay_in_bounds_for_pathological_input() {
        let issues: Vec<Issue> = (0..500).map(|_| issue(Severity::Critical)).collect();
        let (complexity, maintainability) = score(&metrics(10_000, 800, 900, 100.0), &issues);
        assert_eq!(complexity, 10.0);
        assert_eq!(maintainability, 0.0);
    }

    #[test]
    fn scores_are_recomputed_not_cached() {
        let m = metrics(100, 5, 5, 10.0);
        assert_eq!(score(&m, &[]), score(&m, &[]));
    }
}

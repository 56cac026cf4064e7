use chrono::Utc;
use colored::*;
use crate::engine::types::{AnalysisResult, Severity};

impl AnalysisResult {
    pub fn format_markdown(&self) -> String {
        let mut output = String::new();

        output.push_str("# 코드 품질 분석 결과\n\n");
        output.push_str(&format!("**생성일**: {}\n\n", Utc::now().format("%Y-%m-%d %H:%M:%S UTC")));
        output.push_str(&format!("**복잡도 점수**: {:.1}/10\n", self.complexity_score));
        output.push_str(&format!("**유지보수성 지수**: {:.1}/100\n\n", self.maintainability_index));

        output.push_str("## 지표\n\n");
        output.push_str(&format!("- 코드 라인 수: {}\n", self.metrics.lines_of_code));
        output.push_str(&format!("- 순환 복잡도: {}\n", self.metrics.cyclomatic_complexity));
        output.push_str(&format!("- 인지 복잡도: {}\n", self.metrics.cognitive_complexity));
        output.push_str(&format!("- 중복 비율: {:.1}%\n\n", self.metrics.duplication_percentage));

        if !self.issues.is_empty() {
            output.push_str("## 🔍 발견된 이슈\n\n");
            for issue in &self.issues {
                let severity_icon = match issue.severity {
                    Severity::Critical => "🔴",
                    Severity::Error => "🟠",
                    Severity::Warning => "🟡",
                    Severity::Info => "ℹ️",
                };

                output.push_str(&format!("### {} {:?} - {:?}\n\n", severity_icon, issue.severity, issue.issue_type));
                output.push_str(&format!("{}\n\n", issue.message));

                if let Some(rule_id) = &issue.rule_id {
                    output.push_str(&format!("**규칙**: `{rule_id}`\n\n"));
                }
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("## 💡 개선 제안\n\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!(
                    "### {} (영향: {:?}, 노력: {:?})\n\n",
                    suggestion.title, suggestion.impact, suggestion.effort
                ));
                output.push_str(&format!("{}\n\n", suggestion.description));

                if let Some(example) = &suggestion.code_example {
                    output.push_str(&format!("```\n{example}\n```\n\n"));
                }
            }
        }

        output
    }

    pub fn print_summary(&self) {
        println!("\n{}", "코드 품질 요약".bright_cyan().bold());
        println!("{}", "=".repeat(50).dimmed());

        let complexity = if self.complexity_score <= 3.0 {
            format!("{:.1}", self.complexity_score).green()
        } else if self.complexity_score <= 6.0 {
            format!("{:.1}", self.complexity_score).yellow()
        } else {
            format!("{:.1}", self.complexity_score).red()
        };

        let maintainability = if self.maintainability_index >= 80.0 {
            format!("{:.1}", self.maintainability_index).green()
        } else if self.maintainability_index >= 50.0 {
            format!("{:.1}", self.maintainability_index).yellow()
        } else {
            format!("{:.1}", self.maintainability_index).red()
        };

        println!("복잡도 점수: {complexity}/10");
        println!("유지보수성 지수: {maintainability}/100");
        println!(
            "라인 {} | 순환 {} | 인지 {} | 중복 {:.1}%",
            self.metrics.lines_of_code,
            self.metrics.cyclomatic_complexity,
            self.metrics.cognitive_complexity,
            self.metrics.duplication_percentage
        );

        let critical_count = self
            .issues
            .iter()
            .filter(|i| matches!(i.severity, Severity::Critical))
            .count();

        if critical_count > 0 {
            println!("치명적 이슈: {}", critical_count.to_string().red().bold());
        }

        println!("전체 이슈: {}", self.issues.len());
        println!("개선 제안: {}", self.suggestions.len());
    }
}

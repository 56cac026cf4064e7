use serde::{Serialize, Deserialize};

/// 소스 텍스트에서만 계산되는 구조 지표. 매 호출마다 새로 계산한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeMetrics {
    pub lines_of_code: usize,
    pub cyclomatic_complexity: u32,
    pub cognitive_complexity: u32,
    pub duplication_percentage: f64,
}

mod types;
mod metrics;

pub use types::CodeMetrics;
pub use metrics::compute_metrics;

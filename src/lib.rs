pub mod api;
pub mod analyzer;
pub mod engine;
pub mod store;
pub mod config;
pub mod error;
pub mod cli;
pub mod handlers;

// Re-export commonly used types
pub use analyzer::{compute_metrics, CodeMetrics};
pub use api::InferenceBackend;
pub use engine::{AnalysisResult, Issue, QualityEngine, Suggestion};
pub use error::{BackendError, DecodeError, EngineError, StoreError};
pub use config::Config;

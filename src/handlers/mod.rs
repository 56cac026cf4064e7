pub mod analysis;
pub mod docs;
pub mod config;

pub use analysis::{handle_analyze, handle_improve};
pub use docs::handle_doc;
pub use config::{handle_config, ConfigAction};

pub mod api;
pub mod config;
pub mod document;
pub mod error;
pub mod llm;
pub mod modules;
pub mod providers;

// Re-export commonly used items
pub use config::AppConfig;
pub use error::QaError;
pub use llm::qa::QaEngine;
pub use modules::Module;

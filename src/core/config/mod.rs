mod paths;
mod service;

pub use paths::AppPaths;
pub use service::{AppConfig, ConfigService, LlmConfig, RagConfig, ServerConfig};

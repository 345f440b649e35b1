pub mod openai;
pub mod provider;
pub mod types;

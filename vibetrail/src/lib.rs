pub mod api;
pub mod config;
pub mod error;
pub mod intelligence;
pub mod llm;
pub mod services;
pub mod taste;

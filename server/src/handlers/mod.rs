pub mod health;
pub mod relay;
pub mod runtime_config;

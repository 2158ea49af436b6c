mod auth;
pub mod client;
pub mod types;

pub use auth::{FORGOT_PASSWORD, RESET_PASSWORD, VERIFY_EMAIL};
pub use client::*;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;

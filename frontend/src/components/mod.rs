pub mod common;
pub mod countdown;
pub mod error;
pub mod layout;
pub mod password_field;
pub mod status;

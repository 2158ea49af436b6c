pub mod forgot_password;
pub mod home;
pub mod reset_password;
pub mod verify_email;

pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use reset_password::ResetPasswordPage;
pub use verify_email::VerifyEmailPage;

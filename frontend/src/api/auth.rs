use super::{
    client::{ApiClient, Endpoint},
    types::{ApiError, ForgotPasswordRequest, ResetPasswordRequest, VerifyEmailQuery},
};

pub const FORGOT_PASSWORD: Endpoint = Endpoint::post("/forgot-password");
pub const RESET_PASSWORD: Endpoint = Endpoint::post("/reset-password");
pub const VERIFY_EMAIL: Endpoint = Endpoint::get("/verify-email");

impl ApiClient {
    pub async fn request_password_reset(
        &self,
        request: &ForgotPasswordRequest,
    ) -> Result<(), ApiError> {
        self.dispatch(FORGOT_PASSWORD, request).await
    }

    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.dispatch(RESET_PASSWORD, request).await
    }

    pub async fn verify_email(&self, query: &VerifyEmailQuery) -> Result<(), ApiError> {
        self.dispatch(VERIFY_EMAIL, query).await
    }
}

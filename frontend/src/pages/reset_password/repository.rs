use crate::api::{ApiClient, ApiError, ResetPasswordRequest};
use crate::flow::Token;
use std::rc::Rc;

#[derive(Clone)]
pub struct ResetPasswordRepository {
    client: Rc<ApiClient>,
}

impl ResetPasswordRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn reset_password(&self, token: Token, new_password: String) -> Result<(), ApiError> {
        self.client
            .reset_password(&ResetPasswordRequest {
                token: token.into_inner(),
                new_password,
            })
            .await
    }
}

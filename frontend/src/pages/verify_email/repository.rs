use crate::api::{ApiClient, ApiError, VerifyEmailQuery};
use crate::flow::Token;
use std::rc::Rc;

#[derive(Clone)]
pub struct VerifyEmailRepository {
    client: Rc<ApiClient>,
}

impl VerifyEmailRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn verify(&self, token: Token) -> Result<(), ApiError> {
        self.client
            .verify_email(&VerifyEmailQuery {
                token: token.into_inner(),
            })
            .await
    }
}

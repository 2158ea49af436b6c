use super::repository::VerifyEmailRepository;
use crate::api::ApiClient;
use crate::flow::{
    ErrorKind, FlowController, FlowDefinition, FlowState, KnownError, Rejection, Token, Trigger,
};
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

pub static VERIFY_EMAIL_FLOW: FlowDefinition = FlowDefinition {
    name: "verify-email",
    trigger: Trigger::OnLoad,
    requires_token: Some("Missing verification token"),
    known_errors: &[KnownError {
        detail: "Invalid or expired verification token",
        kind: ErrorKind::InvalidToken,
        message: None,
    }],
    fallback_message: "Failed to verify email",
};

#[derive(Clone, Copy)]
pub struct VerifyEmailViewModel {
    pub controller: FlowController<()>,
}

impl VerifyEmailViewModel {
    /// Sends the verification request if the page loaded with a token.
    pub fn start(&self) {
        if self.controller.state.get_untracked().is_submitting() {
            self.controller.submit(());
        }
    }

    pub fn subtitle(&self) -> Signal<String> {
        let state = self.controller.state;
        Signal::derive(move || {
            match state.get() {
                FlowState::Success => "Thank you for verifying your email",
                FlowState::Failed { .. } => "We couldn't verify your email address",
                _ => "We're verifying your email address",
            }
            .to_string()
        })
    }
}

pub fn use_verify_email_view_model() -> VerifyEmailViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let query = use_query_map();
    let token = query.with_untracked(|params| Token::parse(params.get("token").map(String::as_str)));
    verify_email_view_model(VerifyEmailRepository::new_with_client(Rc::new(api)), token)
}

pub fn verify_email_view_model(
    repository: VerifyEmailRepository,
    token: Option<Token>,
) -> VerifyEmailViewModel {
    let controller = FlowController::new(
        &VERIFY_EMAIL_FLOW,
        token,
        |_: &(), token: Option<&Token>| token.cloned().ok_or(Rejection::MissingToken),
        move |token: Token| {
            let repository = repository.clone();
            async move { repository.verify(token).await }
        },
    );
    VerifyEmailViewModel { controller }
}

use super::repository::ResetPasswordRepository;
use crate::api::ApiClient;
use crate::flow::{
    validate_password_pair, ErrorKind, FlowController, FlowDefinition, KnownError, Rejection,
    Token, Trigger,
};
use leptos::*;
use leptos_router::use_query_map;
use std::rc::Rc;

pub static RESET_PASSWORD_FLOW: FlowDefinition = FlowDefinition {
    name: "reset-password",
    trigger: Trigger::OnSubmit,
    requires_token: Some("Missing reset token. Please request a new password reset link."),
    known_errors: &[KnownError {
        detail: "Invalid or expired reset token",
        kind: ErrorKind::ExpiredToken,
        message: Some("Your password reset link has expired"),
    }],
    fallback_message: "Failed to reset password",
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordPair {
    pub password: String,
    pub confirmation: String,
}

#[derive(Clone, Copy)]
pub struct ResetPasswordViewModel {
    pub password: RwSignal<String>,
    pub confirmation: RwSignal<String>,
    pub controller: FlowController<PasswordPair>,
}

impl ResetPasswordViewModel {
    pub fn submit(&self) {
        self.controller.submit(PasswordPair {
            password: self.password.get_untracked(),
            confirmation: self.confirmation.get_untracked(),
        });
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let password = self.password;
        let confirmation = self.confirmation;
        let pending = self.controller.pending();
        Signal::derive(move || {
            !pending.get()
                && !password.with(String::is_empty)
                && !confirmation.with(String::is_empty)
        })
    }
}

pub fn use_reset_password_view_model() -> ResetPasswordViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let query = use_query_map();
    let token = query.with_untracked(|params| Token::parse(params.get("token").map(String::as_str)));
    reset_password_view_model(ResetPasswordRepository::new_with_client(Rc::new(api)), token)
}

pub fn reset_password_view_model(
    repository: ResetPasswordRepository,
    token: Option<Token>,
) -> ResetPasswordViewModel {
    let controller = FlowController::new(
        &RESET_PASSWORD_FLOW,
        token,
        |input: &PasswordPair, token: Option<&Token>| -> Result<(Token, String), Rejection> {
            let password = validate_password_pair(&input.password, &input.confirmation)?;
            let token = token.cloned().ok_or(Rejection::MissingToken)?;
            Ok((token, password))
        },
        move |(token, password): (Token, String)| {
            let repository = repository.clone();
            async move { repository.reset_password(token, password).await }
        },
    );

    ResetPasswordViewModel {
        password: create_rw_signal(String::new()),
        confirmation: create_rw_signal(String::new()),
        controller,
    }
}

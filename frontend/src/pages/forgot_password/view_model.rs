use super::repository::ForgotPasswordRepository;
use crate::api::ApiClient;
use crate::flow::{
    validate_email, ErrorKind, FlowController, FlowDefinition, KnownError, Rejection, Token,
    Trigger,
};
use leptos::*;
use std::rc::Rc;

pub static FORGOT_PASSWORD_FLOW: FlowDefinition = FlowDefinition {
    name: "forgot-password",
    trigger: Trigger::OnSubmit,
    requires_token: None,
    known_errors: &[KnownError {
        detail: "User not found",
        kind: ErrorKind::UserNotFound,
        message: Some("We couldn't find an account with that email address"),
    }],
    fallback_message: "Failed to send reset link",
};

#[derive(Clone, Copy)]
pub struct ForgotPasswordViewModel {
    pub email: RwSignal<String>,
    pub controller: FlowController<String>,
}

impl ForgotPasswordViewModel {
    pub fn submit(&self) {
        self.controller.submit(self.email.get_untracked());
    }

    /// Back to the form with the typed email kept.
    pub fn try_again(&self) {
        self.controller.reset();
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let email = self.email;
        let pending = self.controller.pending();
        Signal::derive(move || !pending.get() && !email.with(|value| value.trim().is_empty()))
    }
}

pub fn use_forgot_password_view_model() -> ForgotPasswordViewModel {
    let client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    forgot_password_view_model(ForgotPasswordRepository::new_with_client(Rc::new(client)))
}

pub fn forgot_password_view_model(repository: ForgotPasswordRepository) -> ForgotPasswordViewModel {
    let email = create_rw_signal(String::new());
    let controller = FlowController::new(
        &FORGOT_PASSWORD_FLOW,
        None,
        |input: &String, _token: Option<&Token>| -> Result<String, Rejection> {
            Ok(validate_email(input)?)
        },
        move |email: String| {
            let repository = repository.clone();
            async move { repository.request_reset(email).await }
        },
    );

    ForgotPasswordViewModel { email, controller }
}

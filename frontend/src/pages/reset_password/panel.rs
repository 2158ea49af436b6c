use super::view_model::{use_reset_password_view_model, ResetPasswordViewModel};
use crate::components::{
    common::{Button, LinkButton},
    countdown::RedirectNotice,
    error::{AlertTone, InlineAlert},
    layout::AuthLayout,
    password_field::PasswordField,
    status::{StatusCard, StatusTone},
};
use crate::flow::{ErrorKind, FlowState};
use crate::router::FORGOT_PASSWORD_PATH;
use crate::state::config::config_link;
use leptos::*;

#[component]
pub fn ResetPasswordPanel() -> impl IntoView {
    let vm = use_reset_password_view_model();
    view! {
        <AuthLayout title="Reset Password" subtitle="Please enter your new password below.">
            <ResetPasswordBody vm=vm />
        </AuthLayout>
    }
}

#[component]
pub fn ResetPasswordBody(vm: ResetPasswordViewModel) -> impl IntoView {
    let state = vm.controller.state;
    move || match state.get() {
        FlowState::Success => view! { <ResetSuccessView /> }.into_view(),
        FlowState::Failed {
            kind: ErrorKind::ExpiredToken,
            ..
        } => view! { <LinkExpiredView /> }.into_view(),
        FlowState::Failed {
            kind: ErrorKind::InvalidToken,
            ..
        } => view! { <InvalidLinkView /> }.into_view(),
        FlowState::Failed { message, .. } => {
            view! { <PasswordForm vm=vm error=Some(message) notice=None /> }.into_view()
        }
        FlowState::CollectingInput { notice } => {
            view! { <PasswordForm vm=vm error=None notice=notice /> }.into_view()
        }
        FlowState::Submitting => {
            view! { <PasswordForm vm=vm error=None notice=None /> }.into_view()
        }
    }
}

#[component]
fn PasswordForm(
    vm: ResetPasswordViewModel,
    error: Option<String>,
    notice: Option<String>,
) -> impl IntoView {
    let pending = vm.controller.pending();
    let can_submit = vm.can_submit();
    let login_url = config_link(|c| &c.login_url);

    view! {
        <form
            class="space-y-6"
            on:submit=move |ev| {
                ev.prevent_default();
                vm.submit();
            }
        >
            <InlineAlert message=Signal::derive(move || error.clone()) title="Error" />
            <InlineAlert message=Signal::derive(move || notice.clone()) tone=AlertTone::Notice />
            <PasswordField
                id="password"
                label="New Password"
                value=vm.password
                placeholder="Enter your new password"
                disabled=pending
            />
            <PasswordField
                id="confirm-password"
                label="Confirm Password"
                value=vm.confirmation
                placeholder="Confirm your new password"
                disabled=pending
            />
            <Button loading=pending disabled=Signal::derive(move || !can_submit.get())>
                {move || if pending.get() { "Resetting Password..." } else { "Reset Password" }}
            </Button>
            <div class="text-center text-sm">
                <a href=move || login_url.get() class="font-medium text-link hover:text-link-hover">
                    "Back to Login"
                </a>
            </div>
        </form>
    }
}

#[component]
fn ResetSuccessView() -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    view! {
        <StatusCard
            tone=StatusTone::Success
            title="Password Reset Successful"
            lead="Your password has been reset successfully."
        >
            <RedirectNotice target=login_url />
            <LinkButton href=login_url>"Go to Login"</LinkButton>
            <p>"Your account is now secured with your new password"</p>
        </StatusCard>
    }
}

#[component]
fn LinkExpiredView() -> impl IntoView {
    view! {
        <StatusCard
            tone=StatusTone::Warning
            title="Link Expired"
            lead="Your password reset link has expired"
        >
            <p class="rounded-lg bg-status-warning-bg p-4 text-status-warning-text">
                "For security reasons, password reset links expire after a certain period. Please request a new password reset link."
            </p>
            <RequestNewLinkActions />
        </StatusCard>
    }
}

#[component]
fn InvalidLinkView() -> impl IntoView {
    view! {
        <StatusCard
            tone=StatusTone::Error
            title="Invalid Reset Link"
            lead="The password reset link is invalid or has been tampered with"
        >
            <p class="rounded-lg bg-status-error-bg p-4 text-status-error-text">
                "For security reasons, we cannot process this password reset request. Please request a new password reset link."
            </p>
            <RequestNewLinkActions />
        </StatusCard>
    }
}

#[component]
fn RequestNewLinkActions() -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    view! {
        <LinkButton href=FORGOT_PASSWORD_PATH.to_string()>"Request New Link"</LinkButton>
        <a href=move || login_url.get() class="block font-medium text-link hover:text-link-hover">
            "Back to Login"
        </a>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use super::super::repository::ResetPasswordRepository;
    use super::super::view_model::reset_password_view_model;
    use crate::api::ApiClient;
    use crate::flow::Token;
    use crate::state::config::use_config;
    use crate::test_support::ssr::render_to_string;
    use std::rc::Rc;

    fn render_with(token: Option<&'static str>, state: Option<FlowState>) -> String {
        render_to_string(move || {
            let vm = reset_password_view_model(
                ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                    "http://127.0.0.1:1",
                ))),
                Token::parse(token),
            );
            if let Some(state) = state {
                vm.controller.state.set(state);
            }
            view! { <ResetPasswordBody vm=vm /> }
        })
    }

    #[test]
    fn missing_token_renders_invalid_link_view() {
        let html = render_with(None, None);
        assert!(html.contains("Invalid Reset Link"));
        assert!(html.contains("href=\"/forgot-password\""));
        assert!(!html.contains("New Password"));
    }

    #[test]
    fn invalid_link_view_tracks_published_login_url() {
        let html = render_to_string(|| {
            let (_, set_config) = use_config();
            let vm = reset_password_view_model(
                ResetPasswordRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
                    "http://127.0.0.1:1",
                ))),
                None,
            );
            set_config.update(|c| c.login_url = "https://app.moskal.id/login".into());
            view! { <ResetPasswordBody vm=vm /> }
        });
        assert!(html.contains("Invalid Reset Link"));
        assert!(html.contains("href=\"https://app.moskal.id/login\""));
    }

    #[test]
    fn token_present_renders_form() {
        let html = render_with(Some("tok-123"), None);
        assert!(html.contains("New Password"));
        assert!(html.contains("Confirm Password"));
        assert!(html.contains("Reset Password"));
    }

    #[test]
    fn expired_state_renders_link_expired_view() {
        let html = render_with(
            Some("tok-123"),
            Some(FlowState::failed(ErrorKind::ExpiredToken, "expired")),
        );
        assert!(html.contains("Link Expired"));
        assert!(html.contains("Request New Link"));
    }

    #[test]
    fn success_renders_countdown() {
        let html = render_with(Some("tok-123"), Some(FlowState::Success));
        assert!(html.contains("Password Reset Successful"));
        assert!(html.contains("redirected to the login page in 5 seconds."));
    }

    #[test]
    fn mismatch_notice_is_shown_inline() {
        let html = render_with(
            Some("tok-123"),
            Some(FlowState::CollectingInput {
                notice: Some("Passwords do not match".into()),
            }),
        );
        assert!(html.contains("Passwords do not match"));
        assert!(html.contains("New Password"));
    }
}

use super::view_model::{use_verify_email_view_model, VerifyEmailViewModel};
use crate::components::{
    common::{ButtonVariant, LinkButton, Spinner},
    layout::AuthLayout,
    status::{StatusCard, StatusTone},
};
use crate::flow::{ErrorKind, FlowState};
use crate::state::config::config_link;
use leptos::*;

#[component]
pub fn VerifyEmailPanel() -> impl IntoView {
    let vm = use_verify_email_view_model();
    vm.start();
    view! {
        <AuthLayout title="Email Verification" subtitle=vm.subtitle()>
            <VerifyEmailBody vm=vm />
        </AuthLayout>
    }
}

#[component]
pub fn VerifyEmailBody(vm: VerifyEmailViewModel) -> impl IntoView {
    let state = vm.controller.state;
    move || match state.get() {
        FlowState::Success => view! { <VerifiedView /> }.into_view(),
        FlowState::Failed {
            kind: ErrorKind::InvalidToken,
            message,
        } => view! { <InvalidLinkView message=message /> }.into_view(),
        FlowState::Failed { message, .. } => view! { <FailedView message=message /> }.into_view(),
        FlowState::CollectingInput { .. } | FlowState::Submitting => {
            view! { <Spinner label="Verifying your email address..." /> }.into_view()
        }
    }
}

#[component]
fn VerifiedView() -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    view! {
        <StatusCard
            tone=StatusTone::Success
            title="Email Verified!"
            lead="Your email address has been successfully verified."
        >
            <p class="rounded-lg bg-status-success-bg p-4 text-status-success-text">
                "Your account is now active. You can now sign in and access all features."
            </p>
            <LinkButton href=login_url>"Sign In"</LinkButton>
        </StatusCard>
    }
}

#[component]
fn InvalidLinkView(message: String) -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    view! {
        <StatusCard
            tone=StatusTone::Warning
            title="Invalid Verification Link"
            lead="The verification link is invalid or has expired."
        >
            <p class="rounded-lg bg-status-warning-bg p-4 text-status-warning-text">
                {message}
            </p>
            <LinkButton href=login_url>"Back to Login"</LinkButton>
        </StatusCard>
    }
}

#[component]
fn FailedView(message: String) -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    let support_url = config_link(|c| &c.support_url);
    view! {
        <StatusCard
            tone=StatusTone::Error
            title="Verification Failed"
            lead="We couldn't verify your email address."
        >
            <p class="rounded-lg bg-status-error-bg p-4 text-status-error-text">
                {message}
            </p>
            <div class="flex gap-4">
                <LinkButton href=login_url>"Back to Login"</LinkButton>
                <LinkButton href=support_url variant=ButtonVariant::Secondary>
                    "Contact Support"
                </LinkButton>
            </div>
        </StatusCard>
    }
}

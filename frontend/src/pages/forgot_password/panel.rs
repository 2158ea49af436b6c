use super::view_model::{use_forgot_password_view_model, ForgotPasswordViewModel};
use crate::components::{
    common::{Button, ButtonVariant, LinkButton},
    error::{AlertTone, InlineAlert},
    layout::AuthLayout,
    status::{StatusCard, StatusTone},
};
use crate::state::config::config_link;
use crate::flow::{ErrorKind, FlowState};
use leptos::*;

#[component]
pub fn ForgotPasswordPanel() -> impl IntoView {
    let vm = use_forgot_password_view_model();
    view! {
        <AuthLayout
            title="Forgot Password"
            subtitle="Please enter your email to receive a password reset link."
        >
            <ForgotPasswordBody vm=vm />
        </AuthLayout>
    }
}

#[component]
pub fn ForgotPasswordBody(vm: ForgotPasswordViewModel) -> impl IntoView {
    let state = vm.controller.state;
    move || match state.get() {
        FlowState::Success => view! { <EmailSentView vm=vm /> }.into_view(),
        FlowState::Failed {
            kind: ErrorKind::UserNotFound,
            ..
        } => view! { <AccountNotFoundView vm=vm /> }.into_view(),
        FlowState::Failed { message, .. } => {
            view! { <EmailForm vm=vm error=Some(message) notice=None /> }.into_view()
        }
        FlowState::CollectingInput { notice } => {
            view! { <EmailForm vm=vm error=None notice=notice /> }.into_view()
        }
        FlowState::Submitting => view! { <EmailForm vm=vm error=None notice=None /> }.into_view(),
    }
}

#[component]
fn EmailForm(
    vm: ForgotPasswordViewModel,
    error: Option<String>,
    notice: Option<String>,
) -> impl IntoView {
    let email = vm.email;
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
            <div class="space-y-2">
                <label for="email" class="block text-sm font-medium text-fg">
                    "Email " <span class="text-link">"*"</span>
                </label>
                <input
                    id="email"
                    name="email"
                    type="email"
                    autocomplete="email"
                    required
                    class="appearance-none rounded-md block w-full px-3 py-2 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                    placeholder="Enter your email business email"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <Button
                loading=pending
                disabled=Signal::derive(move || !can_submit.get())
            >
                {move || if pending.get() { "Sending Reset Link..." } else { "Send Reset Link" }}
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
fn EmailSentView(vm: ForgotPasswordViewModel) -> impl IntoView {
    let login_url = config_link(|c| &c.login_url);
    let email = vm.email.get_untracked().trim().to_string();
    view! {
        <StatusCard
            tone=StatusTone::Success
            title="Check Your Email"
            lead="We've sent a password reset link to"
            detail=email
        >
            <p class="rounded-lg bg-status-success-bg p-4 text-status-success-text">
                "If an account exists with this email, you'll receive a password reset link shortly. Please check your inbox and spam folder."
            </p>
            <LinkButton href=login_url>"Back to Login"</LinkButton>
            <p>
                "Didn't receive the email? Check your spam folder or "
                <button
                    type="button"
                    class="font-medium text-link hover:text-link-hover"
                    on:click=move |_| vm.try_again()
                >
                    "try another email"
                </button>
            </p>
        </StatusCard>
    }
}

#[component]
fn AccountNotFoundView(vm: ForgotPasswordViewModel) -> impl IntoView {
    let signup_url = config_link(|c| &c.signup_url);
    let login_url = config_link(|c| &c.login_url);
    let email = vm.email.get_untracked().trim().to_string();
    view! {
        <StatusCard
            tone=StatusTone::Error
            title="Account Not Found"
            lead="We couldn't find an account with"
            detail=email
        >
            <p class="rounded-lg bg-status-error-bg p-4 text-status-error-text">
                "Please check if you've entered the correct email address or "
                <a href=move || signup_url.get() class="font-medium underline">"create a new account"</a>
                "."
            </p>
            <div class="flex gap-4">
                <Button on:click=move |_| vm.try_again()>"Try Again"</Button>
                <LinkButton href=login_url variant=ButtonVariant::Secondary>
                    "Back to Login"
                </LinkButton>
            </div>
        </StatusCard>
    }
}

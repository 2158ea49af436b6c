use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::ForgotPasswordPanel;
pub use view_model::FORGOT_PASSWORD_FLOW;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    view! { <ForgotPasswordPanel /> }
}

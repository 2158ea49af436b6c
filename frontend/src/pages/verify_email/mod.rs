use leptos::*;

mod panel;
mod repository;
mod view_model;

pub use panel::VerifyEmailPanel;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    view! { <VerifyEmailPanel /> }
}

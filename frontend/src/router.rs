use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::pages::{ForgotPasswordPage, HomePage, ResetPasswordPage, VerifyEmailPage};

pub const HOME_PATH: &str = "/";
pub const FORGOT_PASSWORD_PATH: &str = "/forgot-password";
pub const RESET_PASSWORD_PATH: &str = "/reset-password";
pub const VERIFY_EMAIL_PATH: &str = "/verify-email";

pub const ROUTE_PATHS: &[&str] = &[
    HOME_PATH,
    FORGOT_PASSWORD_PATH,
    RESET_PASSWORD_PATH,
    VERIFY_EMAIL_PATH,
];

/// Pages that read a `token` query parameter.
pub const TOKEN_ROUTE_PATHS: &[&str] = &[RESET_PASSWORD_PATH, VERIFY_EMAIL_PATH];

pub const DOCUMENT_TITLE: &str = "Moskal | AI Powered Social Media Monitoring";

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_meta_context();

    // window.__MOSKAL_ENV (env.js) wins over ./config.json.
    let (_, set_config) = crate::state::config::use_config();
    create_effect(move |_| {
        spawn_local(crate::state::config::refresh_config(set_config));
    });
    view! {
        <Title text=DOCUMENT_TITLE/>
        <Meta name="description" content="AI-powered social media monitoring and analytics platform"/>
        <Router>
            <Routes>
                <Route path=HOME_PATH view=HomePage/>
                <Route path=FORGOT_PASSWORD_PATH view=ForgotPasswordPage/>
                <Route path=RESET_PASSWORD_PATH view=ResetPasswordPage/>
                <Route path=VERIFY_EMAIL_PATH view=VerifyEmailPage/>
            </Routes>
        </Router>
    }
}

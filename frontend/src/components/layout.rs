use leptos::*;

pub const LOGO_PATH: &str = "/moskal-logo.png";

/// Centered card used by every account page: logo, heading, optional
/// subheading, then the flow-specific body.
#[component]
pub fn AuthLayout(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<MaybeSignal<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div class="flex flex-col items-center">
                    <img src=LOGO_PATH alt="Moskal" class="h-12 w-auto" />
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">{title}</h2>
                    {subtitle
                        .map(|text| {
                            view! {
                                <p class="mt-2 text-center text-sm text-fg-muted">
                                    {move || text.get()}
                                </p>
                            }
                        })}
                </div>
                <div class="rounded-lg bg-surface-elevated px-6 py-8 shadow-sm border border-border">
                    {children()}
                </div>
            </div>
        </div>
    }
}

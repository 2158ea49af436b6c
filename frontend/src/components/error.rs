use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertTone {
    Error,
    Notice,
}

impl AlertTone {
    fn classes(&self) -> &'static str {
        match self {
            AlertTone::Error => {
                "bg-status-error-bg border border-status-error-border text-status-error-text"
            }
            AlertTone::Notice => {
                "bg-status-warning-bg border border-status-warning-border text-status-warning-text"
            }
        }
    }
}

/// Alert shown above a form while `message` holds text.
#[component]
pub fn InlineAlert(
    #[prop(into)] message: Signal<Option<String>>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(default = AlertTone::Error)] tone: AlertTone,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some() fallback=|| ()>
            <div
                class=format!("px-4 py-3 rounded space-y-1 my-2 {}", tone.classes())
                role="alert"
            >
                {title.clone().map(|t| view! { <div class="font-bold">{t}</div> })}
                <div class="text-sm">{move || message.get().unwrap_or_default()}</div>
            </div>
        </Show>
    }
}

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Success,
    Warning,
    Error,
}

impl StatusTone {
    fn badge_classes(&self) -> &'static str {
        match self {
            StatusTone::Success => "bg-status-success-bg text-status-success-text",
            StatusTone::Warning => "bg-status-warning-bg text-status-warning-text",
            StatusTone::Error => "bg-status-error-bg text-status-error-text",
        }
    }

    fn icon_path(&self) -> &'static str {
        match self {
            StatusTone::Success => "M5 13l4 4L19 7",
            StatusTone::Warning => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            StatusTone::Error => "M6 18L18 6M6 6l12 12",
        }
    }
}

/// Terminal view of a flow: icon badge, heading, lead text, then `children`
/// (explanation and recovery actions).
#[component]
pub fn StatusCard(
    tone: StatusTone,
    #[prop(into)] title: String,
    #[prop(optional, into)] lead: Option<String>,
    #[prop(optional, into)] detail: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center space-y-6 text-center">
            <div class=format!("flex h-16 w-16 items-center justify-center rounded-full {}", tone.badge_classes())>
                <svg
                    class="h-8 w-8"
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d=tone.icon_path()></path>
                </svg>
            </div>
            <div class="space-y-2">
                <h3 class="text-xl font-semibold text-fg">{title}</h3>
                {lead.map(|text| view! { <p class="text-fg-muted">{text}</p> })}
                {detail.map(|text| view! { <p class="font-medium text-fg">{text}</p> })}
            </div>
            <div class="w-full space-y-3 text-sm text-fg-muted">{children()}</div>
        </div>
    }
}

use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "border border-border bg-surface-elevated hover:bg-surface-muted text-fg",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex w-full items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed";

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || format!("{} {} {}", BASE_CLASSES, variant.classes(), class)
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

/// Anchor styled like [`Button`]. Links may leave the app (login, support).
#[component]
pub fn LinkButton(
    #[prop(into)] href: MaybeSignal<String>,
    #[prop(optional)] variant: ButtonVariant,
    children: Children,
) -> impl IntoView {
    view! {
        <a href=move || href.get() class=format!("{} {}", BASE_CLASSES, variant.classes())>
            {children()}
        </a>
    }
}

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center gap-3 py-8" role="status">
            <div class="h-10 w-10 animate-spin rounded-full border-4 border-action-primary-bg border-t-transparent"></div>
            {label.map(|text| view! { <p class="text-sm text-fg-muted">{text}</p> })}
        </div>
    }
}

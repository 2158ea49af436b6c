use leptos::*;

/// Password input with a show/hide toggle. Never trims what the user types.
#[component]
pub fn PasswordField(
    #[prop(into)] id: String,
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let visible = create_rw_signal(false);
    let input_id = id.clone();

    view! {
        <div class="space-y-1">
            <label for=id class="block text-sm font-medium text-fg">
                {label}
            </label>
            <div class="relative">
                <input
                    id=input_id
                    type=move || if visible.get() { "text" } else { "password" }
                    autocomplete="new-password"
                    required
                    class="appearance-none rounded-md block w-full px-3 py-2 pr-16 border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text focus:outline-none focus:ring-2 focus:ring-action-primary-focus sm:text-sm"
                    placeholder=placeholder.unwrap_or_default()
                    disabled=move || disabled.get()
                    prop:value=value
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-xs font-medium text-link hover:text-link-hover"
                    aria-pressed=move || visible.get().to_string()
                    on:click=move |_| visible.update(|shown| *shown = !*shown)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}

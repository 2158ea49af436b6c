use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="min-h-screen flex flex-col items-center justify-center bg-surface p-24">
            <h1 class="mb-4 text-4xl font-bold text-fg">"Welcome to Moskal"</h1>
            <p class="text-xl text-fg-muted">"AI Powered Social Media Monitoring"</p>
        </main>
    }
}

use crate::config::{self, AppConfig};
use leptos::*;

pub fn use_config() -> (ReadSignal<AppConfig>, WriteSignal<AppConfig>) {
    match use_context::<(ReadSignal<AppConfig>, WriteSignal<AppConfig>)>() {
        Some(ctx) => ctx,
        None => {
            let (read, write) = create_signal(config::current());
            provide_context((read, write));
            (read, write)
        }
    }
}

/// Waits for the runtime config (env.js or `config.json`) and publishes it.
pub async fn refresh_config(set_config: WriteSignal<AppConfig>) {
    let resolved = config::await_config().await;
    log::info!("runtime config ready (api base {})", resolved.api_base_url);
    set_config.set(resolved);
}

/// One configured link, tracking later config updates.
pub fn config_link(pick: fn(&AppConfig) -> &str) -> Signal<String> {
    let (config, _) = use_config();
    Signal::derive(move || config.with(|c| pick(c).to_string()))
}

pub mod api;
mod components;
pub mod config;
pub mod flow;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point: logging, then the router.
pub fn run() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("logger init failed: {}", err).into());
    }
    log::info!("starting Moskal account pages");

    router::mount_app();
}

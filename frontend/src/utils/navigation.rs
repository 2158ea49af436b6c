/// Sends the browser to `url` (same-origin path or absolute URL).
#[cfg(target_arch = "wasm32")]
pub fn navigate_to(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("no window to navigate with");
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        log::error!("navigation to {} failed: {:?}", url, err);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn navigate_to(url: &str) {
    log::debug!("navigation to {} skipped off-browser", url);
}

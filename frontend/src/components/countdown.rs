use crate::flow::{Countdown, Tick};
use leptos::*;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

/// Countdown line that sends the browser to `target` once the
/// counter hits zero. The timer stops when the component is unmounted.
#[component]
pub fn RedirectNotice(
    #[prop(into)] target: MaybeSignal<String>,
    #[prop(optional)] countdown: Countdown,
) -> impl IntoView {
    let countdown = create_rw_signal(countdown);
    let cancelled = Rc::new(Cell::new(false));

    {
        let cancelled = cancelled.clone();
        on_cleanup(move || cancelled.set(true));
    }

    create_effect(move |started: Option<bool>| {
        if started.is_none() {
            start_timer(countdown, target.clone(), cancelled.clone());
        }
        true
    });

    view! {
        <p class="text-sm text-fg-muted" aria-live="polite">
            {move || redirect_message(countdown.get().remaining())}
        </p>
    }
}

/// Ticks `countdown` after every `sleep` until it redirects or `cancelled`
/// is set. `redirect` runs at most once.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub async fn drive_countdown<S, Fut>(
    countdown: RwSignal<Countdown>,
    cancelled: Rc<Cell<bool>>,
    mut sleep: S,
    redirect: impl FnOnce(),
) where
    S: FnMut() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        sleep().await;
        if cancelled.get() {
            log::debug!("redirect countdown cancelled");
            return;
        }
        let mut next = countdown.get_untracked();
        let tick = next.tick();
        countdown.set(next);
        match tick {
            Tick::Remaining(_) => continue,
            Tick::Redirect => {
                redirect();
                return;
            }
            Tick::Finished => return,
        }
    }
}

pub fn redirect_message(remaining: u32) -> String {
    match remaining {
        0 => "Redirecting to the login page...".to_string(),
        1 => "You will be redirected to the login page in 1 second.".to_string(),
        n => format!("You will be redirected to the login page in {} seconds.", n),
    }
}

#[cfg(target_arch = "wasm32")]
fn start_timer(countdown: RwSignal<Countdown>, target: MaybeSignal<String>, cancelled: Rc<Cell<bool>>) {
    use gloo_timers::future::TimeoutFuture;

    spawn_local(drive_countdown(
        countdown,
        cancelled,
        || TimeoutFuture::new(1_000),
        move || crate::utils::navigation::navigate_to(&target.get_untracked()),
    ));
}

#[cfg(not(target_arch = "wasm32"))]
fn start_timer(countdown: RwSignal<Countdown>, target: MaybeSignal<String>, _cancelled: Rc<Cell<bool>>) {
    log::debug!(
        "redirect to {} in {}s not scheduled off-browser",
        target.get_untracked(),
        countdown.get_untracked().remaining()
    );
}

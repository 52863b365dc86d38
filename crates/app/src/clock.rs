use chrono::NaiveDateTime;
use dioxus::prelude::*;

/// Local wall-clock time, refreshed every `interval_ms`.
///
/// The refresh task belongs to the calling component's scope and stops when
/// that component unmounts.
pub fn use_clock(interval_ms: u64) -> Signal<NaiveDateTime> {
    let mut now = use_signal(local_now);

    use_hook(move || {
        spawn(async move {
            loop {
                tick(interval_ms).await;
                now.set(local_now());
            }
        });
    });

    now
}

fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(feature = "web")]
async fn tick(interval_ms: u64) {
    let ms = u32::try_from(interval_ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(all(feature = "desktop", not(feature = "web")))]
async fn tick(interval_ms: u64) {
    tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
}

// Headless builds (SSR tests) have no timer; the clock shows its first value.
#[cfg(not(any(feature = "web", feature = "desktop")))]
async fn tick(_interval_ms: u64) {
    std::future::pending::<()>().await;
}

use chrono::Local;
use dioxus::prelude::*;
use shared_ui::format_clock;
use std::cell::Cell;
use std::rc::Rc;

/// Starts a browser interval. The first message is the interval id, every
/// later one is a tick.
fn interval_script(interval_secs: u64) -> String {
    let millis = interval_secs.max(1) * 1000;
    format!("const id = setInterval(() => dioxus.send(0), {millis});\ndioxus.send(id);")
}

fn clear_script(id: i64) -> String {
    format!("clearInterval({id});")
}

/// Local wall-clock time, refreshed every `interval_secs`. The browser
/// interval is cleared when the calling component unmounts.
pub fn use_clock(interval_secs: u64) -> Signal<String> {
    let mut now = use_signal(|| format_clock(&Local::now()));
    let interval: Rc<Cell<Option<i64>>> = use_hook(|| Rc::new(Cell::new(None)));

    {
        let interval = interval.clone();
        use_drop(move || {
            if let Some(id) = interval.take() {
                document::eval(&clear_script(id));
            }
        });
    }

    use_future(move || {
        let interval = interval.clone();
        async move {
            let mut ticks = document::eval(&interval_script(interval_secs));
            match ticks.recv::<i64>().await {
                Ok(id) => interval.set(Some(id)),
                Err(e) => {
                    tracing::debug!(error = ?e, "clock interval unavailable");
                    return;
                }
            }
            while ticks.recv::<u8>().await.is_ok() {
                now.set(format_clock(&Local::now()));
            }
        }
    });

    now
}

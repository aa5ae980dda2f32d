use chrono::{DateTime, Local};
use gloo_timers::callback::Interval;
use shared::constants::CLOCK_INTERVAL_MS;
use yew::prelude::*;

/// Wall clock, re-sampled every minute so time-of-day changes show up without input.
#[hook]
pub fn use_clock() -> UseStateHandle<DateTime<Local>> {
    let now = use_state(Local::now);

    {
        let now = now.clone();
        use_effect_with((), move |_| {
            let interval = Interval::new(CLOCK_INTERVAL_MS, move || now.set(Local::now()));

            move || {
                drop(interval);
            }
        });
    }

    now
}

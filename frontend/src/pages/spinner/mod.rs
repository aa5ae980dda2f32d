mod chime;
mod wheel_canvas;
mod wheel_utils;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Local, Timelike};
use shared::shared_wheel_game::SpinPlan;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::{AdminPanel, GradientBackground, LootModal};
use crate::hooks::use_clock;
use crate::state::{SpinnerAction, SpinnerState};
use crate::styles;

use wheel_canvas::{interpolate_rotation, WheelCanvas};
use wheel_utils::{format_clock, mode_icon, LockOverlay, ResultDisplay, SpinButton, WheelTabs};

const DEFAULT_GRADIENT: &str = "from-gray-800 to-gray-900";

/// Plays `plan` on animation frames, then reports the wheel id once.
fn animate_spin(plan: SpinPlan, rotation: UseStateHandle<Option<f64>>, on_done: Callback<String>) {
    let start_time = js_sys::Date::now();
    let duration = plan.duration_ms as f64;

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let elapsed = js_sys::Date::now() - start_time;
        let progress = (elapsed / duration).min(1.0);

        if progress < 1.0 {
            rotation.set(Some(interpolate_rotation(
                plan.from_rotation,
                plan.to_rotation,
                progress,
            )));
            if let Some(window) = web_sys::window() {
                if let Some(callback) = f.borrow().as_ref() {
                    let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
                }
            }
        } else {
            // Animation complete; only now is the reward committed
            rotation.set(None);
            chime::play();
            on_done.emit(plan.wheel_id.clone());
            // Drop the frame callback so it no longer holds itself alive
            let _ = f.borrow_mut().take();
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = web_sys::window() {
        if let Some(callback) = g.borrow().as_ref() {
            let _ = window.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }
}

#[function_component(SpinnerPage)]
pub fn spinner_page() -> Html {
    let clock = use_clock();
    let state = use_reducer(|| SpinnerState::load(Local::now().hour()));
    let show_loot = use_state(|| false);
    let show_admin = use_state(|| false);
    // Some(rotation) while an animation is playing
    let animated_rotation = use_state(|| None::<f64>);

    // Feed the clock into the session
    {
        let state = state.clone();
        use_effect_with(clock.hour(), move |hour| {
            state.dispatch(SpinnerAction::Tick(*hour));
            || ()
        });
    }

    let session = &state.session;
    let selected = session.selected().to_string();
    let pending = session.pending_plan(&selected).cloned();

    // Start the animation whenever a new spin is planned
    {
        let state = state.clone();
        let animated_rotation = animated_rotation.clone();
        use_effect_with(pending, move |pending| {
            if let Some(plan) = pending.clone() {
                let on_done = Callback::from(move |wheel_id: String| {
                    state.dispatch(SpinnerAction::SpinFinished(wheel_id));
                });
                animate_spin(plan, animated_rotation, on_done);
            }
            || ()
        });
    }

    let availability = session.availability();
    let is_spinning = session.is_spinning(&selected);
    let wheel = session.selected_wheel().cloned();
    let rotation = (*animated_rotation).unwrap_or_else(|| session.rotation(&selected));
    let gradient = wheel
        .as_ref()
        .map(|wheel| wheel.theme.gradient.clone())
        .unwrap_or_else(|| DEFAULT_GRADIENT.to_string());

    let on_select = {
        let state = state.clone();
        Callback::from(move |wheel_id: String| state.dispatch(SpinnerAction::Select(wheel_id)))
    };
    let on_spin = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(SpinnerAction::Spin))
    };
    let on_redeem = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(SpinnerAction::Redeem(index)))
    };
    let on_toggle_bypass = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SpinnerAction::ToggleBypass))
    };
    let on_toggle_task = {
        let state = state.clone();
        Callback::from(move |_: ()| state.dispatch(SpinnerAction::ToggleSpecialTask))
    };
    let open_loot = {
        let show_loot = show_loot.clone();
        Callback::from(move |_: MouseEvent| show_loot.set(true))
    };
    let close_loot = {
        let show_loot = show_loot.clone();
        Callback::from(move |_: ()| show_loot.set(false))
    };
    let toggle_admin = {
        let show_admin = show_admin.clone();
        Callback::from(move |_: MouseEvent| show_admin.set(!*show_admin))
    };

    let inventory_count = session.inventory().len();

    html! {
        <GradientBackground gradient={gradient}>
            <header class={styles::HEADER}>
                <div class="flex items-center gap-2">
                    <span class="text-2xl">{mode_icon(availability.mode)}</span>
                    <span class="text-xl font-bold font-mono">{format_clock(&clock)}</span>
                </div>
                <button onclick={open_loot} class={styles::LOOT_BUTTON}>
                    <span class="text-2xl">{"🎁"}</span>
                    if inventory_count > 0 {
                        <span class={styles::BADGE}>{inventory_count}</span>
                    }
                </button>
            </header>

            <main class="flex-1 flex flex-col items-center justify-center relative p-4 gap-8">
                <WheelTabs
                    wheels={session.catalog().wheels().to_vec()}
                    selected={selected.clone()}
                    reward_wheel={session.catalog().schedule().reward_wheel.clone()}
                    special_task_complete={session.special_task_complete()}
                    on_select={on_select}
                />

                if let Some(error) = &state.error {
                    <div class={classes!(styles::ALERT_ERROR, "p-4")}>{error}</div>
                }

                if let Some(wheel) = wheel {
                    <>
                    <h1 class={styles::WHEEL_TITLE}>{&wheel.name}</h1>
                    <div class="relative">
                        if let Some(reason) = availability.lock {
                            <LockOverlay message={reason.message().to_string()} />
                        }
                        <WheelCanvas
                            items={wheel.items.clone()}
                            rotation={rotation}
                            is_spinning={is_spinning}
                        />
                    </div>
                    <SpinButton
                        is_spinning={is_spinning}
                        is_locked={availability.is_locked()}
                        primary={wheel.theme.primary.clone()}
                        onclick={on_spin}
                    />
                    <ResultDisplay reward={state.last_reward.clone()} />
                    </>
                }
            </main>

            <div class="fixed bottom-4 left-4 z-40">
                <button onclick={toggle_admin} class={styles::BUTTON_ICON}>{"⚙️"}</button>
                if *show_admin {
                    <AdminPanel
                        hour={session.hour()}
                        bypass={session.bypass()}
                        special_task_complete={session.special_task_complete()}
                        on_toggle_bypass={on_toggle_bypass}
                        on_toggle_task={on_toggle_task}
                    />
                }
            </div>

            if *show_loot {
                <LootModal
                    inventory={session.inventory().clone()}
                    catalog={session.catalog().clone()}
                    on_redeem={on_redeem}
                    on_close={close_loot}
                />
            }
        </GradientBackground>
    }
}

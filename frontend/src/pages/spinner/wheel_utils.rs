use chrono::{DateTime, Local};
use shared::availability::TimeMode;
use shared::catalog::Wheel;
use shared::inventory::SpinRecord;
use yew::prelude::*;

// Clock shown in the header
pub fn format_clock(now: &DateTime<Local>) -> String {
    now.format("%H:%M").to_string()
}

pub fn mode_icon(mode: TimeMode) -> &'static str {
    match mode {
        TimeMode::Morning => "☀️",
        TimeMode::Evening => "🌙",
        TimeMode::Sleep => "💤",
    }
}

pub fn spin_button_text(is_spinning: bool, is_locked: bool) -> &'static str {
    if is_spinning {
        "Spinning..."
    } else if is_locked {
        "Locked"
    } else {
        "SPIN!"
    }
}

#[derive(Properties, PartialEq)]
pub struct WheelTabsProps {
    pub wheels: Vec<Wheel>,
    pub selected: String,
    pub reward_wheel: String,
    pub special_task_complete: bool,
    pub on_select: Callback<String>,
}

#[function_component(WheelTabs)]
pub fn wheel_tabs(props: &WheelTabsProps) -> Html {
    html! {
        <div class="flex gap-2 p-1 bg-black/20 rounded-full backdrop-blur-md">
            { for props.wheels.iter().map(|wheel| {
                let is_selected = wheel.id == props.selected;
                let show_lock = wheel.id == props.reward_wheel && !props.special_task_complete;
                let onclick = {
                    let on_select = props.on_select.clone();
                    let wheel_id = wheel.id.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(wheel_id.clone()))
                };
                html! {
                    <button
                        key={wheel.id.clone()}
                        {onclick}
                        class={classes!(
                            "px-4",
                            "py-2",
                            "rounded-full",
                            "text-sm",
                            "font-bold",
                            "transition-all",
                            if is_selected {
                                "bg-white text-gray-900 shadow-lg scale-105"
                            } else {
                                "text-white/70 hover:bg-white/10"
                            }
                        )}
                    >
                        {&wheel.name}
                        if show_lock {
                            <span class="ml-1 text-xs">{"🔒"}</span>
                        }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LockOverlayProps {
    pub message: String,
}

#[function_component(LockOverlay)]
pub fn lock_overlay(props: &LockOverlayProps) -> Html {
    html! {
        <div class="absolute inset-0 z-30 flex flex-col items-center justify-center bg-black/60 backdrop-blur-sm rounded-full">
            <span class="text-6xl mb-4 opacity-50">{"🔒"}</span>
            <p class="text-xl font-bold text-center px-8">{&props.message}</p>
        </div>
    }
}

// Spin button component
#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub is_locked: bool,
    /// Theme class for the active button.
    pub primary: String,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let is_disabled = props.is_spinning || props.is_locked;

    let button_class = if props.is_locked {
        "bg-gray-400 cursor-not-allowed opacity-50".to_string()
    } else if props.is_spinning {
        format!("{} opacity-80 cursor-wait text-white", props.primary)
    } else {
        format!("{} text-white hover:brightness-110", props.primary)
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={is_disabled}
            class={classes!(
                "px-8",
                "py-4",
                "rounded-full",
                "text-2xl",
                "font-bold",
                "shadow-xl",
                "transition-all",
                "transform",
                "hover:scale-105",
                "active:scale-95",
                button_class
            )}
        >
            {spin_button_text(props.is_spinning, props.is_locked)}
        </button>
    }
}

// Result display component
#[derive(Properties, PartialEq)]
pub struct ResultDisplayProps {
    pub reward: Option<SpinRecord>,
}

#[function_component(ResultDisplay)]
pub fn result_display(props: &ResultDisplayProps) -> Html {
    let Some(reward) = &props.reward else {
        return html! {};
    };

    html! {
        <div class="mt-6 flex items-center justify-center">
            <div
                class="px-6 py-4 rounded-xl bg-white/90 text-gray-900 font-bold text-xl shadow-lg border-4 animate-bounce"
                style={format!("border-color: {};", reward.color.as_deref().unwrap_or("#ffffff"))}
            >
                {format!("You won: {}! 🎉", reward.label)}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock() {
        let now = Local.with_ymd_and_hms(2024, 6, 1, 7, 5, 0).unwrap();
        assert_eq!(format_clock(&now), "07:05");
    }

    #[test]
    fn test_spin_button_text() {
        assert_eq!(spin_button_text(true, true), "Spinning...");
        assert_eq!(spin_button_text(false, true), "Locked");
        assert_eq!(spin_button_text(false, false), "SPIN!");
    }
}

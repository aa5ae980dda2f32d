use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct AdminPanelProps {
    pub hour: u32,
    pub bypass: bool,
    pub special_task_complete: bool,
    pub on_toggle_bypass: Callback<()>,
    pub on_toggle_task: Callback<()>,
}

/// Debug corner: bypass the clock and flip the special task flag by hand.
#[function_component(AdminPanel)]
pub fn admin_panel(props: &AdminPanelProps) -> Html {
    let on_bypass = {
        let cb = props.on_toggle_bypass.clone();
        Callback::from(move |_: Event| cb.emit(()))
    };
    let on_task = {
        let cb = props.on_toggle_task.clone();
        Callback::from(move |_: Event| cb.emit(()))
    };

    html! {
        <div class={styles::ADMIN_PANEL}>
            <p>{format!("Hour: {}", props.hour)}</p>
            <label class="flex items-center gap-2 mt-2 cursor-pointer">
                <input type="checkbox" checked={props.bypass} onchange={on_bypass} />
                {"🧪 Test Mode (bypass time)"}
            </label>
            <label class="flex items-center gap-2 mt-2 cursor-pointer">
                <input type="checkbox" checked={props.special_task_complete} onchange={on_task} />
                {"Special Task Complete"}
            </label>
            <div class="mt-2 text-gray-400">
                {"Use this to test spinners at any time."}
            </div>
        </div>
    }
}

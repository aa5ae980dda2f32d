pub mod components;
pub mod hooks;
pub mod pages;
pub mod state;
pub mod storage;
pub mod styles;

use yew::prelude::*;
use crate::pages::spinner::SpinnerPage;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SpinnerPage />
    }
}

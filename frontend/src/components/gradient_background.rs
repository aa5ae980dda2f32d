use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct GradientBackgroundProps {
    /// Tailwind gradient stops taken from the selected wheel's theme.
    pub gradient: String,
    #[prop_or_default]
    pub children: Html,
}

/// Full-page background that fades between wheel themes.
#[function_component(GradientBackground)]
pub fn gradient_background(props: &GradientBackgroundProps) -> Html {
    html! {
        <div class={classes!(
            "min-h-screen",
            "bg-gradient-to-br",
            "transition-colors",
            "duration-1000",
            "flex",
            "flex-col",
            "font-sans",
            "text-white",
            "overflow-hidden",
            props.gradient.clone()
        )}>
            {props.children.clone()}
        </div>
    }
}

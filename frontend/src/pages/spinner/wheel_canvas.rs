use std::f64::consts::PI;

use shared::catalog::RewardItem;
use shared::constants::POINTER_ANGLE_DEGREES;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const FALLBACK_COLORS: [&str; 5] = ["#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8"];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub items: Vec<RewardItem>,
    /// Cumulative rotation in degrees, clockwise.
    pub rotation: f64,
    pub is_spinning: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let items = props.items.clone();

        use_effect_with(
            (items, props.rotation, props.is_spinning),
            move |(items, rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(&canvas, &context, items, *rotation, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width="400"
            height="400"
            class="w-80 h-80 sm:w-96 sm:h-96 rounded-full"
            style={if props.is_spinning {
                "filter: drop-shadow(0px 5px 20px rgba(255, 255, 255, 0.4));"
            } else {
                "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.3));"
            }}
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    items: &[RewardItem],
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 12.0;

    context.clear_rect(0.0, 0.0, width, height);

    if items.is_empty() {
        return;
    }
    let slice = 2.0 * PI / items.len() as f64;

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation.to_radians());

    for (index, item) in items.iter().enumerate() {
        let start = index as f64 * slice;
        let end = start + slice;

        context.begin_path();
        context.set_fill_style_str(slice_color(item, index));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("#ffffff");
        context.set_line_width(2.0);
        context.stroke();

        // Label along the slice's center line
        context.save();
        let _ = context.rotate(start + slice / 2.0);
        context.set_fill_style_str("#1f2937");
        context.set_font("bold 16px sans-serif");
        context.set_text_align("center");
        context.set_text_baseline("middle");
        let _ = context.fill_text(&item.label, radius * 0.62, 0.0);
        context.restore();
    }
    context.restore();

    // Outer rim
    context.begin_path();
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(8.0);
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.stroke();

    // Center cap
    context.begin_path();
    context.set_fill_style_str(if is_spinning { "#e5e7eb" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, radius * 0.16, 0.0, 2.0 * PI);
    context.fill();

    draw_pointer(context, center_x, center_y, radius);
}

/// Fixed marker at the pointer angle; it does not rotate with the wheel.
fn draw_pointer(context: &CanvasRenderingContext2d, center_x: f64, center_y: f64, radius: f64) {
    let angle = POINTER_ANGLE_DEGREES.to_radians();
    let tip_x = center_x + (radius - 18.0) * angle.cos();
    let tip_y = center_y + (radius - 18.0) * angle.sin();
    let base = radius + 10.0;
    let spread = 0.08;

    context.begin_path();
    context.set_fill_style_str("#ef4444");
    context.move_to(tip_x, tip_y);
    context.line_to(
        center_x + base * (angle - spread).cos(),
        center_y + base * (angle - spread).sin(),
    );
    context.line_to(
        center_x + base * (angle + spread).cos(),
        center_y + base * (angle + spread).sin(),
    );
    context.close_path();
    context.fill();
    context.set_stroke_style_str("#ffffff");
    context.set_line_width(2.0);
    context.stroke();
}

fn slice_color(item: &RewardItem, index: usize) -> &str {
    item.color
        .as_deref()
        .unwrap_or(FALLBACK_COLORS[index % FALLBACK_COLORS.len()])
}

// Easing function for smooth deceleration
pub fn ease_out_quart(t: f64) -> f64 {
    1.0 - (1.0 - t.clamp(0.0, 1.0)).powi(4)
}

/// Rotation shown `progress` of the way through a spin.
pub fn interpolate_rotation(from: f64, to: f64, progress: f64) -> f64 {
    from + (to - from) * ease_out_quart(progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        assert_eq!(ease_out_quart(2.0), 1.0);
        assert!(ease_out_quart(0.5) > 0.5);
    }

    #[test]
    fn test_interpolation_moves_forward() {
        let mut last = 100.0;
        for step in 1..=20 {
            let value = interpolate_rotation(100.0, 2000.0, step as f64 / 20.0);
            assert!(value >= last);
            last = value;
        }
        assert_eq!(last, 2000.0);
    }

    #[test]
    fn test_fallback_colors() {
        let plain = RewardItem::new("x", "X", 1.0, None);
        assert_eq!(slice_color(&plain, 6), "#4ECDC4");
        let colored = RewardItem::new("y", "Y", 1.0, Some("#000000"));
        assert_eq!(slice_color(&colored, 0), "#000000");
    }
}

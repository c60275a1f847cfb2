//! Maps an array snapshot to bars on the 2D canvas.

use crate::defaults::{BAR_WIDTH, CANVAS_HEIGHT, CANVAS_WIDTH};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const HUE_BASE: f64 = 280.0;
const HUE_SPAN: f64 = 60.0;

/// One bar in canvas pixel coordinates, origin top-left.
#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: String,
}

/// Purple for short bars shading to pink for full-height ones.
pub fn bar_color(value: u32) -> String {
    let hue = HUE_BASE + (value as f64 / CANVAS_HEIGHT as f64) * HUE_SPAN;
    format!("hsl({}, 100%, 50%)", hue)
}

/// Bars are anchored to the bottom edge with a one pixel gap between them.
pub fn bars(values: &[u32]) -> impl Iterator<Item = Bar> + '_ {
    values.iter().enumerate().map(|(index, &value)| Bar {
        x: (index as u32 * BAR_WIDTH) as f64,
        y: CANVAS_HEIGHT as f64 - value as f64,
        width: (BAR_WIDTH - 1) as f64,
        height: value as f64,
        color: bar_color(value),
    })
}

/// Clear the canvas and draw one bar per element.
///
/// Silently does nothing if the canvas is missing or has no 2D context.
pub fn draw(canvas: Option<&HtmlCanvasElement>, values: &[u32]) {
    let Some(ctx) = canvas.and_then(context_2d) else {
        return;
    };

    ctx.clear_rect(0.0, 0.0, CANVAS_WIDTH as f64, CANVAS_HEIGHT as f64);
    for bar in bars(values) {
        ctx.set_fill_style_str(&bar.color);
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_span_the_fixed_hue_range() {
        assert_eq!(bar_color(0), "hsl(280, 100%, 50%)");
        assert_eq!(bar_color(200), "hsl(310, 100%, 50%)");
        assert_eq!(bar_color(CANVAS_HEIGHT), "hsl(340, 100%, 50%)");
    }

    #[test]
    fn bars_sit_on_the_bottom_edge() {
        let drawn: Vec<Bar> = bars(&[0, 150, 399]).collect();
        assert_eq!(drawn.len(), 3);

        assert_eq!(drawn[0].height, 0.0);
        assert_eq!(drawn[0].y, 400.0);

        assert_eq!(drawn[1].x, 8.0);
        assert_eq!(drawn[1].y, 250.0);
        assert_eq!(drawn[1].height, 150.0);
        assert_eq!(drawn[1].width, 7.0);

        assert_eq!(drawn[2].x, 16.0);
        assert_eq!(drawn[2].y + drawn[2].height, CANVAS_HEIGHT as f64);
    }

    #[test]
    fn widest_array_fills_the_canvas() {
        let values = vec![10; crate::defaults::MAX_ARRAY_SIZE];
        let last = bars(&values).last().unwrap();
        assert_eq!(last.x + BAR_WIDTH as f64, CANVAS_WIDTH as f64);
    }

    #[test]
    fn drawing_without_a_canvas_is_a_no_op() {
        draw(None, &[1, 2, 3]);
    }
}

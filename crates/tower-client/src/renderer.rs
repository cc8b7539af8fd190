//! Canvas 2D drawing for hotspot highlights.

use tower_core::overlay::HIGHLIGHT_ALPHA;
use tower_core::{Highlight, Point, Rect, Shape};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const OUTLINE_COLOR: &str = "black";
const OUTLINE_WIDTH: f64 = 1.0;

pub fn clear(ctx: &CanvasRenderingContext2d, canvas: &HtmlCanvasElement) {
    ctx.clear_rect(
        0.0,
        0.0,
        f64::from(canvas.width()),
        f64::from(canvas.height()),
    );
}

/// Clears the surface and draws `highlight` alone.
pub fn draw_highlight(
    ctx: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    highlight: &Highlight,
) {
    clear(ctx, canvas);
    match &highlight.shape {
        Shape::Rect(rect) => draw_rect(ctx, rect, highlight.color),
        Shape::Polygon { points } => draw_polygon(ctx, points, highlight.color),
    }
}

fn draw_rect(ctx: &CanvasRenderingContext2d, rect: &Rect, color: &str) {
    ctx.save();
    if rect.rotation != 0.0 {
        let center = rect.center();
        let _ = ctx.translate(center.x, center.y);
        let _ = ctx.rotate(rect.rotation);
        let _ = ctx.translate(-center.x, -center.y);
    }

    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(HIGHLIGHT_ALPHA);
    ctx.fill_rect(rect.min.x, rect.min.y, rect.width, rect.height);

    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(OUTLINE_COLOR);
    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.stroke_rect(rect.min.x, rect.min.y, rect.width, rect.height);
    ctx.restore();
}

fn draw_polygon(ctx: &CanvasRenderingContext2d, points: &[Point], color: &str) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };

    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();

    ctx.set_fill_style_str(color);
    ctx.set_global_alpha(HIGHLIGHT_ALPHA);
    ctx.fill();

    ctx.set_global_alpha(1.0);
    ctx.set_stroke_style_str(OUTLINE_COLOR);
    ctx.set_line_width(OUTLINE_WIDTH);
    ctx.stroke();
}

//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::font::FontDescriptor;
use super::shape::Shape;
use crate::util;

/// Fraction of the box width covered by an arrow's shaft.
const ARROW_SHAFT_FRACTION: f64 = 0.7;
/// Arrowhead size as a fraction of the smaller box dimension.
const ARROW_HEAD_FRACTION: f64 = 0.2;

/// Repaints the entire surface from scratch.
///
/// Clears everything previously painted, then draws each shape in sequence
/// order (later shapes visually on top). This is the single render entry
/// point: any shape-list change and any surface-size change is handled by
/// calling it again. No state is retained between calls.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `shapes` - Slice of shapes to render, bottom layer first
/// * `font` - Font used for text shapes
pub fn render_canvas(ctx: &cairo::Context, shapes: &[Shape], font: &FontDescriptor) {
    clear_surface(ctx);
    render_shapes(ctx, shapes, font);
}

/// Clears the whole surface to full transparency.
pub fn clear_surface(ctx: &cairo::Context) {
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    ctx.set_operator(cairo::Operator::Over);
}

/// Renders all shapes in a collection to a Cairo context.
pub fn render_shapes(ctx: &cairo::Context, shapes: &[Shape], font: &FontDescriptor) {
    for shape in shapes {
        render_shape(ctx, shape, font);
    }
}

/// Renders a single shape to a Cairo context.
///
/// Dispatches to the appropriate internal rendering function based on shape
/// type. Box shapes are normalized here, so in-progress drags with negative
/// width/height paint the same box the finished shape would.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape, font: &FontDescriptor) {
    match shape {
        Shape::Pen {
            points,
            color,
            stroke_width,
            ..
        } => {
            render_pen(ctx, points, *color, *stroke_width);
        }
        Shape::Rect {
            x,
            y,
            width,
            height,
            color,
            stroke_width,
            fill_color,
            rotation,
            ..
        } => {
            render_rect(
                ctx,
                *x,
                *y,
                *width,
                *height,
                *color,
                *stroke_width,
                *fill_color,
                *rotation,
            );
        }
        Shape::Circle {
            x,
            y,
            width,
            height,
            color,
            stroke_width,
            fill_color,
            rotation,
            ..
        } => {
            render_circle(
                ctx,
                *x,
                *y,
                *width,
                *height,
                *color,
                *stroke_width,
                *fill_color,
                *rotation,
            );
        }
        Shape::Arrow {
            x,
            y,
            width,
            height,
            color,
            stroke_width,
            rotation,
            ..
        } => {
            render_arrow(
                ctx,
                *x,
                *y,
                *width,
                *height,
                *color,
                *stroke_width,
                *rotation,
            );
        }
        Shape::Text {
            text,
            x,
            y,
            color,
            font_size,
            ..
        } => {
            render_text(ctx, *x, *y, text, *color, *font_size, font);
        }
    }
}

/// Render a pen stroke (polyline through points)
fn render_pen(ctx: &cairo::Context, points: &[(i32, i32)], color: Color, stroke_width: u32) {
    if points.is_empty() {
        return;
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke_width as f64);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    let (x0, y0) = points[0];
    ctx.move_to(x0 as f64, y0 as f64);

    for &(x, y) in &points[1..] {
        ctx.line_to(x as f64, y as f64);
    }

    let _ = ctx.stroke();
}

/// Rotates the context about the center of a normalized box.
fn apply_rotation(ctx: &cairo::Context, x: f64, y: f64, w: f64, h: f64, rotation: f64) {
    if rotation != 0.0 {
        let cx = x + w / 2.0;
        let cy = y + h / 2.0;
        ctx.translate(cx, cy);
        ctx.rotate(rotation.to_radians());
        ctx.translate(-cx, -cy);
    }
}

/// Render a rectangle, filled first so the stroke stays visible on top
#[allow(clippy::too_many_arguments)]
fn render_rect(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    stroke_width: u32,
    fill_color: Option<Color>,
    rotation: f64,
) {
    let (x, y, w, h) = util::normalized_box(x, y, w, h);
    let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);

    ctx.save().ok();
    apply_rotation(ctx, x, y, w, h, rotation);
    ctx.set_line_join(cairo::LineJoin::Miter);
    ctx.rectangle(x, y, w, h);

    if let Some(fill) = fill_color {
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.fill_preserve();
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke_width as f64);
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Render the circle inscribed in the shape's bounding box
#[allow(clippy::too_many_arguments)]
fn render_circle(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    stroke_width: u32,
    fill_color: Option<Color>,
    rotation: f64,
) {
    let (x, y, w, h) = util::normalized_box(x, y, w, h);
    let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
    let radius = w.min(h) / 2.0;
    if radius <= 0.0 {
        return;
    }

    ctx.save().ok();
    apply_rotation(ctx, x, y, w, h, rotation);
    ctx.arc(
        x + w / 2.0,
        y + h / 2.0,
        radius,
        0.0,
        2.0 * std::f64::consts::PI,
    );

    if let Some(fill) = fill_color {
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.fill_preserve();
    }

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke_width as f64);
    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Render an arrow inside its bounding box: a shaft from the left edge to
/// 70% of the width at mid-height, plus two diagonal arrowhead segments
#[allow(clippy::too_many_arguments)]
fn render_arrow(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
    color: Color,
    stroke_width: u32,
    rotation: f64,
) {
    let (x, y, w, h) = util::normalized_box(x, y, w, h);
    let (x, y, w, h) = (x as f64, y as f64, w as f64, h as f64);
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    let mid_y = y + h / 2.0;
    let tip_x = x + w * ARROW_SHAFT_FRACTION;
    let head = w.min(h) * ARROW_HEAD_FRACTION;

    ctx.save().ok();
    apply_rotation(ctx, x, y, w, h, rotation);
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(stroke_width as f64);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);

    ctx.move_to(x, mid_y);
    ctx.line_to(tip_x, mid_y);
    ctx.line_to(tip_x - head, mid_y - head);
    ctx.move_to(tip_x, mid_y);
    ctx.line_to(tip_x - head, mid_y + head);

    let _ = ctx.stroke();
    ctx.restore().ok();
}

/// Renders text at a baseline position using Pango.
///
/// The position (x, y) is the baseline starting point of the first line;
/// Pango handles newline characters automatically.
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) {
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango measures from the top-left corner; shift so (x, y) is the
    // first line's baseline.
    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    ctx.move_to(x as f64, y as f64 - baseline);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

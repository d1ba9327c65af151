//! Canvas back-end (wasm): replay a [`Scene`] onto a 2d context.
//!
//! Each chart component owns a [`CanvasSlot`] mapping its element id to a
//! resolved canvas handle. The slot resolves lazily and caches; a resize
//! notification calls [`CanvasSlot::invalidate`] so the next paint
//! re-measures and re-applies the device-pixel-ratio scaling. Every lookup
//! failure is a silent no-op: a missing canvas must never fault the tick.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{Paint, PathSeg, Scene, Shape};

pub struct CanvasSlot {
    element_id: String,
    state: RefCell<Option<SlotState>>,
}

struct SlotState {
    ctx: CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSlot {
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            state: RefCell::new(None),
        }
    }

    /// Slot for one patient's sparkline canvas.
    pub fn sparkline(patient_id: &str) -> Self {
        Self::new(format!("spark-{patient_id}"))
    }

    /// Slot for the single detail chart canvas.
    pub fn trend() -> Self {
        Self::new("trend-canvas")
    }

    /// Forget the cached context; the next paint re-measures the element.
    pub fn invalidate(&self) {
        *self.state.borrow_mut() = None;
    }

    /// Logical size of the resolved canvas, if it is in the document.
    pub fn logical_size(&self) -> Option<(f64, f64)> {
        self.ensure_resolved();
        self.state
            .borrow()
            .as_ref()
            .map(|state| (state.width, state.height))
    }

    /// Replay `scene` onto the canvas; no-op when the element is absent.
    pub fn paint(&self, scene: &Scene) {
        self.ensure_resolved();
        let state = self.state.borrow();
        let Some(state) = state.as_ref() else {
            return;
        };

        let ctx = &state.ctx;
        ctx.clear_rect(0.0, 0.0, state.width, state.height);

        for shape in &scene.shapes {
            match shape {
                Shape::Fill { path, paint } => {
                    ctx.begin_path();
                    trace_path(ctx, path);
                    apply_fill(ctx, paint);
                    ctx.fill();
                }
                Shape::Stroke {
                    path,
                    color,
                    width,
                    dash,
                } => {
                    ctx.begin_path();
                    trace_path(ctx, path);
                    if let Some((on, off)) = dash {
                        ctx.set_line_dash(&dash_array(*on, *off)).ok();
                    }
                    ctx.set_stroke_style_str(color);
                    ctx.set_line_width(*width);
                    ctx.stroke();
                    if dash.is_some() {
                        ctx.set_line_dash(&js_sys::Array::new()).ok();
                    }
                }
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                    paint,
                } => {
                    apply_fill(ctx, paint);
                    ctx.fill_rect(*x, *y, *width, *height);
                }
                Shape::Circle { cx, cy, r, color } => {
                    ctx.begin_path();
                    ctx.arc(*cx, *cy, *r, 0.0, std::f64::consts::TAU).ok();
                    ctx.set_fill_style_str(color);
                    ctx.fill();
                }
            }
        }
    }

    /// Clear whatever is on the canvas (used when a scene builder declines
    /// to draw, so stale pixels don't linger).
    pub fn clear(&self) {
        self.ensure_resolved();
        if let Some(state) = self.state.borrow().as_ref() {
            state.ctx.clear_rect(0.0, 0.0, state.width, state.height);
        }
    }

    fn ensure_resolved(&self) {
        if self.state.borrow().is_some() {
            return;
        }
        *self.state.borrow_mut() = resolve(&self.element_id);
    }
}

/// Look up the element and prepare a context scaled for the device pixel
/// ratio, so all painting happens in logical pixels.
fn resolve(element_id: &str) -> Option<SlotState> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let canvas: HtmlCanvasElement = document.get_element_by_id(element_id)?.dyn_into().ok()?;

    let width = f64::from(canvas.offset_width());
    let height = f64::from(canvas.offset_height());
    if width <= 0.0 || height <= 0.0 {
        return None;
    }

    let dpr = match window.device_pixel_ratio() {
        ratio if ratio > 0.0 => ratio,
        _ => 1.0,
    };
    canvas.set_width((width * dpr) as u32);
    canvas.set_height((height * dpr) as u32);

    let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
    ctx.scale(dpr, dpr).ok()?;
    ctx.set_line_cap("round");
    ctx.set_line_join("round");

    Some(SlotState { ctx, width, height })
}

fn trace_path(ctx: &CanvasRenderingContext2d, segs: &[PathSeg]) {
    for seg in segs {
        match seg {
            PathSeg::MoveTo(p) => ctx.move_to(p.x, p.y),
            PathSeg::LineTo(p) => ctx.line_to(p.x, p.y),
            PathSeg::CubicTo { c1, c2, to } => {
                ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, to.x, to.y)
            }
            PathSeg::Close => ctx.close_path(),
        }
    }
}

fn apply_fill(ctx: &CanvasRenderingContext2d, paint: &Paint) {
    match paint {
        Paint::Solid(color) => ctx.set_fill_style_str(color),
        Paint::VerticalGradient { y0, y1, stops } => {
            let gradient = ctx.create_linear_gradient(0.0, *y0, 0.0, *y1);
            for stop in stops {
                gradient.add_color_stop(stop.offset as f32, &stop.color).ok();
            }
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
    }
}

fn dash_array(on: f64, off: f64) -> js_sys::Array {
    let array = js_sys::Array::new();
    array.push(&on.into());
    array.push(&off.into());
    array
}

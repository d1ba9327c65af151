//! Scene → inline SVG markup.
//!
//! Native targets show charts through this serializer (the launchers render
//! in a webview, so SVG replay matches the wasm canvas output), and the
//! snapshot exporter feeds the same markup to `usvg`/`resvg`.

use std::fmt::Write;

use super::scene::{Paint, PathSeg, Scene, Shape};

/// Serialize a scene. The viewBox uses the scene's logical size so hosts
/// can scale the element freely with CSS.
pub fn to_svg(scene: &Scene) -> String {
    let mut defs = String::new();
    let mut body = String::new();
    let mut gradient_count = 0usize;

    for shape in &scene.shapes {
        match shape {
            Shape::Fill { path, paint } => {
                let fill = paint_attr(paint, &mut defs, &mut gradient_count);
                let _ = write!(
                    body,
                    "  <path d=\"{}\" fill=\"{}\"/>\n",
                    path_data(path),
                    fill
                );
            }
            Shape::Stroke {
                path,
                color,
                width,
                dash,
            } => {
                let dash_attr = dash
                    .map(|(on, off)| format!(" stroke-dasharray=\"{on} {off}\""))
                    .unwrap_or_default();
                let _ = write!(
                    body,
                    "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"{}/>\n",
                    path_data(path),
                    color,
                    fmt_num(*width),
                    dash_attr
                );
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
                paint,
            } => {
                let fill = paint_attr(paint, &mut defs, &mut gradient_count);
                let _ = write!(
                    body,
                    "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
                    fmt_num(*x),
                    fmt_num(*y),
                    fmt_num(*width),
                    fmt_num(*height),
                    fill
                );
            }
            Shape::Circle { cx, cy, r, color } => {
                let _ = write!(
                    body,
                    "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                    fmt_num(*cx),
                    fmt_num(*cy),
                    fmt_num(*r),
                    color
                );
            }
        }
    }

    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = fmt_num(scene.width),
        h = fmt_num(scene.height)
    );
    if !defs.is_empty() {
        svg.push_str("  <defs>\n");
        svg.push_str(&defs);
        svg.push_str("  </defs>\n");
    }
    svg.push_str(&body);
    svg.push_str("</svg>");
    svg
}

fn paint_attr(paint: &Paint, defs: &mut String, gradient_count: &mut usize) -> String {
    match paint {
        Paint::Solid(color) => color.clone(),
        Paint::VerticalGradient { y0, y1, stops } => {
            let id = format!("grad{}", *gradient_count);
            *gradient_count += 1;

            let _ = write!(
                defs,
                "    <linearGradient id=\"{id}\" gradientUnits=\"userSpaceOnUse\" x1=\"0\" y1=\"{}\" x2=\"0\" y2=\"{}\">\n",
                fmt_num(*y0),
                fmt_num(*y1)
            );
            for stop in stops {
                let _ = write!(
                    defs,
                    "      <stop offset=\"{}%\" stop-color=\"{}\"/>\n",
                    fmt_num(stop.offset * 100.0),
                    stop.color
                );
            }
            defs.push_str("    </linearGradient>\n");

            format!("url(#{id})")
        }
    }
}

fn path_data(segs: &[PathSeg]) -> String {
    let mut data = String::new();
    for seg in segs {
        match seg {
            PathSeg::MoveTo(p) => {
                let _ = write!(data, "M{} {} ", fmt_num(p.x), fmt_num(p.y));
            }
            PathSeg::LineTo(p) => {
                let _ = write!(data, "L{} {} ", fmt_num(p.x), fmt_num(p.y));
            }
            PathSeg::CubicTo { c1, c2, to } => {
                let _ = write!(
                    data,
                    "C{} {} {} {} {} {} ",
                    fmt_num(c1.x),
                    fmt_num(c1.y),
                    fmt_num(c2.x),
                    fmt_num(c2.y),
                    fmt_num(to.x),
                    fmt_num(to.y)
                );
            }
            PathSeg::Close => data.push_str("Z "),
        }
    }
    data.trim_end().to_string()
}

/// Trim trailing zeros so the markup stays compact.
fn fmt_num(value: f64) -> String {
    if (value.fract()).abs() < 1e-9 {
        format!("{}", value as i64)
    } else {
        let mut s = format!("{value:.2}");
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
        s
    }
}

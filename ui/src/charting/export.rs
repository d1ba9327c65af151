//! Snapshot export: the open trend chart as PNG, its series as JSON, and a
//! stats line for the clipboard.
//!
//! On wasm the SVG markup is decoded through an offscreen image + canvas and
//! downloaded via a blob URL; natively it is rasterized with `usvg`/`resvg`
//! into a `tiny-skia` pixmap and written to the per-user data directory.

use serde::Serialize;

use crate::core::format;

use super::trend::{Period, TrendStats};

/// JSON payload for the "Export JSON" action.
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotPayload {
    pub patient: String,
    pub period: Period,
    pub samples: Vec<f64>,
    pub stats: TrendStats,
    /// Where the snapshot was captured (`web` / `native`).
    pub platform: &'static str,
}

impl SnapshotPayload {
    /// Single-line summary for the clipboard action.
    pub fn stats_line(&self) -> String {
        format!(
            "{} · {} · avg {}% · min {}% · max {}%",
            self.patient,
            self.period.title(),
            self.stats.avg,
            self.stats.min,
            self.stats.max
        )
    }
}

/// Export rendition of the trend chart: an opaque background card with the
/// chart scene inset, at a fixed logical size. `None` below two samples.
pub fn snapshot_svg(samples: &[f64], mode: crate::core::theme::ThemeMode) -> Option<String> {
    use super::scene::{Paint, Scene, Shape};
    use super::{svg, trend};

    const WIDTH: f64 = 900.0;
    const HEIGHT: f64 = 420.0;
    const INSET: f64 = 30.0;

    let chart = trend::build(samples, mode, WIDTH - INSET * 2.0, HEIGHT - INSET * 2.0)?;

    let mut scene = Scene::new(WIDTH, HEIGHT);
    let bg_stops: &[(f64, &str)] = if mode.is_dark() {
        &[(0.0, "#151923"), (1.0, "#0f1116")]
    } else {
        &[(0.0, "#ffffff"), (1.0, "#f3f5f9")]
    };
    scene.push(Shape::Rect {
        x: 0.0,
        y: 0.0,
        width: WIDTH,
        height: HEIGHT,
        paint: Paint::gradient(0.0, HEIGHT, bg_stops),
    });
    for shape in chart.shapes {
        scene.push(offset_shape(shape, INSET, INSET));
    }

    Some(svg::to_svg(&scene))
}

fn offset_shape(
    shape: super::scene::Shape,
    dx: f64,
    dy: f64,
) -> super::scene::Shape {
    use super::scene::{Paint, PathSeg, Point, Shape};

    let offset_point = |p: Point| Point::new(p.x + dx, p.y + dy);
    let offset_path = |segs: Vec<PathSeg>| -> Vec<PathSeg> {
        segs.into_iter()
            .map(|seg| match seg {
                PathSeg::MoveTo(p) => PathSeg::MoveTo(offset_point(p)),
                PathSeg::LineTo(p) => PathSeg::LineTo(offset_point(p)),
                PathSeg::CubicTo { c1, c2, to } => PathSeg::CubicTo {
                    c1: offset_point(c1),
                    c2: offset_point(c2),
                    to: offset_point(to),
                },
                PathSeg::Close => PathSeg::Close,
            })
            .collect()
    };
    let offset_paint = |paint: Paint| match paint {
        Paint::Solid(color) => Paint::Solid(color),
        Paint::VerticalGradient { y0, y1, stops } => Paint::VerticalGradient {
            y0: y0 + dy,
            y1: y1 + dy,
            stops,
        },
    };

    match shape {
        Shape::Fill { path, paint } => Shape::Fill {
            path: offset_path(path),
            paint: offset_paint(paint),
        },
        Shape::Stroke {
            path,
            color,
            width,
            dash,
        } => Shape::Stroke {
            path: offset_path(path),
            color,
            width,
            dash,
        },
        Shape::Rect {
            x,
            y,
            width,
            height,
            paint,
        } => Shape::Rect {
            x: x + dx,
            y: y + dy,
            width,
            height,
            paint: offset_paint(paint),
        },
        Shape::Circle { cx, cy, r, color } => Shape::Circle {
            cx: cx + dx,
            cy: cy + dy,
            r,
            color,
        },
    }
}

/// Render chart SVG markup to PNG bytes and hand them to the platform
/// download path. Returns the written path on native targets.
pub async fn export_png(svg_markup: String, slug: &str) -> Result<Option<String>, String> {
    let filename = format!("{slug}_{}.png", format::timestamp_slug());
    let bytes = png_bytes(&svg_markup).await?;
    download_bytes(&filename, "image/png", bytes).await
}

/// Serialize the payload and hand it to the platform download path.
pub async fn export_json(payload: &SnapshotPayload, slug: &str) -> Result<Option<String>, String> {
    let filename = format!("{slug}_{}.json", format::timestamp_slug());
    let json = serde_json::to_vec_pretty(payload).map_err(|err| err.to_string())?;
    download_bytes(&filename, "application/json", json).await
}

#[cfg(target_arch = "wasm32")]
async fn png_bytes(svg_markup: &str) -> Result<Vec<u8>, String> {
    use base64::Engine as _;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Blob, BlobPropertyBag, CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, Url,
    };

    let opts = BlobPropertyBag::new();
    opts.set_type("image/svg+xml");
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(svg_markup));
    let blob = Blob::new_with_str_sequence_and_options(&parts, &opts)
        .map_err(|_| "Unable to build SVG blob".to_string())?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| "Unable to create SVG URL".to_string())?;

    let (width, height) = svg_dimensions(svg_markup);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("Document unavailable")?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "Unable to create canvas")?
        .dyn_into()
        .map_err(|_| "Canvas cast failed")?;
    canvas.set_width(width);
    canvas.set_height(height);

    let context: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "Canvas context unavailable")?
        .ok_or("Canvas context missing")?
        .dyn_into()
        .map_err(|_| "Context cast failed")?;

    let image = HtmlImageElement::new().map_err(|_| "Unable to create image")?;
    let decode = image.decode();
    image.set_src(&url);
    JsFuture::from(decode)
        .await
        .map_err(|_| "Image decode failed")?;

    context
        .draw_image_with_html_image_element(&image, 0.0, 0.0)
        .map_err(|_| "Unable to draw image")?;

    let data_url = canvas
        .to_data_url_with_type("image/png")
        .map_err(|_| "Unable to serialise canvas")?;
    Url::revoke_object_url(&url).ok();

    let encoded = data_url.split(',').nth(1).ok_or("Malformed data URL")?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|_| "PNG decode failed".to_string())
}

#[cfg(not(target_arch = "wasm32"))]
async fn png_bytes(svg_markup: &str) -> Result<Vec<u8>, String> {
    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg_markup, &options).map_err(|err| err.to_string())?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or("Unable to allocate pixmap")?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let mut buffer = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buffer, size.width(), size.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder
            .write_header()
            .map_err(|err| err.to_string())?
            .write_image_data(pixmap.data())
            .map_err(|err| err.to_string())?;
    }

    Ok(buffer)
}

#[cfg(target_arch = "wasm32")]
fn svg_dimensions(svg_markup: &str) -> (u32, u32) {
    // The serializer always emits integral width/height attributes first.
    let grab = |attr: &str| -> Option<u32> {
        let idx = svg_markup.find(attr)?;
        let rest = &svg_markup[idx + attr.len()..];
        let end = rest.find('"')?;
        rest[..end].parse().ok()
    };

    (
        grab("width=\"").unwrap_or(900),
        grab("height=\"").unwrap_or(420),
    )
}

/// Copy a text payload to the platform clipboard.
pub async fn copy_text(payload: String) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let window = web_sys::window().ok_or("window unavailable")?;
        let document = window.document().ok_or("document unavailable")?;
        let body = document.body().ok_or("missing body")?;

        let textarea = document
            .create_element("textarea")
            .map_err(|_| "Unable to create textarea")?
            .dyn_into::<web_sys::HtmlTextAreaElement>()
            .map_err(|_| "Textarea cast failed")?;
        textarea.set_value(&payload);
        let style = textarea.style();
        style.set_property("position", "fixed").ok();
        style.set_property("top", "0").ok();
        style.set_property("left", "0").ok();
        style.set_property("opacity", "0").ok();

        body.append_child(&textarea).ok();
        textarea.select();
        if !document.exec_command("copy").unwrap_or(false) {
            textarea.remove();
            return Err("Clipboard copy blocked".into());
        }
        textarea.remove();
        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use arboard::Clipboard;

        let mut clipboard = Clipboard::new().map_err(|err| err.to_string())?;
        clipboard.set_text(payload).map_err(|err| err.to_string())
    }
}

async fn download_bytes(
    filename: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<Option<String>, String> {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

        let array = js_sys::Uint8Array::from(bytes.as_slice());
        let parts = js_sys::Array::new();
        parts.push(&array.buffer());

        let opts = BlobPropertyBag::new();
        opts.set_type(mime);
        let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(|_| "Failed to create blob".to_string())?;
        let url = Url::create_object_url_with_blob(&blob)
            .map_err(|_| "Unable to create download".to_string())?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("Document unavailable")?;
        let anchor: HtmlAnchorElement = document
            .create_element("a")
            .map_err(|_| "Unable to create anchor")?
            .dyn_into()
            .map_err(|_| "Anchor cast failed")?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.style().set_property("display", "none").ok();

        document
            .body()
            .ok_or("Missing body")?
            .append_child(&anchor)
            .ok();
        anchor.click();
        anchor.remove();
        Url::revoke_object_url(&url).ok();

        Ok(None)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::fs;
        use std::io::Write;

        let _ = mime;
        let dir = snapshot_dir()?;
        fs::create_dir_all(&dir).map_err(|err| err.to_string())?;
        let path = dir.join(filename);
        let mut file = fs::File::create(&path).map_err(|err| err.to_string())?;
        file.write_all(&bytes).map_err(|err| err.to_string())?;
        Ok(Some(path.to_string_lossy().to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn snapshot_dir() -> Result<std::path::PathBuf, String> {
    let dirs = directories::ProjectDirs::from("dev", "Pulsegrid", "Pulsegrid")
        .ok_or("Unable to determine snapshot directory")?;
    Ok(dirs.data_dir().join("snapshots"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> SnapshotPayload {
        SnapshotPayload {
            patient: "Grandma".into(),
            period: Period::Week,
            samples: vec![91.0, 92.5, 90.1],
            stats: TrendStats {
                avg: 91,
                min: 90,
                max: 93,
            },
            platform: "native",
        }
    }

    #[test]
    fn stats_line_reads_naturally() {
        assert_eq!(
            payload().stats_line(),
            "Grandma · This Week · avg 91% · min 90% · max 93%"
        );
    }

    #[test]
    fn json_payload_round_trips() {
        let json = serde_json::to_string(&payload()).unwrap();
        assert!(json.contains("\"period\":\"week\""));
        assert!(json.contains("\"avg\":91"));
    }

    #[test]
    fn snapshot_needs_two_samples() {
        use crate::core::theme::ThemeMode;
        assert!(snapshot_svg(&[93.0], ThemeMode::Dark).is_none());
    }

    #[test]
    fn snapshot_wraps_chart_in_an_opaque_card() {
        use crate::core::theme::ThemeMode;
        let svg = snapshot_svg(&[93.0, 91.5, 94.0], ThemeMode::Dark).unwrap();
        assert!(svg.contains("viewBox=\"0 0 900 420\""));
        assert!(svg.contains("#151923"));
        // Chart strokes survive the inset.
        assert!(svg.contains("stroke-dasharray=\"4 4\""));
    }
}

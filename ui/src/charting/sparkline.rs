//! Per-patient sparkline scene: smoothed area fill plus stroke over the
//! last 20 SpO2 samples.

use crate::core::theme::ThemeMode;
use crate::monitor::patient::SPARK_POINTS;
use crate::monitor::sim::{SPO2_MAX, SPO2_MIN};

use super::scene::{self, Paint, Point, Scene, Shape};

const PAD: f64 = 2.0;
const STROKE_WIDTH: f64 = 1.5;

/// Build the sparkline for one history buffer. Returns `None` below two
/// samples; painters treat that as a cleared chart.
pub fn build(history: &[f64], color: &str, mode: ThemeMode, width: f64, height: f64) -> Option<Scene> {
    if history.len() < 2 {
        return None;
    }

    let chart_w = width - PAD * 2.0;
    let chart_h = height - PAD * 2.0;
    // Step over the fixed capacity, not the current length, so a filling
    // buffer grows in from the left edge.
    let step = chart_w / (SPARK_POINTS - 1) as f64;

    let points: Vec<Point> = history
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Point::new(
                PAD + i as f64 * step,
                scene::map_y(*value, SPO2_MIN, SPO2_MAX, PAD, chart_h),
            )
        })
        .collect();

    let top_alpha = if mode.is_dark() { "40" } else { "30" };
    let base_y = PAD + chart_h;

    let mut out = Scene::new(width, height);
    out.push(Shape::Fill {
        path: scene::smooth_area(&points, base_y),
        paint: Paint::gradient(
            PAD,
            base_y,
            &[
                (0.0, &format!("{color}{top_alpha}")),
                (1.0, &format!("{color}05")),
            ],
        ),
    });
    out.push(Shape::Stroke {
        path: scene::smooth_path(&points),
        color: color.to_string(),
        width: STROKE_WIDTH,
        dash: None,
    });

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_samples_yields_nothing() {
        assert!(build(&[], "#30d158", ThemeMode::Dark, 140.0, 40.0).is_none());
        assert!(build(&[95.0], "#30d158", ThemeMode::Dark, 140.0, 40.0).is_none());
    }

    #[test]
    fn scene_is_area_then_stroke() {
        let scene = build(&[95.0, 93.0, 96.0], "#30d158", ThemeMode::Dark, 140.0, 40.0).unwrap();
        assert_eq!(scene.shapes.len(), 2);
        assert!(matches!(scene.shapes[0], Shape::Fill { .. }));
        assert!(matches!(scene.shapes[1], Shape::Stroke { .. }));
    }

    #[test]
    fn x_step_uses_fixed_capacity() {
        let scene = build(&[95.0, 95.0], "#30d158", ThemeMode::Dark, 140.0, 40.0).unwrap();
        let Shape::Stroke { path, .. } = &scene.shapes[1] else {
            panic!("stroke expected");
        };

        // Two samples only reach one capacity step from the left edge.
        let expected_step = (140.0 - 4.0) / (SPARK_POINTS - 1) as f64;
        match &path[1] {
            super::super::scene::PathSeg::CubicTo { to, .. } => {
                assert!((to.x - (2.0 + expected_step)).abs() < 1e-9);
            }
            other => panic!("expected cubic, got {other:?}"),
        }
    }

    #[test]
    fn gradient_alpha_differs_by_mode() {
        let dark = build(&[95.0, 93.0], "#0a84ff", ThemeMode::Dark, 140.0, 40.0).unwrap();
        let light = build(&[95.0, 93.0], "#0a84ff", ThemeMode::Light, 140.0, 40.0).unwrap();

        let top_stop = |scene: &Scene| -> String {
            match &scene.shapes[0] {
                Shape::Fill {
                    paint: Paint::VerticalGradient { stops, .. },
                    ..
                } => stops[0].color.clone(),
                other => panic!("expected gradient fill, got {other:?}"),
            }
        };

        assert_eq!(top_stop(&dark), "#0a84ff40");
        assert_eq!(top_stop(&light), "#0a84ff30");
    }

    #[test]
    fn out_of_range_samples_clamp_to_the_band() {
        let scene = build(&[120.0, 60.0], "#30d158", ThemeMode::Dark, 140.0, 40.0).unwrap();
        let Shape::Stroke { path, .. } = &scene.shapes[1] else {
            panic!("stroke expected");
        };

        match (&path[0], &path[1]) {
            (
                super::super::scene::PathSeg::MoveTo(start),
                super::super::scene::PathSeg::CubicTo { to, .. },
            ) => {
                assert_eq!(start.y, 2.0); // clamped to the top pad
                assert_eq!(to.y, 38.0); // clamped to the bottom pad
            }
            other => panic!("unexpected path head {other:?}"),
        }
    }
}

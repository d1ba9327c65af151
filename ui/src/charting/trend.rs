//! Detail-screen trend chart: per-period synthetic series, derived stats
//! and the layered scene (zone bands, reference line, curve, markers).

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::theme::ThemeMode;

use super::scene::{self, Paint, Point, Scene, Shape};

/// Vertical domain of the detail chart. Wider than the sparkline's so the
/// warning band floor sits visibly above the chart bottom.
const Y_MIN: f64 = 80.0;
const Y_MAX: f64 = 100.0;
const PAD_TOP: f64 = 4.0;
const PAD_BOTTOM: f64 = 4.0;

const SAFE_FLOOR: f64 = 90.0;
const WARN_FLOOR: f64 = 82.0;

const DOT_RADIUS: f64 = 3.0;
const HALO_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Day,
    Week,
    Month,
    SixMonths,
    Year,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::SixMonths,
        Period::Year,
    ];

    pub fn sample_count(self) -> usize {
        match self {
            Self::Day => 24,
            Self::Week => 7,
            Self::Month => 30,
            Self::SixMonths => 26,
            Self::Year => 12,
        }
    }

    /// Selector button caption.
    pub fn short_label(self) -> &'static str {
        match self {
            Self::Day => "D",
            Self::Week => "W",
            Self::Month => "M",
            Self::SixMonths => "6M",
            Self::Year => "Y",
        }
    }

    /// Chart subtitle.
    pub fn title(self) -> &'static str {
        match self {
            Self::Day => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::SixMonths => "6 Months",
            Self::Year => "This Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendStats {
    pub avg: i32,
    pub min: i32,
    pub max: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub period: Period,
    pub samples: Vec<f64>,
    pub stats: TrendStats,
}

impl TrendSeries {
    /// Baseline-anchored synthetic series: each sample sits in
    /// `[baseline - 1, baseline + 3]`, with a 15% chance of an extra 2–8
    /// point downward excursion, clamped to the displayable range.
    pub fn generate<R: Rng + ?Sized>(period: Period, baseline_spo2: f64, rng: &mut R) -> Self {
        let count = period.sample_count();
        let mut samples = Vec::with_capacity(count);

        for _ in 0..count {
            let value = baseline_spo2 - 1.0 + rng.gen::<f64>() * 4.0;
            let dip = if rng.gen::<f64>() < 0.15 {
                -(rng.gen::<f64>() * 6.0 + 2.0)
            } else {
                0.0
            };
            samples.push((value + dip).clamp(82.0, 100.0));
        }

        let stats = TrendStats::of(&samples);
        Self {
            period,
            samples,
            stats,
        }
    }
}

impl TrendStats {
    pub fn of(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self {
                avg: 0,
                min: 0,
                max: 0,
            };
        }

        let sum: f64 = samples.iter().sum();
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Self {
            avg: (sum / samples.len() as f64).round() as i32,
            min: min.round() as i32,
            max: max.round() as i32,
        }
    }
}

/// Marker color for one sample.
fn marker_color(value: f64) -> &'static str {
    if value < 82.0 {
        "#ff3b30"
    } else if value < 90.0 {
        "#ffd60a"
    } else {
        "#30d158"
    }
}

fn halo_color(value: f64) -> &'static str {
    if value < 82.0 {
        "rgba(255, 59, 48, 0.2)"
    } else {
        "rgba(255, 214, 10, 0.2)"
    }
}

/// Build the detail chart scene. Returns `None` below two samples.
pub fn build(samples: &[f64], mode: ThemeMode, width: f64, height: f64) -> Option<Scene> {
    if samples.len() < 2 {
        return None;
    }

    let chart_w = width;
    let chart_h = height - PAD_TOP - PAD_BOTTOM;
    let y_of = |value: f64| scene::map_y(value, Y_MIN, Y_MAX, PAD_TOP, chart_h);

    let mut out = Scene::new(width, height);

    // Zone bands. Safe covers >= 90, warning covers 82–90.
    let safe_top = y_of(Y_MAX);
    let safe_bottom = y_of(SAFE_FLOOR);
    out.push(Shape::Rect {
        x: 0.0,
        y: safe_top,
        width: chart_w,
        height: safe_bottom - safe_top,
        paint: Paint::Solid(
            if mode.is_dark() {
                "rgba(48, 209, 88, 0.08)"
            } else {
                "rgba(48, 209, 88, 0.1)"
            }
            .to_string(),
        ),
    });

    let warn_bottom = y_of(WARN_FLOOR);
    out.push(Shape::Rect {
        x: 0.0,
        y: safe_bottom,
        width: chart_w,
        height: warn_bottom - safe_bottom,
        paint: Paint::Solid(
            if mode.is_dark() {
                "rgba(255, 214, 10, 0.04)"
            } else {
                "rgba(255, 214, 10, 0.06)"
            }
            .to_string(),
        ),
    });

    // Dashed reference line at the 90% threshold.
    let y90 = y_of(SAFE_FLOOR);
    out.push(Shape::Stroke {
        path: vec![
            scene::PathSeg::MoveTo(Point::new(0.0, y90)),
            scene::PathSeg::LineTo(Point::new(chart_w, y90)),
        ],
        color: if mode.is_dark() {
            "rgba(255, 255, 255, 0.12)"
        } else {
            "rgba(0, 0, 0, 0.1)"
        }
        .to_string(),
        width: 0.5,
        dash: Some((4.0, 4.0)),
    });

    let points: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Point::new(
                (i as f64 / (samples.len() - 1) as f64) * chart_w,
                y_of(*value),
            )
        })
        .collect();

    // Smoothed area and line, same control-point rule as the sparkline.
    let base_y = PAD_TOP + chart_h;
    let area_stops: &[(f64, &str)] = if mode.is_dark() {
        &[
            (0.0, "rgba(48, 209, 88, 0.25)"),
            (0.5, "rgba(48, 209, 88, 0.08)"),
            (1.0, "rgba(48, 209, 88, 0.01)"),
        ]
    } else {
        &[
            (0.0, "rgba(48, 209, 88, 0.3)"),
            (0.5, "rgba(48, 209, 88, 0.1)"),
            (1.0, "rgba(48, 209, 88, 0.02)"),
        ]
    };
    out.push(Shape::Fill {
        path: scene::smooth_area(&points, base_y),
        paint: Paint::gradient(PAD_TOP, base_y, area_stops),
    });
    out.push(Shape::Stroke {
        path: scene::smooth_path(&points),
        color: if mode.is_dark() { "#30d158" } else { "#28a745" }.to_string(),
        width: 2.0,
        dash: None,
    });

    // Markers, low points get a translucent halo behind the dot.
    for (point, value) in points.iter().zip(samples) {
        if *value < SAFE_FLOOR {
            out.push(Shape::Circle {
                cx: point.x,
                cy: point.y,
                r: HALO_RADIUS,
                color: halo_color(*value).to_string(),
            });
        }
        out.push(Shape::Circle {
            cx: point.x,
            cy: point.y,
            r: DOT_RADIUS,
            color: marker_color(*value).to_string(),
        });
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn sample_counts_per_period() {
        let mut rng = StdRng::seed_from_u64(2);
        for (period, expected) in [
            (Period::Day, 24),
            (Period::Week, 7),
            (Period::Month, 30),
            (Period::SixMonths, 26),
            (Period::Year, 12),
        ] {
            let series = TrendSeries::generate(period, 95.0, &mut rng);
            assert_eq!(series.samples.len(), expected);
        }
    }

    #[test]
    fn week_at_baseline_93_stays_in_range_with_consistent_stats() {
        let mut rng = StdRng::seed_from_u64(8);
        let series = TrendSeries::generate(Period::Week, 93.0, &mut rng);

        assert_eq!(series.samples.len(), 7);
        for sample in &series.samples {
            assert!((82.0..=100.0).contains(sample), "sample {sample}");
        }

        let mean: f64 = series.samples.iter().sum::<f64>() / series.samples.len() as f64;
        let min = series.samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = series
            .samples
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(series.stats.avg, mean.round() as i32);
        assert_eq!(series.stats.min, min.round() as i32);
        assert_eq!(series.stats.max, max.round() as i32);
        assert!(series.stats.min <= series.stats.avg);
        assert!(series.stats.avg <= series.stats.max);
    }

    #[test]
    fn samples_never_exceed_baseline_plus_three() {
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..50 {
            let series = TrendSeries::generate(Period::Month, 95.0, &mut rng);
            for sample in &series.samples {
                assert!(*sample <= 98.0 + 1e-9, "sample {sample}");
            }
        }
    }

    #[test]
    fn scene_needs_two_samples() {
        assert!(build(&[], ThemeMode::Dark, 600.0, 280.0).is_none());
        assert!(build(&[93.0], ThemeMode::Dark, 600.0, 280.0).is_none());
    }

    #[test]
    fn scene_layers_zones_line_curve_and_markers() {
        let samples = [95.0, 88.0, 93.0];
        let scene = build(&samples, ThemeMode::Dark, 600.0, 280.0).unwrap();

        let rects = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Rect { .. }))
            .count();
        let dashed = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Stroke { dash: Some(_), .. }))
            .count();
        let circles = scene
            .shapes
            .iter()
            .filter(|s| matches!(s, Shape::Circle { .. }))
            .count();

        assert_eq!(rects, 2, "safe + warning bands");
        assert_eq!(dashed, 1, "90% reference line");
        // One dot per sample plus one halo for the 88.0 reading.
        assert_eq!(circles, samples.len() + 1);
    }

    #[test]
    fn marker_colors_follow_thresholds() {
        assert_eq!(marker_color(95.0), "#30d158");
        assert_eq!(marker_color(89.9), "#ffd60a");
        assert_eq!(marker_color(81.0), "#ff3b30");
    }
}

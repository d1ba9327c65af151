//! Chart construction and painting.
//!
//! Scene builders are pure: history/series in, a backend-neutral [`Scene`]
//! out. The wasm back-end replays scenes onto a 2d canvas; every other
//! target serializes the same scene to inline SVG markup. Keeping the
//! geometry out of the render back-ends is what lets the chart math run in
//! ordinary unit tests.

pub mod export;
pub mod scene;
pub mod sparkline;
pub mod svg;
pub mod trend;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{Paint, PathSeg, Point, Scene, Shape};
pub use trend::{Period, TrendSeries, TrendStats};

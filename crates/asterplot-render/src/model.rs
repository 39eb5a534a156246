use asterplot_core::University;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// One donut slice of one chart.
///
/// Angles use the "12 o'clock is zero, clockwise" convention with y increasing
/// downwards (`x = r*sin(a)`, `y = -r*cos(a)`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliceLayout {
    pub topic: usize,
    /// Topic display name; emitted as the slice's hover tooltip.
    pub label: String,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Outer radius of the colored arc (area-encoded from the score).
    pub outer_radius: f64,
    pub fill: String,
}

/// One chart, placed at its cell center inside a university band.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartLayout {
    pub author_key: String,
    /// Placement slot id: university initial + 1-based per-university count.
    pub slot: String,
    pub first_name: String,
    pub last_name: String,
    pub center_x: f64,
    pub center_y: f64,
    pub slices: Vec<SliceLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendItemLayout {
    pub topic: usize,
    pub label: String,
    pub color: String,
    pub x: f64,
    pub y: f64,
}

/// One university band: a title plus that university's charts in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BandLayout {
    pub university: University,
    pub title_x: f64,
    pub title_y: f64,
    pub charts: Vec<ChartLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryLayout {
    pub bounds: Bounds,
    /// Full chart radius (outline arcs always reach this).
    pub radius: f64,
    pub inner_radius: f64,
    pub legend: Vec<LegendItemLayout>,
    pub bands: Vec<BandLayout>,
}

//! Per-chart donut geometry.

use crate::model::SliceLayout;
use crate::{Error, Result};
use asterplot_core::topics::{LOW_VOLUME_COLOR, topic_color, topic_name};
use asterplot_core::{Author, TopicRow};
use std::f64::consts::TAU;

/// Each chart lives in a fixed square cell with a small margin on every side.
pub const CELL_SIZE: f64 = 100.0;
pub const CELL_MARGIN: f64 = 5.0;

/// Full chart radius: half of the drawing square (100 minus 5px margins).
pub const CHART_RADIUS: f64 = (CELL_SIZE - 2.0 * CELL_MARGIN) / 2.0;

/// Inner donut radius, fixed at half the chart radius.
pub const INNER_RADIUS: f64 = 0.5 * CHART_RADIUS;

/// Solve for the colored arc's outer radius so that the swept area encodes the
/// score: with `theta` the slice's angular width and `area = 100 * score`
/// (score the stored 0..=1 fraction, so the maximum area is 100),
/// `r = sqrt(area / (theta / 2))` above the inner radius. Visual area, not
/// radius, is proportional to the score.
pub fn area_encoded_radius(theta: f64, score_fraction: f64) -> f64 {
    let area = 100.0 * score_fraction;
    if theta <= 0.0 || area <= 0.0 {
        return INNER_RADIUS;
    }
    INNER_RADIUS + (area / (theta / 2.0)).sqrt()
}

/// Build the 14 slices for one author.
///
/// Slice angular widths divide the full circle proportionally by topic weight
/// (weights need not be normalized); slices start at 12 o'clock and run
/// clockwise in topic-row order. Non-positive weights produce a zero-width
/// slice that stays in the layout.
pub fn layout_chart_slices(author: &Author, rows: &[TopicRow]) -> Result<Vec<SliceLayout>> {
    if author.scores.len() != rows.len() {
        return Err(Error::ScoreCount {
            key: author.key.clone(),
            expected: rows.len(),
            got: author.scores.len(),
        });
    }

    let total: f64 = rows.iter().map(|r| r.weight.max(0.0)).sum();
    if !(total.is_finite() && total > 0.0) {
        return Err(Error::ZeroWeightTotal);
    }

    let mut slices = Vec::with_capacity(rows.len());
    let mut start = 0.0;
    for (row, score) in rows.iter().zip(&author.scores) {
        let delta = (row.weight.max(0.0) / total) * TAU;
        let end = start + delta;

        let label = topic_name(row.topic).ok_or(Error::UnknownTopic { index: row.topic })?;
        let fill = if author.low_volume {
            LOW_VOLUME_COLOR
        } else {
            topic_color(row.topic).ok_or(Error::UnknownTopic { index: row.topic })?
        };

        slices.push(SliceLayout {
            topic: row.topic,
            label: label.to_string(),
            start_angle: start,
            end_angle: end,
            outer_radius: area_encoded_radius(delta, *score),
            fill: fill.to_string(),
        });
        start = end;
    }

    Ok(slices)
}

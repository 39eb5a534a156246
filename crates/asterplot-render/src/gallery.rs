//! Gallery assembly: legend column, university bands, chart placement.

use crate::Result;
use crate::chart::{CELL_SIZE, CHART_RADIUS, INNER_RADIUS, layout_chart_slices};
use crate::model::{BandLayout, Bounds, ChartLayout, GalleryLayout, LegendItemLayout};
use asterplot_core::topics::{TOPIC_COLORS, TOPIC_NAMES};
use asterplot_core::{Dataset, University, split_display_name};

// Legend column on the left, one entry per topic.
const LEGEND_X: f64 = 10.0;
const LEGEND_TOP: f64 = 20.0;
const LEGEND_STEP_Y: f64 = 22.0;
const LEGEND_WIDTH: f64 = 300.0;

// University bands to the right of the legend.
const BAND_X: f64 = LEGEND_X + LEGEND_WIDTH;
const BAND_TOP: f64 = 20.0;
const BAND_TITLE_HEIGHT: f64 = 28.0;
const BAND_GAP: f64 = 12.0;

#[derive(Debug, Clone)]
pub struct LayoutOptions {
    /// Charts per band row before wrapping.
    pub charts_per_row: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { charts_per_row: 6 }
    }
}

fn legend_items() -> Vec<LegendItemLayout> {
    TOPIC_NAMES
        .iter()
        .zip(TOPIC_COLORS)
        .enumerate()
        .map(|(topic, (label, color))| LegendItemLayout {
            topic,
            label: label.to_string(),
            color: color.to_string(),
            x: LEGEND_X,
            y: LEGEND_TOP + (topic as f64) * LEGEND_STEP_Y,
        })
        .collect()
}

/// Lay out the whole gallery.
///
/// Placement counters are per-university state owned by this pass: for each
/// author, in display order, the counter of that author's university picks the
/// next slot (`initial + 1-based count`). Counters for different universities
/// never interact.
pub fn layout_gallery(dataset: &Dataset, options: &LayoutOptions) -> Result<GalleryLayout> {
    let charts_per_row = options.charts_per_row.max(1);

    let mut counts = [0usize; University::ALL.len()];
    let mut bands: Vec<BandLayout> = Vec::new();
    let mut band_y = BAND_TOP;
    let mut max_cols = 0usize;

    for (uni_idx, uni) in University::ALL.into_iter().enumerate() {
        let members: Vec<_> = dataset
            .authors
            .iter()
            .filter(|a| a.university == uni)
            .collect();
        if members.is_empty() {
            continue;
        }

        let mut charts = Vec::with_capacity(members.len());
        for author in members {
            counts[uni_idx] += 1;
            let slot_index = counts[uni_idx];
            let col = (slot_index - 1) % charts_per_row;
            let row = (slot_index - 1) / charts_per_row;
            max_cols = max_cols.max(col + 1);

            let name = split_display_name(&author.display_name);
            charts.push(ChartLayout {
                author_key: author.key.clone(),
                slot: format!("{}{}", uni.initial(), slot_index),
                first_name: name.first,
                last_name: name.last,
                center_x: BAND_X + (col as f64) * CELL_SIZE + CELL_SIZE / 2.0,
                center_y: band_y + BAND_TITLE_HEIGHT + (row as f64) * CELL_SIZE + CELL_SIZE / 2.0,
                slices: layout_chart_slices(author, &dataset.topic_rows)?,
            });
        }

        let rows = counts[uni_idx].div_ceil(charts_per_row);
        bands.push(BandLayout {
            university: uni,
            title_x: BAND_X,
            title_y: band_y + BAND_TITLE_HEIGHT - 8.0,
            charts,
        });
        band_y += BAND_TITLE_HEIGHT + (rows as f64) * CELL_SIZE + BAND_GAP;
    }

    tracing::debug!(
        bands = bands.len(),
        charts = counts.iter().sum::<usize>(),
        "laid out gallery"
    );

    let legend = legend_items();
    let legend_bottom = LEGEND_TOP + (legend.len() as f64) * LEGEND_STEP_Y;
    let width = BAND_X + (max_cols.max(1) as f64) * CELL_SIZE + LEGEND_X;
    let height = band_y.max(legend_bottom) + LEGEND_TOP;

    Ok(GalleryLayout {
        bounds: Bounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        },
        radius: CHART_RADIUS,
        inner_radius: INNER_RADIUS,
        legend,
        bands,
    })
}

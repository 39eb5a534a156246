#![forbid(unsafe_code)]

//! Layout + SVG renderer for aster-plot galleries (headless).
//!
//! Charts encode a researcher's per-topic scores as donut slices whose visual
//! area (not radius) is proportional to the score; charts are grouped into one
//! band per university. Output is a single deterministic SVG document.

pub mod chart;
pub mod gallery;
pub mod model;
pub mod svg;

pub use gallery::{LayoutOptions, layout_gallery};
pub use svg::{SvgRenderOptions, render_gallery_svg};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("author \"{key}\" has {got} scores for {expected} topic rows")]
    ScoreCount {
        key: String,
        expected: usize,
        got: usize,
    },

    #[error("unknown topic index {index}")]
    UnknownTopic { index: usize },

    #[error("topic weights sum to zero; cannot divide the circle")]
    ZeroWeightTotal,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;

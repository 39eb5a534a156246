//! Fixed topic table: names and colors, positionally indexed.
//!
//! The positional index (0..=13) is the join key everywhere: CSV `topicNum`
//! values, per-author score vectors, slice fills and tooltips.

/// Number of topics; every chart has exactly this many slices.
pub const TOPIC_COUNT: usize = 14;

/// Topic display names, in table order.
pub const TOPIC_NAMES: [&str; TOPIC_COUNT] = [
    "Social and Applied DS",
    "Mathematics Statistics",
    "NLP",
    "Applications to science",
    "Optimization",
    "ML",
    "Bayes, MC methods, Markov models",
    "Biology, Genetics",
    "Networks (wireless, routing, sensor)",
    "Networks (social, temporal, fmri)",
    "Knowledge representation (semantic web)",
    "Privacy and Security",
    "Approximation methods",
    "Other",
];

/// Per-topic fill colors, aligned with `TOPIC_NAMES`.
pub const TOPIC_COLORS: [&str; TOPIC_COUNT] = [
    "#45666d", "#8cb2b0", "#c0dac9", "#f9dca2", "#ffaf7a", "#e77d65", "#bf5458",
    "#8d3647", "#572031", "#000000", "#424B54", "#898987", "#c2bcb0", "#e2d4b7",
];

/// Fill used for every slice of a low-volume author, regardless of topic.
pub const LOW_VOLUME_COLOR: &str = "#d3d3d3";

/// Stroke used for slice boundaries and the outline arcs.
pub const STROKE_COLOR: &str = "#e8e8e8";

pub fn topic_name(index: usize) -> Option<&'static str> {
    TOPIC_NAMES.get(index).copied()
}

pub fn topic_color(index: usize) -> Option<&'static str> {
    TOPIC_COLORS.get(index).copied()
}

use crate::university::University;
use serde::{Deserialize, Serialize};

/// One researcher, merged from the info map, order list and score table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub key: String,
    pub display_name: String,
    pub university: University,
    /// Too few publications: all slices render in the grey sentinel color.
    pub low_volume: bool,
    /// Per-topic score fraction (raw CSV value / 100), one entry per topic row.
    pub scores: Vec<f64>,
}

/// One topic row of the score table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicRow {
    /// Positional topic index (0..=13), the join key into the topic table.
    pub topic: usize,
    /// Angular weight ("topicVal"); the full circle is divided proportionally.
    pub weight: f64,
}

/// Everything the layout needs, loaded up front.
///
/// Invariant: `authors[i].scores.len() == topic_rows.len()` for every author,
/// and `topic_rows` covers each topic index exactly once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Authors in display order (the order list drives placement).
    pub authors: Vec<Author>,
    pub topic_rows: Vec<TopicRow>,
}

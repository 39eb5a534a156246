//! Reads the three reference files and merges them into a [`Dataset`].
//!
//! All loading happens up front, before any layout or drawing: the gallery is
//! either rendered whole or not at all, never partially.

use crate::error::{Error, Result};
use crate::model::{Author, Dataset, TopicRow};
use crate::topics::TOPIC_COUNT;
use crate::university::University;
use indexmap::IndexMap;
use std::path::Path;

pub const AUTHOR_INFO_FILE: &str = "author_info.json";
pub const AUTHOR_ORDER_FILE: &str = "author_order.json";
pub const TOPIC_SCORES_FILE: &str = "data_other.csv";

/// `author_info.json`: author key -> `[displayName, universityName, lowVolumeFlag]`.
type AuthorInfoMap = IndexMap<String, (String, String, u8)>;

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Score table as read from `data_other.csv`: one row per topic, one score
/// column per author key, in the order of the display order list.
struct TopicTable {
    rows: Vec<TopicRow>,
    /// `scores[row][author]`, raw 0-100 CSV values.
    scores: Vec<Vec<f64>>,
}

fn bad_table(path: &Path, message: String) -> Error {
    Error::TopicTable {
        path: path.to_path_buf(),
        message,
    }
}

fn parse_cell(path: &Path, row: usize, column: &str, raw: &str) -> Result<f64> {
    raw.trim().parse::<f64>().map_err(|_| {
        bad_table(
            path,
            format!("row {row}: column \"{column}\" is not a number: {raw:?}"),
        )
    })
}

fn parse_topic(path: &Path, row: usize, raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        bad_table(
            path,
            format!("row {row}: column \"topicNum\" is not a non-negative integer: {raw:?}"),
        )
    })
}

fn read_topic_table(path: &Path, author_keys: &[String]) -> Result<TopicTable> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| Error::Csv {
        path: path.to_path_buf(),
        source,
    })?;

    let headers = reader
        .headers()
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .clone();
    let column = |name: &str| headers.iter().position(|h| h == name);

    let topic_col = column("topicNum")
        .ok_or_else(|| bad_table(path, "missing \"topicNum\" column".to_string()))?;
    let weight_col = column("topicVal")
        .ok_or_else(|| bad_table(path, "missing \"topicVal\" column".to_string()))?;

    // A missing author column is recoverable: every score defaults to 0.
    let author_cols: Vec<Option<usize>> = author_keys
        .iter()
        .map(|key| {
            let col = column(key);
            if col.is_none() {
                tracing::warn!(author = %key, "no score column in {}; defaulting to 0", path.display());
            }
            col
        })
        .collect();

    let mut rows: Vec<TopicRow> = Vec::new();
    let mut scores: Vec<Vec<f64>> = Vec::new();
    let mut seen = [false; TOPIC_COUNT];

    for (row_idx, record) in reader.records().enumerate() {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        let cell = |col: usize| record.get(col).unwrap_or("");

        let topic = parse_topic(path, row_idx, cell(topic_col))?;
        if topic >= TOPIC_COUNT {
            return Err(bad_table(
                path,
                format!("row {row_idx}: topicNum {topic} out of range 0..{TOPIC_COUNT}"),
            ));
        }
        if seen[topic] {
            return Err(bad_table(
                path,
                format!("row {row_idx}: duplicate topicNum {topic}"),
            ));
        }
        seen[topic] = true;

        let weight = parse_cell(path, row_idx, "topicVal", cell(weight_col))?;
        rows.push(TopicRow { topic, weight });

        let mut row_scores = Vec::with_capacity(author_keys.len());
        for (key, col) in author_keys.iter().zip(&author_cols) {
            let value = match col {
                Some(col) => parse_cell(path, row_idx, key, cell(*col))?,
                None => 0.0,
            };
            row_scores.push(value);
        }
        scores.push(row_scores);
    }

    if rows.len() != TOPIC_COUNT {
        return Err(bad_table(
            path,
            format!("expected {TOPIC_COUNT} topic rows, found {}", rows.len()),
        ));
    }

    Ok(TopicTable { rows, scores })
}

/// Load and merge `author_info.json`, `author_order.json` and `data_other.csv`
/// from `dir` into a [`Dataset`].
pub fn load_dataset(dir: &Path) -> Result<Dataset> {
    let info: AuthorInfoMap = read_json(&dir.join(AUTHOR_INFO_FILE))?;
    let order: Vec<String> = read_json(&dir.join(AUTHOR_ORDER_FILE))?;
    let table = read_topic_table(&dir.join(TOPIC_SCORES_FILE), &order)?;

    let mut authors = Vec::with_capacity(order.len());
    for (author_idx, key) in order.iter().enumerate() {
        let (display_name, university_name, low_volume_flag) =
            info.get(key).ok_or_else(|| Error::UnknownAuthor {
                key: key.clone(),
            })?;
        let university =
            University::from_name(university_name).ok_or_else(|| Error::UnknownUniversity {
                key: key.clone(),
                university: university_name.clone(),
            })?;

        let scores = table
            .scores
            .iter()
            .map(|row| row[author_idx] / 100.0)
            .collect();
        authors.push(Author {
            key: key.clone(),
            display_name: display_name.clone(),
            university,
            low_volume: *low_volume_flag == 1,
            scores,
        });
    }

    tracing::debug!(
        authors = authors.len(),
        topics = table.rows.len(),
        "loaded dataset from {}",
        dir.display()
    );

    Ok(Dataset {
        authors,
        topic_rows: table.rows,
    })
}

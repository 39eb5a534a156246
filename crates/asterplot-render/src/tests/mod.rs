use asterplot_core::topics::TOPIC_COUNT;
use asterplot_core::{Author, Dataset, TopicRow, University};

mod chart;
mod svg;

fn uniform_rows() -> Vec<TopicRow> {
    (0..TOPIC_COUNT)
        .map(|topic| TopicRow {
            topic,
            weight: 100.0 / TOPIC_COUNT as f64,
        })
        .collect()
}

fn author(key: &str, name: &str, university: University, low_volume: bool, score: f64) -> Author {
    Author {
        key: key.to_string(),
        display_name: name.to_string(),
        university,
        low_volume,
        scores: vec![score; TOPIC_COUNT],
    }
}

fn dataset(authors: Vec<Author>) -> Dataset {
    Dataset {
        authors,
        topic_rows: uniform_rows(),
    }
}

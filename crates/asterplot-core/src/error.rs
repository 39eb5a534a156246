use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("author \"{key}\" is in the display order but missing from the author info map")]
    UnknownAuthor { key: String },

    #[error("author \"{key}\" has unknown university \"{university}\"")]
    UnknownUniversity { key: String, university: String },

    #[error("bad topic table in {path}: {message}")]
    TopicTable { path: PathBuf, message: String },
}

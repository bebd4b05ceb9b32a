use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Failed to load image '{path}': {message}")]
    ImageLoadError { path: PathBuf, message: String },

    #[error("Failed to read deck '{path}': {source}")]
    DeckRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid deck manifest '{path}': {source}")]
    DeckParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Deck '{path}' contains no slides")]
    EmptyDeck { path: PathBuf },

    #[error("Sidebar entry '{label}' targets slide {target} but the deck has {count} slides")]
    TargetOutOfRange {
        label: String,
        target: usize,
        count: usize,
    },

    #[error("Unsupported deck path '{path}': expected a .json manifest or an image folder")]
    UnsupportedDeckPath { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, VitrineError>;

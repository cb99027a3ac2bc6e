use thiserror::Error;

use super::models::{
    Person,
    Tense,
};

#[derive(Error, Debug)]
pub enum SubjunctError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown verb: {0}")]
    UnknownVerb(String),

    #[error("Tense not modeled: {0}")]
    UnsupportedTense(Tense),

    #[error("Irregular table for '{infinitive}' has no entry for {tense} / {person}")]
    IncompleteIrregularData { infinitive: String, tense: Tense, person: Person },

    #[error("Quality {0} outside 0..=5")]
    InvalidQuality(u8),

    #[error("Failed to load verb catalog: {0}")]
    FailedToLoadCatalog(String),

    #[error("SubjunctError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for SubjunctError {
    fn from(error: std::io::Error) -> Self {
        SubjunctError::Io(Box::new(error))
    }
}

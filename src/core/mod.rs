pub mod errors;
pub mod models;
pub mod utils;

pub use errors::SubjunctError;
pub use models::{
    Attempt,
    CellKey,
    Conjugation,
    ConjugationClass,
    IrregularTable,
    OrthographicChange,
    Person,
    RegularityClass,
    ReviewItem,
    StemChange,
    Tense,
    VerbEntry,
};

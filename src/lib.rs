pub mod catalog;
pub mod conjugation;
pub mod core;
pub mod srs;
pub mod validation;

pub use crate::catalog::VerbCatalog;
pub use crate::conjugation::ConjugationEngine;
pub use crate::core::{
    Attempt,
    CellKey,
    Conjugation,
    Person,
    RegularityClass,
    ReviewItem,
    SubjunctError,
    Tense,
    VerbEntry,
};
pub use crate::srs::{
    quality_from_attempt,
    schedule,
    select_due,
    MemoryStore,
    ReviewItemStore,
};
pub use crate::validation::{
    validate,
    Verdict,
};

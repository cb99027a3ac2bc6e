pub mod endings;
pub mod engine;
pub mod orthography;
pub mod stem;


pub use endings::ImperfectSet;
pub use engine::ConjugationEngine;

pub mod queue;
pub mod scheduler;
pub mod store;


pub use queue::select_due;
pub use scheduler::{
    quality_from_attempt,
    schedule,
};
pub use store::{
    MemoryStore,
    ReviewItemStore,
};

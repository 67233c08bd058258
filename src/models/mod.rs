pub mod card;
pub mod mover;
pub mod snapshot;

pub use card::*;
pub use mover::*;
pub use snapshot::*;

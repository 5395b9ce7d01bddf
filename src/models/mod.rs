pub mod pair;

pub use pair::{Field, TimePair};

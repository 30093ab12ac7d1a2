pub mod builders;

pub use builders::{d, ZoneBuilder};

pub mod draw;
pub mod roster;
pub mod store;

pub use roster::*;

// crates/core/src/lib.rs
pub mod envelope;
pub mod result;

pub use envelope::*;
pub use result::*;

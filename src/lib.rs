#![deny(clippy::unwrap_used)]

pub mod classify;
pub mod export;
pub mod import;
pub mod schema;
pub mod tokenize;

pub use import::{convert, Conversion, ConversionReport};

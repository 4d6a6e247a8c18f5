//! Format writer implementations

pub mod csv;
pub mod json;
pub mod text;

pub use csv::CsvFormatWriter;
pub use json::JsonFormatWriter;
pub use text::TextFormatWriter;

pub use crate::core::FormatWriter;

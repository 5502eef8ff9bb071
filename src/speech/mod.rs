pub mod formatter;

pub use formatter::{EnglishFormatter, ResponseFormatter, SpanishFormatter};

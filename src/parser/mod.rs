pub mod snapshot;

pub use crate::error::ParseError;
pub use snapshot::{parse_document_file, parse_document_str};

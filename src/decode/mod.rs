//! Response decoder module
//!
//! Extracts records from decoded JSON response bodies using a JSONPath
//! expression such as `$.pushes[*]`.

mod decoders;

pub use decoders::{extract_records, extract_string, JsonDecoder};

#[cfg(test)]
mod tests;

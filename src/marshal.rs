//! Host value decoding.
//!
//! Host bindings classify each incoming element into an [`Element`]; this
//! module turns a sequence of them into the `f64` data a
//! [`BufferStore`](crate::data::BufferStore) accepts.

use crate::error::{ExtError, Result};

/// A host value as seen by the numeric decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Int(i64),
    Float(f64),
    /// Anything else, carrying the host's type name for the error message.
    Other(String),
}

/// Decode a sequence of host elements into floats.
///
/// Stops at the first non-numeric element.
pub fn decode_numeric<I>(elements: I) -> Result<Vec<f64>>
where
    I: IntoIterator<Item = Element>,
{
    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| match element {
            Element::Int(v) => Ok(v as f64),
            Element::Float(v) => Ok(v),
            Element::Other(type_name) => Err(ExtError::InvalidElementType { index, type_name }),
        })
        .collect()
}

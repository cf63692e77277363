//! Positioned parse failure.

/// A syntax error at a character offset of the parsed text.
///
/// `index` counts Unicode scalar values from the start of the input, so it
/// can be used directly to point at the offending character.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{description} at character {index}")]
pub struct ParseError {
    pub description: String,
    pub index: usize,
}

impl ParseError {
    pub fn new(description: impl Into<String>, index: usize) -> Self {
        Self {
            description: description.into(),
            index,
        }
    }
}

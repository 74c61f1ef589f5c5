//! Parsing of go-to text input.
//!
//! The go-to entry accepts a single step (`5`) or an inclusive range
//! (`2-8`). Values are parsed as signed integers so that out-of-range
//! requests can be clamped by the player instead of rejected here; only
//! non-integer input is an error.

/// A parsed go-to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GotoRequest {
    /// Jump to a single step
    Seek(i64),
    /// Sweep from start to end inclusive
    Sweep(i64, i64),
}

/// Rejection of malformed go-to text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GotoParseError {
    #[error("empty go-to input")]
    Empty,

    #[error("invalid step input: '{0}'")]
    InvalidStep(String),

    #[error("invalid range input: '{0}'")]
    InvalidRange(String),
}

/// Parse go-to text into a request.
///
/// # Returns
/// `Seek` for a lone integer, `Sweep` for `start-end`, or an error
/// describing the rejected input.
pub fn parse_goto(input: &str) -> Result<GotoRequest, GotoParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GotoParseError::Empty);
    }

    match trimmed.split_once('-') {
        Some((start, end)) => {
            let start = start.trim().parse::<i64>();
            let end = end.trim().parse::<i64>();
            match (start, end) {
                (Ok(start), Ok(end)) => Ok(GotoRequest::Sweep(start, end)),
                _ => Err(GotoParseError::InvalidRange(trimmed.to_string())),
            }
        }
        None => trimmed
            .parse::<i64>()
            .map(GotoRequest::Seek)
            .map_err(|_| GotoParseError::InvalidStep(trimmed.to_string())),
    }
}

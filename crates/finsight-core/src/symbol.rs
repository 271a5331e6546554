//! Company symbol extraction.

use crate::error::{FinsightError, Result};

/// Position of the symbol among the `/`-separated pieces of the URL.
pub const SYMBOL_SEGMENT: usize = 2;

/// Returns the `/`-separated segment of `url` at [`SYMBOL_SEGMENT`].
///
/// Empty pieces count as segments, so for `screener.in/company/TCS/` this is
/// `TCS`, while for `https://host/TCS` it is `host`. The segment is not
/// validated further.
///
/// # Errors
/// [`FinsightError::MissingSegment`] when the URL splits into fewer pieces.
pub fn company_symbol(url: &str) -> Result<&str> {
    let mut segments = url.split('/');
    match segments.nth(SYMBOL_SEGMENT) {
        Some(symbol) => Ok(symbol),
        None => Err(FinsightError::MissingSegment {
            index: SYMBOL_SEGMENT,
            found: url.split('/').count(),
        }),
    }
}

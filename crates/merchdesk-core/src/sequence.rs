//! # Return-Number Sequencing
//!
//! Generates the human-readable codes shown on return documents
//! (`RET-00001` for customer returns, `VRT-00001` for vendor returns).
//!
//! ## The Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  next_return_number("RET", existing)                                    │
//! │                                                                         │
//! │  ["RET-00003", "RET-00001", "junk"]                                     │
//! │        │                                                                │
//! │        ▼  parse the numeric suffix after the last '-'                   │
//! │  [3, 1]              (unparsable entries are ignored)                   │
//! │        │                                                                │
//! │        ▼  max + 1, zero-padded to 5 digits                              │
//! │  "RET-00004"                                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Caveat
//! The scan-then-assign pair is NOT atomic on its own: two concurrent
//! creations scanning the same collection would compute the same "next"
//! number. The store layer runs generation and insertion under one mutex
//! acquisition, which makes the pair atomic per store instance. A
//! multi-writer deployment (several processes over shared storage) needs a
//! server-assigned sequence instead.

// =============================================================================
// Constants
// =============================================================================

/// Prefix for customer return numbers.
pub const CUSTOMER_RETURN_PREFIX: &str = "RET";

/// Prefix for vendor return numbers.
pub const VENDOR_RETURN_PREFIX: &str = "VRT";

/// Minimum digit width of the numeric suffix. Sequences past 99999 widen
/// rather than truncate.
pub const RETURN_NUMBER_WIDTH: usize = 5;

// =============================================================================
// Generation
// =============================================================================

/// Parses the numeric suffix of a return number.
///
/// Returns `None` for codes without a parsable suffix; the scan treats
/// those as if they were absent.
///
/// ## Example
/// ```rust
/// use merchdesk_core::sequence::parse_sequence;
///
/// assert_eq!(parse_sequence("RET-00042"), Some(42));
/// assert_eq!(parse_sequence("RET-"), None);
/// assert_eq!(parse_sequence("no-dash-here-x"), None);
/// ```
pub fn parse_sequence(number: &str) -> Option<u64> {
    let suffix = number.rsplit('-').next()?;
    suffix.parse().ok()
}

/// Computes the next return number: maximum existing suffix plus one,
/// zero-padded, with the given prefix.
///
/// An empty collection yields `{prefix}-00001`. Gaps are not reused; the
/// sequence is strictly increasing across sequential calls as long as every
/// generated number is inserted before the next scan.
///
/// ## Example
/// ```rust
/// use merchdesk_core::sequence::next_return_number;
///
/// let existing = ["RET-00002", "RET-00001"];
/// assert_eq!(
///     next_return_number("RET", existing.iter().copied()),
///     "RET-00003"
/// );
/// ```
pub fn next_return_number<'a>(
    prefix: &str,
    existing: impl IntoIterator<Item = &'a str>,
) -> String {
    let max = existing
        .into_iter()
        .filter_map(parse_sequence)
        .max()
        .unwrap_or(0);

    format!(
        "{}-{:0width$}",
        prefix,
        max + 1,
        width = RETURN_NUMBER_WIDTH
    )
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_number_on_empty_collection() {
        assert_eq!(
            next_return_number(CUSTOMER_RETURN_PREFIX, std::iter::empty()),
            "RET-00001"
        );
        assert_eq!(
            next_return_number(VENDOR_RETURN_PREFIX, std::iter::empty()),
            "VRT-00001"
        );
    }

    #[test]
    fn test_sequential_generation_is_strictly_increasing() {
        let mut numbers: Vec<String> = Vec::new();

        for _ in 0..3 {
            let next = next_return_number(
                CUSTOMER_RETURN_PREFIX,
                numbers.iter().map(String::as_str),
            );
            numbers.push(next);
        }

        assert_eq!(numbers, vec!["RET-00001", "RET-00002", "RET-00003"]);
    }

    #[test]
    fn test_scan_uses_maximum_regardless_of_order() {
        // Newest-first storage means the maximum is not necessarily first
        let existing = ["RET-00002", "RET-00007", "RET-00001"];
        assert_eq!(
            next_return_number("RET", existing.iter().copied()),
            "RET-00008"
        );
    }

    #[test]
    fn test_unparsable_numbers_are_ignored() {
        let existing = ["RET-00004", "legacy-code", "RET-"];
        assert_eq!(
            next_return_number("RET", existing.iter().copied()),
            "RET-00005"
        );

        // A collection of only junk behaves like an empty one
        let junk = ["not-a-number"];
        assert_eq!(next_return_number("RET", junk.iter().copied()), "RET-00001");
    }

    #[test]
    fn test_numbers_widen_past_padding() {
        let existing = ["RET-99999"];
        assert_eq!(
            next_return_number("RET", existing.iter().copied()),
            "RET-100000"
        );
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(parse_sequence("VRT-00010"), Some(10));
        assert_eq!(parse_sequence("RET-100000"), Some(100_000));
        assert_eq!(parse_sequence(""), None);
        assert_eq!(parse_sequence("RET-x1"), None);
    }
}

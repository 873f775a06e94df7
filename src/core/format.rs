//! Layer 3: Display-number formatting
//!
//! Pure mapping from (classification, year, sequence) to the
//! human-readable register number.

use super::counter::SeqNo;
use super::domain::Classification;

/// Minimum digit width of the sequence segment. Wider numbers grow
/// past the pad, they are never truncated.
const SEQ_PAD_WIDTH: usize = 4;

/// Format a display number: `<PREFIX>/<year>/<zero-padded seq>`.
///
/// Deterministic, total, no side effects.
pub fn display_number(classification: Classification, year: i32, seq: SeqNo) -> String {
    format!(
        "{}/{}/{:0width$}",
        classification.prefix(),
        year,
        seq.get(),
        width = SEQ_PAD_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(n: u64) -> SeqNo {
        SeqNo::from_u64(n).unwrap()
    }

    #[test]
    fn pads_to_four_digits() {
        assert_eq!(
            display_number(Classification::Outgoing, 2024, seq(7)),
            "OUT/2024/0007"
        );
        assert_eq!(
            display_number(Classification::Certificate, 2023, seq(1)),
            "KET/2023/0001"
        );
    }

    #[test]
    fn wide_numbers_grow_without_truncation() {
        assert_eq!(
            display_number(Classification::Outgoing, 2024, seq(12345)),
            "OUT/2024/12345"
        );
        assert_eq!(
            display_number(Classification::Outgoing, 2024, seq(9999)),
            "OUT/2024/9999"
        );
        assert_eq!(
            display_number(Classification::Outgoing, 2024, seq(10000)),
            "OUT/2024/10000"
        );
    }
}

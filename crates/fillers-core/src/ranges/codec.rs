//! Compact encoding of integer sets
//!
//! A set of episode numbers is stored as a list of isolated values and
//! half-open `[start, end)` spans covering runs of consecutive values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One entry of a compressed integer set.
///
/// Serialized untagged, so a list reads naturally in TOML or JSON:
/// `[2, [5, 9], 12]` is `{2, 5, 6, 7, 8, 12}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressedRange {
    /// A single isolated value
    Single(u32),
    /// A run of consecutive values, `start` inclusive, `end` exclusive
    Span(u32, u32),
}

impl CompressedRange {
    /// Number of values this entry covers.
    pub fn len(&self) -> usize {
        match *self {
            CompressedRange::Single(_) => 1,
            CompressedRange::Span(start, end) => end.saturating_sub(start) as usize,
        }
    }

    /// Whether this entry covers no values (only a malformed span can).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Compress a collection of integers into singletons and half-open spans.
///
/// Input order and duplicates do not matter. A run of two or more
/// consecutive values becomes `Span(first, last + 1)`; an isolated value
/// stays a `Single`. A run ending at `u32::MAX` has no representable
/// exclusive end, so its last value is emitted as a trailing
/// `Single(u32::MAX)`.
///
/// # Examples
/// ```
/// use fillers_core::ranges::{compress, CompressedRange};
///
/// assert_eq!(
///     compress([7, 2, 3, 3, 4]),
///     vec![CompressedRange::Span(2, 5), CompressedRange::Single(7)]
/// );
/// assert!(compress(Vec::<u32>::new()).is_empty());
/// ```
pub fn compress<I>(numbers: I) -> Vec<CompressedRange>
where
    I: IntoIterator<Item = u32>,
{
    let sorted: BTreeSet<u32> = numbers.into_iter().collect();
    let mut iter = sorted.into_iter();

    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut compressed = Vec::new();
    let mut start = first;
    let mut end = first;

    for n in iter {
        if end.checked_add(1) == Some(n) {
            end = n;
        } else {
            push_run(&mut compressed, start, end);
            start = n;
            end = n;
        }
    }
    push_run(&mut compressed, start, end);

    compressed
}

fn push_run(compressed: &mut Vec<CompressedRange>, start: u32, last: u32) {
    if start == last {
        compressed.push(CompressedRange::Single(start));
        return;
    }
    match last.checked_add(1) {
        Some(end) => compressed.push(CompressedRange::Span(start, end)),
        None => {
            // `[start, u32::MAX)` plus the maximum itself
            push_run(compressed, start, last - 1);
            compressed.push(CompressedRange::Single(last));
        }
    }
}

/// Expand compressed entries back into the set of integers they cover.
///
/// A span whose end is not past its start covers nothing.
///
/// # Examples
/// ```
/// use fillers_core::ranges::{decompress, CompressedRange};
///
/// let set = decompress(&[CompressedRange::Single(1), CompressedRange::Span(4, 7)]);
/// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 4, 5, 6]);
/// ```
pub fn decompress(items: &[CompressedRange]) -> BTreeSet<u32> {
    let mut decompressed = BTreeSet::new();
    for item in items {
        match *item {
            CompressedRange::Single(n) => {
                decompressed.insert(n);
            }
            CompressedRange::Span(start, end) => decompressed.extend(start..end),
        }
    }
    decompressed
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use CompressedRange::{Single, Span};

    #[test]
    fn test_compress_empty() {
        assert!(compress(Vec::new()).is_empty());
    }

    #[test]
    fn test_compress_single_value() {
        assert_eq!(compress([5]), vec![Single(5)]);
    }

    #[test]
    fn test_compress_pair_becomes_span() {
        assert_eq!(compress([2, 3]), vec![Span(2, 4)]);
    }

    #[test]
    fn test_compress_mixed_runs() {
        assert_eq!(
            compress([2, 3, 7, 12]),
            vec![Span(2, 4), Single(7), Single(12)]
        );
        assert_eq!(
            compress([1, 2, 3, 5, 8, 9]),
            vec![Span(1, 4), Single(5), Span(8, 10)]
        );
    }

    #[test]
    fn test_compress_unsorted_with_duplicates() {
        assert_eq!(
            compress([9, 1, 8, 2, 2, 1, 9, 5]),
            vec![Span(1, 3), Single(5), Span(8, 10)]
        );
    }

    #[test]
    fn test_compress_zero_is_kept() {
        assert_eq!(compress([0, 1]), vec![Span(0, 2)]);
    }

    #[test]
    fn test_compress_pair_at_u32_max() {
        let numbers = [u32::MAX - 1, u32::MAX];
        let compressed = compress(numbers);
        assert_eq!(compressed, vec![Single(u32::MAX - 1), Single(u32::MAX)]);
        assert_eq!(
            decompress(&compressed).into_iter().collect::<Vec<_>>(),
            numbers.to_vec()
        );
    }

    #[test]
    fn test_compress_run_ending_at_u32_max() {
        let compressed = compress((u32::MAX - 3)..=u32::MAX);
        assert_eq!(
            compressed,
            vec![Span(u32::MAX - 3, u32::MAX), Single(u32::MAX)]
        );
        assert_eq!(decompress(&compressed).len(), 4);
        assert_eq!(compress(decompress(&compressed)), compressed);
    }

    #[test]
    fn test_compress_lone_u32_max() {
        assert_eq!(compress([3, u32::MAX]), vec![Single(3), Single(u32::MAX)]);
    }

    #[test]
    fn test_decompress_empty() {
        assert!(decompress(&[]).is_empty());
    }

    #[test]
    fn test_decompress_singles_and_spans() {
        let set = decompress(&[Single(2), Span(5, 8), Single(12)]);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![2, 5, 6, 7, 12]);
    }

    #[test]
    fn test_decompress_overlapping_entries() {
        let set = decompress(&[Span(1, 5), Span(3, 7), Single(4)]);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decompress_malformed_span_is_empty() {
        assert!(decompress(&[Span(5, 5), Span(9, 3)]).is_empty());
    }

    #[test]
    fn test_compressed_range_len() {
        assert_eq!(Single(3).len(), 1);
        assert_eq!(Span(2, 5).len(), 3);
        assert!(Span(5, 2).is_empty());
    }

    #[test]
    fn test_compressed_range_json_shape() {
        let json = serde_json::to_string(&vec![Single(2), Span(5, 9)]).unwrap();
        assert_eq!(json, "[2,[5,9]]");

        let parsed: Vec<CompressedRange> = serde_json::from_str("[1, [3, 6], 10]").unwrap();
        assert_eq!(parsed, vec![Single(1), Span(3, 6), Single(10)]);
    }

    proptest! {
        #[test]
        fn prop_decompress_inverts_compress(
            numbers in prop::collection::vec(0u32..2_000, 0..200)
        ) {
            let expected: BTreeSet<u32> = numbers.iter().copied().collect();
            prop_assert_eq!(decompress(&compress(numbers)), expected);
        }

        #[test]
        fn prop_compress_is_a_fixed_point(
            numbers in prop::collection::vec(0u32..2_000, 0..200)
        ) {
            let once = compress(numbers);
            let again = compress(decompress(&once));
            prop_assert_eq!(again, once);
        }

        #[test]
        fn prop_round_trip_near_u32_max(
            numbers in prop::collection::vec((u32::MAX - 64)..=u32::MAX, 0..80)
        ) {
            let expected: BTreeSet<u32> = numbers.iter().copied().collect();
            let once = compress(numbers);
            prop_assert_eq!(decompress(&once), expected);
            prop_assert_eq!(compress(decompress(&once)), once);
        }

        #[test]
        fn prop_compress_ignores_order_and_duplicates(
            numbers in prop::collection::vec(0u32..500, 0..100)
        ) {
            let mut shuffled = numbers.clone();
            shuffled.reverse();
            shuffled.extend(numbers.iter().copied());
            prop_assert_eq!(compress(shuffled), compress(numbers));
        }

        #[test]
        fn prop_compressed_entries_are_disjoint_and_separated(
            numbers in prop::collection::vec(0u32..2_000, 1..200)
        ) {
            let compressed = compress(numbers);
            let bounds: Vec<(u32, u32)> = compressed
                .iter()
                .map(|item| match *item {
                    Single(n) => (n, n + 1),
                    Span(start, end) => {
                        assert!(end - start >= 2, "spans cover at least two values");
                        (start, end)
                    }
                })
                .collect();
            for pair in bounds.windows(2) {
                // a gap of at least one value separates neighbouring entries
                prop_assert!(pair[0].1 < pair[1].0);
            }
        }
    }
}

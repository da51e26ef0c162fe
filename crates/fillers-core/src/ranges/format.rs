//! Human-readable range strings
//!
//! Turns `[2, 3, 4, 7]` into `"2-4, 7"`. Unlike the codec, runs are shown
//! with an inclusive end since that is what a viewer reads.

/// Format a sorted, duplicate-free list of integers as comma-separated runs.
///
/// A run of one value renders as `"N"`, a longer run as `"start-end"`.
/// Unsorted input is not rejected; it simply produces more, shorter runs.
///
/// # Examples
/// ```
/// use fillers_core::ranges::format_ranges;
///
/// assert_eq!(format_ranges(&[2, 3, 5]), "2-3, 5");
/// assert_eq!(format_ranges(&[]), "");
/// ```
pub fn format_ranges(numbers: &[u32]) -> String {
    let Some((&first, rest)) = numbers.split_first() else {
        return String::new();
    };

    let mut runs: Vec<String> = Vec::new();
    let mut start = first;
    let mut end = first;

    for &n in rest {
        if end.checked_add(1) == Some(n) {
            end = n;
        } else {
            runs.push(format_run(start, end));
            start = n;
            end = n;
        }
    }
    runs.push(format_run(start, end));

    runs.join(", ")
}

fn format_run(start: u32, end: u32) -> String {
    if start == end {
        start.to_string()
    } else {
        format!("{}-{}", start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ranges_empty() {
        assert_eq!(format_ranges(&[]), "");
    }

    #[test]
    fn test_format_ranges_single() {
        assert_eq!(format_ranges(&[2]), "2");
    }

    #[test]
    fn test_format_ranges_pair() {
        assert_eq!(format_ranges(&[2, 3]), "2-3");
    }

    #[test]
    fn test_format_ranges_run_and_single() {
        assert_eq!(format_ranges(&[2, 3, 5]), "2-3, 5");
    }

    #[test]
    fn test_format_ranges_full_run() {
        assert_eq!(format_ranges(&[1, 2, 3, 4, 5]), "1-5");
    }

    #[test]
    fn test_format_ranges_disjoint() {
        assert_eq!(format_ranges(&[2, 4]), "2, 4");
        assert_eq!(format_ranges(&[1, 3, 5, 6, 7, 10]), "1, 3, 5-7, 10");
    }

    #[test]
    fn test_format_ranges_unsorted_input_splits_runs() {
        assert_eq!(format_ranges(&[3, 2]), "3, 2");
    }

    #[test]
    fn test_format_ranges_at_u32_max() {
        let max = u32::MAX;
        assert_eq!(format_ranges(&[max - 1, max]), format!("{}-{}", max - 1, max));
        assert_eq!(format_ranges(&[max, 0]), format!("{}, 0", max));
    }
}

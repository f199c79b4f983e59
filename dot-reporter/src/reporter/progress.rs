/// Number of characters `value` occupies when printed in base 10.
pub fn digit_width(value: usize) -> usize {
    value.checked_ilog10().map_or(1, |log| log as usize + 1)
}

/// Percentage of `done` over `total`, rounded half up. An empty suite is 0%.
pub fn percentage(done: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }

    let done = done.min(total) as u128;
    let total = total as u128;
    ((200 * done + total) / (2 * total)) as usize
}

/// Build the progress suffix printed at line wraps and at the end of a suite.
///
/// ```text
///  1 / 10 ( 10%)
/// 10 / 10 (100%)
/// ```
///
/// `done` is clamped to `total`, and the done count is padded to the
/// width of `total` so every suffix of a suite has the same length.
pub fn format_progress(done: usize, total: usize) -> String {
    let done = done.min(total);
    let width = digit_width(total);

    format!(
        " {:>width$} / {} ({:>3}%)",
        done,
        total,
        percentage(done, total),
        width = width
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_digit_width() {
        assert_eq!(1, digit_width(0));
        assert_eq!(1, digit_width(9));
        assert_eq!(2, digit_width(10));
        assert_eq!(3, digit_width(100));
        assert_eq!(4, digit_width(1234));
    }

    #[test]
    fn test_matches_documented_lines() {
        assert_eq!(" 10 / 80 ( 13%)", format_progress(10, 80));
        assert_eq!(" 20 / 80 ( 25%)", format_progress(20, 80));
        assert_eq!(" 30 / 80 ( 38%)", format_progress(30, 80));
        assert_eq!(" 50 / 80 ( 63%)", format_progress(50, 80));
        assert_eq!(" 80 / 80 (100%)", format_progress(80, 80));
    }

    #[test]
    fn test_pads_done_to_total_width() {
        assert_eq!("  1 / 10 ( 10%)", format_progress(1, 10));
        assert_eq!("    7 / 1000 (  1%)", format_progress(7, 1000));
    }

    #[test]
    fn test_wrap_points_of_twenty_five() {
        assert_eq!(" 10 / 25 ( 40%)", format_progress(10, 25));
        assert_eq!(" 20 / 25 ( 80%)", format_progress(20, 25));
        assert_eq!(" 25 / 25 (100%)", format_progress(25, 25));
    }

    #[test]
    fn test_clamps_done_to_total() {
        assert_eq!(format_progress(5, 5), format_progress(9, 5));
    }

    #[test]
    fn test_empty_suite_is_zero_percent() {
        assert_eq!(" 0 / 0 (  0%)", format_progress(0, 0));
        assert_eq!(" 0 / 0 (  0%)", format_progress(3, 0));
    }

    #[test]
    fn test_nothing_done_is_zero_percent() {
        assert_eq!("  0 / 12 (  0%)", format_progress(0, 12));
    }

    #[test]
    fn test_rounds_half_up() {
        assert_eq!(13, percentage(1, 8));
        assert_eq!(1, percentage(1, 200));
        assert_eq!(0, percentage(1, 201));
        assert_eq!(67, percentage(2, 3));
    }

    #[test]
    fn test_large_totals_stay_exact() {
        assert_eq!(50, percentage(usize::MAX / 2 + 1, usize::MAX));
        assert_eq!(100, percentage(usize::MAX, usize::MAX));
    }

    proptest! {
        #[test]
        fn prop_single_percent_and_padded_count(total in 1usize..100_000, seed in any::<usize>()) {
            let done = seed % (total + 1);
            let line = format_progress(done, total);

            prop_assert_eq!(1, line.matches('%').count());

            let (count, _) = line[1..].split_once(" / ").unwrap();
            prop_assert_eq!(digit_width(total), count.len());
            prop_assert_eq!(done, count.trim_start().parse::<usize>().unwrap());
        }

        #[test]
        fn prop_complete_is_one_hundred(total in 1usize..1_000_000) {
            prop_assert!(format_progress(total, total).ends_with("(100%)"));
        }

        #[test]
        fn prop_nothing_done_is_zero(total in 1usize..1_000_000) {
            prop_assert!(format_progress(0, total).ends_with("(  0%)"));
        }

        #[test]
        fn prop_suffix_length_is_fixed_per_total(total in 0usize..100_000, a in any::<usize>(), b in any::<usize>()) {
            let first = format_progress(a % (total + 1), total);
            let second = format_progress(b % (total + 1), total);
            prop_assert_eq!(first.len(), second.len());
        }

        #[test]
        fn prop_is_pure(done in 0usize..10_000, total in 0usize..10_000) {
            prop_assert_eq!(format_progress(done, total), format_progress(done, total));
        }
    }
}

use super::*;
use crate::table::parse_lines;
use proptest::prelude::*;

fn ramp(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

#[test]
fn test_threshold_at_or_above_length_is_noop() {
    let xs = ramp(5);
    let ys = vec![3.0, 1.0, 4.0, 1.0, 5.0];

    for threshold in [5, 6, 100] {
        let (dx, dy) = lttb(&xs, &ys, threshold);
        assert_eq!(dx, xs);
        assert_eq!(dy, ys);
    }
}

#[test]
fn test_zero_threshold_is_noop() {
    let xs = ramp(50);
    let ys = ramp(50);
    let (dx, dy) = lttb(&xs, &ys, 0);
    assert_eq!(dx.len(), 50);
    assert_eq!(dy, ys);
}

#[test]
fn test_empty_input() {
    let (dx, dy) = lttb(&[], &[], 10);
    assert!(dx.is_empty());
    assert!(dy.is_empty());
    assert!(lttb_indices(&[], &[], 3).is_empty());
}

#[test]
fn test_mismatched_lengths_are_returned_unchanged() {
    let (dx, dy) = lttb(&[0.0, 1.0, 2.0], &[1.0, 2.0], 2);
    assert_eq!(dx, [0.0, 1.0, 2.0]);
    assert_eq!(dy, [1.0, 2.0]);
}

#[test]
fn test_reference_selection() {
    // 7 points, threshold 4: bucket width 2.5, buckets [1, 3) and [3, 6)
    let xs = ramp(7);
    let ys = vec![0.0, 5.0, 1.0, 0.0, 0.0, 8.0, 0.0];

    assert_eq!(lttb_indices(&xs, &ys, 4), [0, 1, 5, 6]);
    let (dx, dy) = lttb(&xs, &ys, 4);
    assert_eq!(dx, [0.0, 1.0, 5.0, 6.0]);
    assert_eq!(dy, [0.0, 5.0, 8.0, 0.0]);
}

#[test]
fn test_threshold_three_keeps_peak() {
    let xs = ramp(5);
    let ys = vec![0.0, 1.0, 4.0, 1.0, 0.0];
    let (dx, dy) = lttb(&xs, &ys, 3);
    assert_eq!(dx, [0.0, 2.0, 4.0]);
    assert_eq!(dy, [0.0, 4.0, 0.0]);
}

#[test]
fn test_ties_keep_first_point_of_bucket() {
    // Collinear input: every triangle has zero area
    let xs = ramp(10);
    let ys = vec![1.0; 10];
    assert_eq!(lttb_indices(&xs, &ys, 4), [0, 1, 5, 9]);
}

#[test]
fn test_thresholds_one_and_two_keep_end_points() {
    let xs = ramp(10);
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();

    for threshold in [1, 2] {
        let (dx, dy) = lttb(&xs, &ys, threshold);
        assert_eq!(dx, [0.0, 9.0]);
        assert_eq!(dy, [0.0, 81.0]);
    }
}

#[test]
fn test_threshold_one_below_length() {
    let xs = ramp(10);
    let ys: Vec<f64> = xs.iter().map(|x| (x * 1.3).sin()).collect();

    let indices = lttb_indices(&xs, &ys, 9);
    assert_eq!(indices.len(), 9);
    assert_eq!(indices[0], 0);
    assert_eq!(indices[8], 9);
    assert!(indices.windows(2).all(|w| w[0] < w[1]), "{indices:?}");
}

#[test]
fn test_large_series_budget() {
    let xs = ramp(100_000);
    let ys: Vec<f64> = xs.iter().map(|x| (x / 500.0).sin() * 10.0).collect();

    let (dx, dy) = lttb(&xs, &ys, DEFAULT_THRESHOLD);
    assert_eq!(dx.len(), DEFAULT_THRESHOLD);
    assert_eq!(dy.len(), DEFAULT_THRESHOLD);
    assert_eq!(dx[0], 0.0);
    assert_eq!(dx[DEFAULT_THRESHOLD - 1], 99_999.0);
}

#[test]
fn test_spike_survives() {
    let xs = ramp(1000);
    let mut ys = vec![0.0; 1000];
    ys[437] = 100.0;

    let (dx, dy) = lttb(&xs, &ys, 20);
    assert!(dy.contains(&100.0));
    assert!(dx.contains(&437.0));
}

#[test]
fn test_downsample_column_drops_nulls() {
    let time = [0.0, 1.0, 2.0, 3.0];
    let column = [Some(1.0), None, Some(3.0), None];

    let series = downsample_column(&time, &column, 10);
    assert_eq!(series.xs, [0.0, 2.0]);
    assert_eq!(series.ys, [1.0, 3.0]);
    assert_eq!(series.points().collect::<Vec<_>>(), [(0.0, 1.0), (2.0, 3.0)]);
}

#[test]
fn test_downsample_table() {
    let lines = ["Time A B C", "s m N x", "0 10 1 -", "1 20 2 -", "2 30 3 -"];
    let (table, _) = parse_lines(lines, "t").unwrap();

    let series = downsample_table(&table, 10);
    assert_eq!(series.len(), 2);
    assert_eq!(series["A"].xs, [0.0, 1.0, 2.0]);
    assert_eq!(series["A"].ys, [10.0, 20.0, 30.0]);
    assert_eq!(series["B"].ys, [1.0, 2.0, 3.0]);
    assert!(!series.contains_key("C"));
}

#[test]
fn test_downsample_table_reduces_every_column() {
    let mut lines = vec!["Time A B".to_string(), "s m N".to_string()];
    for i in 0..500 {
        lines.push(format!("{} {} {}", i, i % 13, (i as f64).sqrt()));
    }
    let (table, _) = parse_lines(&lines, "t").unwrap();

    let series = downsample_table(&table, 50);
    for name in ["A", "B"] {
        assert_eq!(series[name].len(), 50);
        assert_eq!(series[name].xs[0], 0.0);
        assert_eq!(series[name].xs[49], 499.0);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

fn series_strategy() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    prop::collection::vec(-1.0e6f64..1.0e6f64, 0..400).prop_map(|ys| (ramp(ys.len()), ys))
}

proptest! {
    /// Output never exceeds the budget, and hits it exactly above two points
    #[test]
    fn test_budget((xs, ys) in series_strategy(), threshold in 0usize..500) {
        let (dx, dy) = lttb(&xs, &ys, threshold);
        prop_assert_eq!(dx.len(), dy.len());

        let n = xs.len();
        if threshold == 0 || threshold >= n {
            prop_assert_eq!(dx.len(), n);
        } else if threshold <= 2 {
            prop_assert_eq!(dx.len(), 2);
        } else {
            prop_assert_eq!(dx.len(), threshold);
        }
    }

    /// First and last input points are always kept
    #[test]
    fn test_anchors((xs, ys) in series_strategy(), threshold in 1usize..500) {
        prop_assume!(xs.len() >= 2);
        let (dx, dy) = lttb(&xs, &ys, threshold);
        let last = xs.len() - 1;
        prop_assert_eq!(dx[0], xs[0]);
        prop_assert_eq!(dy[0], ys[0]);
        prop_assert_eq!(dx[dx.len() - 1], xs[last]);
        prop_assert_eq!(dy[dy.len() - 1], ys[last]);
    }

    /// Kept points are a strictly ordered subset of the input
    #[test]
    fn test_selection_is_ordered_subset((xs, ys) in series_strategy(), threshold in 1usize..500) {
        let indices = lttb_indices(&xs, &ys, threshold);
        prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(indices.iter().all(|&i| i < xs.len()));
    }

    /// Identical input gives bit-identical output
    #[test]
    fn test_deterministic((xs, ys) in series_strategy(), threshold in 0usize..500) {
        let (ax, ay) = lttb(&xs, &ys, threshold);
        let (bx, by) = lttb(&xs, &ys, threshold);
        let bits = |v: &[f64]| v.iter().map(|f| f.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(&ax), bits(&bx));
        prop_assert_eq!(bits(&ay), bits(&by));
    }
}

//! Largest-Triangle-Three-Buckets (LTTB) downsampling
//!
//! LTTB reduces a sorted time series to a fixed point budget while keeping
//! its visual silhouette: peaks, troughs and steep edges survive, flat runs
//! collapse. It is a heuristic for display, not a lossless summary.
//!
//! Reference: Sveinn Steinarsson, "Downsampling Time Series for Visual
//! Representation", 2013.
//!
//! ## Bucket Layout
//!
//! For `n` input points and a threshold `t`, the first and last points are
//! kept verbatim and the `n - 2` interior points are split into `t - 2`
//! buckets of fractional width `(n - 2) / (t - 2)`. Bucket `i` covers the
//! indices `floor(1 + i * w) .. floor(1 + (i + 1) * w)`. The floor
//! arithmetic is evaluated in exactly this order so that the selected
//! points are reproducible bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use outplot::downsample::lttb;
//!
//! let xs: Vec<f64> = (0..1000).map(f64::from).collect();
//! let ys: Vec<f64> = xs.iter().map(|x| (x / 50.0).sin()).collect();
//!
//! let (dx, dy) = lttb(&xs, &ys, 100);
//! assert_eq!(dx.len(), 100);
//! assert_eq!((dx[0], dx[99]), (0.0, 999.0));
//! assert_eq!(dy.len(), 100);
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::table::ParsedTable;

#[cfg(test)]
mod tests;

/// Default point budget per series
pub const DEFAULT_THRESHOLD: usize = 2000;

/// Reduced (x, y) series for one (file, column) pair
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DownsampledSeries {
    /// Time values
    pub xs: Vec<f64>,
    /// Sample values, aligned to `xs`
    pub ys: Vec<f64>,
}

impl DownsampledSeries {
    /// Number of points
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the series has no points
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Iterate over `(time, value)` pairs
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// Downsample `(xs, ys)` to at most `threshold` points
///
/// `xs` is expected to be sorted ascending; it is never re-sorted, and
/// unsorted input only degrades the visual result.
///
/// - `threshold == 0` or `threshold >= n`: the input is returned unchanged.
/// - Inputs of different lengths are returned unchanged.
/// - Otherwise the output has exactly `threshold` points when
///   `threshold > 2`, and only the two end points for thresholds 1 and 2.
pub fn lttb(xs: &[f64], ys: &[f64], threshold: usize) -> (Vec<f64>, Vec<f64>) {
    let n = xs.len();
    if n != ys.len() || threshold == 0 || threshold >= n {
        return (xs.to_vec(), ys.to_vec());
    }

    let selected = lttb_indices(xs, ys, threshold);
    (
        selected.iter().map(|&i| xs[i]).collect(),
        selected.iter().map(|&i| ys[i]).collect(),
    )
}

/// Indices of the points LTTB keeps, in ascending order
///
/// Applies the same no-op rules as [`lttb`]: when no reduction happens all
/// indices are returned.
pub fn lttb_indices(xs: &[f64], ys: &[f64], threshold: usize) -> Vec<usize> {
    let n = xs.len().min(ys.len());
    if xs.len() != ys.len() || threshold == 0 || threshold >= n {
        return (0..xs.len()).collect();
    }

    // n > threshold >= 1, so n >= 2
    let buckets = threshold.saturating_sub(2);
    let bucket_size = (n - 2) as f64 / buckets as f64;

    let mut sampled = Vec::with_capacity(threshold.max(2));
    sampled.push(0);

    let mut a = 0;
    for i in 0..buckets {
        let (start, end) = bucket_bounds(i, bucket_size, n);
        let (next_start, next_end) = bucket_bounds(i + 1, bucket_size, n);
        let (avg_x, avg_y) = centroid(xs, ys, next_start, next_end);

        let (ax, ay) = (xs[a], ys[a]);
        let mut max_area = -1.0;
        let mut max_index = start.min(n - 1);

        for j in start..end {
            let area = ((ax - avg_x) * (ys[j] - ay) - (ax - xs[j]) * (avg_y - ay)).abs() * 0.5;
            if area > max_area {
                max_area = area;
                max_index = j;
            }
        }

        sampled.push(max_index);
        a = max_index;
    }

    sampled.push(n - 1);
    sampled
}

/// Half-open index range of bucket `i`, clamped to the input length
fn bucket_bounds(i: usize, bucket_size: f64, n: usize) -> (usize, usize) {
    let start = (1.0 + i as f64 * bucket_size).floor() as usize;
    let end = (1.0 + (i + 1) as f64 * bucket_size).floor() as usize;
    (start.min(n), end.min(n))
}

/// Mean point of `start..end`; an empty range falls back to the last point
fn centroid(xs: &[f64], ys: &[f64], start: usize, end: usize) -> (f64, f64) {
    if start >= end {
        let last = xs.len() - 1;
        return (xs[last], ys[last]);
    }
    let count = (end - start) as f64;
    let sum_x = xs[start..end].iter().fold(0.0, |acc, x| acc + x);
    let sum_y = ys[start..end].iter().fold(0.0, |acc, y| acc + y);
    (sum_x / count, sum_y / count)
}

/// Downsample one nullable column against its time axis
///
/// Null samples are dropped together with their timestamps before
/// reduction, so gaps are bridged rather than plotted as zero.
pub fn downsample_column(
    time: &[f64],
    column: &[Option<f64>],
    threshold: usize,
) -> DownsampledSeries {
    let (xs, ys): (Vec<f64>, Vec<f64>) = time
        .iter()
        .zip(column)
        .filter_map(|(&t, sample)| sample.map(|v| (t, v)))
        .unzip();

    if threshold == 0 || threshold >= xs.len() {
        return DownsampledSeries { xs, ys };
    }
    let (xs, ys) = lttb(&xs, &ys, threshold);
    DownsampledSeries { xs, ys }
}

/// Downsample every value column of a table
///
/// Columns without a single non-null sample are left out. Columns are
/// reduced in parallel when the `parallel` feature is enabled.
pub fn downsample_table(
    table: &ParsedTable,
    threshold: usize,
) -> HashMap<String, DownsampledSeries> {
    let reduce = |name: &String| {
        let column = table.columns.get(name)?;
        let series = downsample_column(&table.time, column, threshold);
        (!series.is_empty()).then(|| (name.clone(), series))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        table.headers.par_iter().filter_map(reduce).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        table.headers.iter().filter_map(reduce).collect()
    }
}

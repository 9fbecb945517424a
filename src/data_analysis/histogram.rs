// src/data_analysis/histogram.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt;

/// Equal-width histogram over the finite values of a column.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn bin_count(&self) -> usize {
        self.counts.len()
    }

    /// Width of one bin. Divides before subtracting so extreme spans stay finite.
    pub fn bin_width(&self) -> f64 {
        let n = self.counts.len() as f64;
        self.max / n - self.min / n
    }

    /// Lower and upper edge of bin `index`.
    pub fn bin_edges(&self, index: usize) -> (f64, f64) {
        (self.edge(index), self.edge(index + 1))
    }

    fn edge(&self, index: usize) -> f64 {
        let t = index as f64 / self.counts.len() as f64;
        self.min * (1.0 - t) + self.max * t
    }

    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

/// Bins `values` into exactly `bins` equal-width bins spanning their min..max.
///
/// Non-finite values are dropped. The last bin is closed so the maximum lands in it.
/// An empty or single-valued input is widened to +/- 0.5 around its value (0 when empty).
pub fn compute_histogram(values: &Array1<f64>, bins: usize) -> Histogram {
    let bins = bins.max(1);
    let finite: Array1<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();

    let (mut min, mut max) = match (finite.min(), finite.max()) {
        (Ok(lo), Ok(hi)) => (*lo, *hi),
        _ => (0.0, 0.0),
    };
    if (max - min).abs() < 1e-12 {
        min -= 0.5;
        max += 0.5;
    }

    // Halved so that max - min cannot overflow for values near f64::MAX.
    let half_span = max * 0.5 - min * 0.5;
    let mut counts = vec![0usize; bins];
    for &v in finite.iter() {
        let fraction = (v * 0.5 - min * 0.5) / half_span;
        let idx = ((fraction * bins as f64) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Histogram { min, max, counts }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_bin_count_is_fixed() {
        for n in [0usize, 1, 3, 40, 1000] {
            let values: Array1<f64> = (0..n).map(|i| i as f64 * 0.37).collect();
            let hist = compute_histogram(&values, 40);
            assert_eq!(hist.bin_count(), 40, "for {n} values");
            assert_eq!(hist.counts.iter().sum::<usize>(), n);
        }
    }

    #[test]
    fn test_extremes_fall_in_outer_bins() {
        let hist = compute_histogram(&array![0.0, 10.0, 5.0], 10);
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[9], 1);
        assert_eq!(hist.counts[5], 1);
        let (lo, hi) = hist.bin_edges(5);
        assert!((lo - 5.0).abs() < 1e-12);
        assert!((hi - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_span_near_f64_max_stays_finite() {
        let hist = compute_histogram(&array![-1e308, 0.0, 1e308], 40);
        assert!(hist.bin_width().is_finite());
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[20], 1);
        assert_eq!(hist.counts[39], 1);
        for i in 0..hist.bin_count() {
            let (lo, hi) = hist.bin_edges(i);
            assert!(lo.is_finite() && hi.is_finite() && lo < hi);
        }
    }

    #[test]
    fn test_constant_column_is_widened() {
        let hist = compute_histogram(&array![2.0, 2.0, 2.0], 40);
        assert_eq!(hist.min, 1.5);
        assert_eq!(hist.max, 2.5);
        assert_eq!(hist.max_count(), 3);
    }

    #[test]
    fn test_non_finite_values_are_dropped() {
        let hist = compute_histogram(&array![1.0, f64::NAN, 3.0, f64::INFINITY], 4);
        assert_eq!(hist.counts.iter().sum::<usize>(), 2);
    }
}

//! # Histogram Binning
//!
//! Equal-width binning over the range of the input. Rendering lives in
//! [`crate::format`].

/// Binned frequency distribution
///
/// `counts.len() == N` and `edges.len() == N + 1`. Every bin is half-open
/// `[edges[i], edges[i + 1])` except the last, which also includes its
/// upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    counts: Vec<u64>,
    edges: Vec<f64>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`
    ///
    /// A bin count of zero is treated as one. Empty input spans `[0, 1]`;
    /// when every value is equal the range is widened by 0.5 on each side.
    /// Non-finite values are not counted.
    pub fn from_values(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (lo, hi) = value_range(values);
        let width = (hi - lo) / bins as f64;

        let mut edges: Vec<f64> = (0..bins).map(|i| lo + i as f64 * width).collect();
        edges.push(hi);

        let mut counts = vec![0u64; bins];
        for &value in values.iter().filter(|v| v.is_finite()) {
            counts[bin_index(value, lo, hi, &edges)] += 1;
        }

        tracing::debug!(
            "Binned {} values into {} bins over [{}, {}]",
            values.len(),
            bins,
            lo,
            hi
        );

        Self { counts, edges }
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all bin counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Largest bin count, zero for an all-empty histogram
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

fn value_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn bin_index(value: f64, lo: f64, hi: f64, edges: &[f64]) -> usize {
    let bins = edges.len() - 1;
    if value >= hi {
        return bins - 1;
    }

    let mut index = (((value - lo) / (hi - lo)) * bins as f64) as usize;
    index = index.min(bins - 1);

    // The scaled guess can be off by one at the edges due to rounding
    if value < edges[index] && index > 0 {
        index -= 1;
    } else if index + 1 < bins && value >= edges[index + 1] {
        index += 1;
    }
    index
}

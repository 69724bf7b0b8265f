//! # Running Moments
//!
//! Single-pass mean and sample variance using Welford's algorithm.
//! Avoids the catastrophic cancellation of the naive sum-of-squares
//! approach and needs O(1) memory, so it works on streams that are never
//! materialized.

/// Running mean/variance accumulator
///
/// # Example
///
/// ```
/// use streamcalc::stats::RunningStats;
///
/// let stats: RunningStats = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].into_iter().collect();
///
/// assert_eq!(stats.count(), 8);
/// assert!((stats.mean() - 5.0).abs() < 1e-12);
/// assert!((stats.variance() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared deviations from the mean
    m2: f64,
}

impl RunningStats {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one value
    pub fn push(&mut self, value: f64) {
        self.count += 1;

        if self.count == 1 {
            self.mean = value;
            self.m2 = 0.0;
            return;
        }

        let old_mean = self.mean;
        self.mean = old_mean + (value - old_mean) / self.count as f64;
        self.m2 += (value - old_mean) * (value - self.mean);
    }

    /// Number of values seen
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Mean of the values seen, `0.0` when empty
    pub fn mean(&self) -> f64 {
        if self.count > 0 {
            self.mean
        } else {
            0.0
        }
    }

    /// Sample variance (Bessel-corrected), `0.0` for fewer than two values
    pub fn variance(&self) -> f64 {
        if self.count > 1 {
            self.m2 / (self.count - 1) as f64
        } else {
            0.0
        }
    }

    /// Sample standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }
}

impl Extend<f64> for RunningStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl FromIterator<f64> for RunningStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Mean and sample variance of a stream, consumed exactly once
pub fn mean_variance<I: IntoIterator<Item = f64>>(values: I) -> (f64, f64) {
    let stats: RunningStats = values.into_iter().collect();
    (stats.mean(), stats.variance())
}

pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    mean_variance(values).0
}

pub fn variance<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    mean_variance(values).1
}

pub fn std_dev<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    variance(values).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pass(values: &[f64]) -> (f64, f64) {
        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        (mean, var)
    }

    #[test]
    fn test_empty_stream_is_zero() {
        assert_eq!(mean_variance(Vec::<f64>::new()), (0.0, 0.0));
        assert_eq!(std_dev(Vec::<f64>::new()), 0.0);
        assert!(RunningStats::new().is_empty());
    }

    #[test]
    fn test_single_value() {
        assert_eq!(mean_variance(vec![5.0]), (5.0, 0.0));
    }

    #[test]
    fn test_matches_two_pass() {
        let values = [1.5, -2.0, 3.25, 8.0, 0.0, 11.5, -7.75];
        let (m, v) = mean_variance(values);
        let (em, ev) = two_pass(&values);
        assert!((m - em).abs() < 1e-12);
        assert!((v - ev).abs() < 1e-12);
    }

    #[test]
    fn test_stable_with_large_offset() {
        // Naive sum-of-squares loses everything here
        let values: Vec<f64> = [4.0, 7.0, 13.0, 16.0].iter().map(|x| x + 1e9).collect();
        let (m, v) = mean_variance(values);
        assert!((m - (1e9 + 10.0)).abs() < 1e-6);
        assert!((v - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_std_is_sqrt_of_variance() {
        let values = vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((std_dev(values.clone()) - variance(values).sqrt()).abs() < 1e-15);
    }

    #[test]
    fn test_extend_continues_accumulating() {
        let mut stats: RunningStats = vec![1.0, 2.0].into_iter().collect();
        stats.extend(vec![3.0, 4.0]);
        assert_eq!(stats.count(), 4);
        assert!((stats.mean() - 2.5).abs() < 1e-12);
        assert!((stats.variance() - 5.0 / 3.0).abs() < 1e-12);
    }
}

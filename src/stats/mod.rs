//! # Statistics
//!
//! Numeric building blocks behind the calculator commands. Everything that
//! can run as a single pass takes an iterator; only [`median`] and
//! [`Histogram`] need the values materialized.

pub mod histogram;
pub mod moments;

pub use histogram::Histogram;
pub use moments::{mean, mean_variance, std_dev, variance, RunningStats};

/// Sum of all values, `0.0` when empty
pub fn sum<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().sum()
}

/// Product of all values, `1.0` when empty
pub fn product<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().product()
}

/// Smallest value, `NaN` when empty. NaN inputs are ignored.
pub fn min<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::NAN, f64::min)
}

/// Largest value, `NaN` when empty. NaN inputs are ignored.
pub fn max<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    values.into_iter().fold(f64::NAN, f64::max)
}

/// Median of the values, averaging the two middle values for even counts
///
/// Returns `NaN` when empty.
pub fn median(mut values: Vec<f64>) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }

    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

/// Running sums, yielded lazily
pub fn cumulative_sum<I: IntoIterator<Item = f64>>(values: I) -> impl Iterator<Item = f64> {
    values.into_iter().scan(0.0, |acc, x| {
        *acc += x;
        Some(*acc)
    })
}

/// Running products, yielded lazily
pub fn cumulative_product<I: IntoIterator<Item = f64>>(values: I) -> impl Iterator<Item = f64> {
    values.into_iter().scan(1.0, |acc, x| {
        *acc *= x;
        Some(*acc)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_product() {
        assert_eq!(sum(vec![1.0, 2.0, 3.0]), 6.0);
        assert_eq!(product(vec![2.0, 3.0, 4.0]), 24.0);
        assert_eq!(sum(Vec::<f64>::new()), 0.0);
        assert_eq!(product(Vec::<f64>::new()), 1.0);
    }

    #[test]
    fn test_min_max() {
        let values = vec![3.0, -1.5, 8.0, 2.0];
        assert_eq!(min(values.clone()), -1.5);
        assert_eq!(max(values), 8.0);
        assert!(min(Vec::<f64>::new()).is_nan());
        assert!(max(Vec::<f64>::new()).is_nan());
        assert_eq!(max(vec![f64::NAN, 1.0]), 1.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(vec![5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(vec![4.0, 1.0, 3.0, 2.0]), 2.5);
        assert_eq!(median(vec![7.0]), 7.0);
        assert!(median(Vec::new()).is_nan());
    }

    #[test]
    fn test_cumulative() {
        let sums: Vec<f64> = cumulative_sum(vec![1.0, 2.0, 3.0, 4.0]).collect();
        assert_eq!(sums, vec![1.0, 3.0, 6.0, 10.0]);

        let products: Vec<f64> = cumulative_product(vec![1.0, 2.0, 3.0, 4.0]).collect();
        assert_eq!(products, vec![1.0, 2.0, 6.0, 24.0]);

        assert_eq!(cumulative_sum(Vec::<f64>::new()).count(), 0);
    }
}

//! # Built-in Operations
//!
//! The functions behind the standard command catalog. Each consumes its
//! stream once; `median` and `hist` collect it first because they need
//! random access.

use crate::commands::{NumberStream, Value};
use crate::config::CalcConfig;
use crate::stats::{self, Histogram};

pub fn sum(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::sum(stream))
}

pub fn max(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::max(stream))
}

pub fn min(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::min(stream))
}

pub fn product(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::product(stream))
}

pub fn histogram(stream: NumberStream<'_>, config: &CalcConfig) -> Value {
    let values: Vec<f64> = stream.collect();
    Value::Histogram(Histogram::from_values(&values, config.bin_count))
}

pub fn mean(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::mean(stream))
}

pub fn median(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::median(stream.collect()))
}

pub fn variance(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::variance(stream))
}

pub fn std_dev(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Scalar(stats::std_dev(stream))
}

pub fn cumulative_sum(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Series(stats::cumulative_sum(stream).collect())
}

pub fn cumulative_product(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Series(stats::cumulative_product(stream).collect())
}

pub fn exp(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Series(stream.map(f64::exp).collect())
}

/// Natural log; negative inputs give NaN and zero gives -inf
pub fn ln(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    Value::Series(stream.map(f64::ln).collect())
}

/// Mean and variance in one pass
pub fn running_stats(stream: NumberStream<'_>, _config: &CalcConfig) -> Value {
    let (mean, variance) = stats::mean_variance(stream);
    Value::Pair(mean, variance)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(op: fn(NumberStream<'_>, &CalcConfig) -> Value, values: &[f64]) -> Value {
        op(Box::new(values.iter().copied()), &CalcConfig::default())
    }

    #[test]
    fn test_scalar_operations() {
        let values = [4.0, 1.0, 3.0, 2.0];
        assert_eq!(run(sum, &values), Value::Scalar(10.0));
        assert_eq!(run(max, &values), Value::Scalar(4.0));
        assert_eq!(run(min, &values), Value::Scalar(1.0));
        assert_eq!(run(product, &values), Value::Scalar(24.0));
        assert_eq!(run(mean, &values), Value::Scalar(2.5));
        assert_eq!(run(median, &values), Value::Scalar(2.5));
    }

    #[test]
    fn test_spread_operations() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let Value::Scalar(var) = run(variance, &values) else {
            panic!("variance should be a scalar");
        };
        let Value::Scalar(std) = run(std_dev, &values) else {
            panic!("std should be a scalar");
        };
        assert!((var - 32.0 / 7.0).abs() < 1e-12);
        assert!((std - var.sqrt()).abs() < 1e-12);

        let Value::Pair(m, v) = run(running_stats, &values) else {
            panic!("rstat should be a pair");
        };
        assert_eq!(m, 5.0);
        assert!((v - var).abs() < 1e-12);
    }

    #[test]
    fn test_series_operations() {
        assert_eq!(
            run(cumulative_sum, &[1.0, 2.0, 3.0]),
            Value::Series(vec![1.0, 3.0, 6.0])
        );
        assert_eq!(
            run(cumulative_product, &[1.0, 2.0, 3.0]),
            Value::Series(vec![1.0, 2.0, 6.0])
        );
        assert_eq!(run(exp, &[0.0]), Value::Series(vec![1.0]));
        assert_eq!(run(ln, &[1.0]), Value::Series(vec![0.0]));
    }

    #[test]
    fn test_log_of_non_positive_does_not_fail() {
        let Value::Series(logs) = run(ln, &[-1.0, 0.0]) else {
            panic!("log should be a series");
        };
        assert!(logs[0].is_nan());
        assert_eq!(logs[1], f64::NEG_INFINITY);
    }

    #[test]
    fn test_histogram_uses_configured_bins() {
        let config = CalcConfig::default().with_bin_count(4);
        let values = [1.0, 2.0, 3.0, 4.0, 5.0];
        let Value::Histogram(hist) = histogram(Box::new(values.iter().copied()), &config) else {
            panic!("hist should be a histogram");
        };
        assert_eq!(hist.len(), 4);
        assert_eq!(hist.total(), 5);
    }

    #[test]
    fn test_empty_input_degenerates_without_error() {
        assert_eq!(run(sum, &[]), Value::Scalar(0.0));
        assert_eq!(run(product, &[]), Value::Scalar(1.0));
        assert_eq!(run(mean, &[]), Value::Scalar(0.0));
        assert_eq!(run(variance, &[]), Value::Scalar(0.0));
        assert_eq!(run(running_stats, &[]), Value::Pair(0.0, 0.0));
        assert_eq!(run(cumulative_sum, &[]), Value::Series(vec![]));
        let Value::Scalar(m) = run(max, &[]) else {
            panic!("max should be a scalar");
        };
        assert!(m.is_nan());
    }
}

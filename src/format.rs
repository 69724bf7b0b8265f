//! # Output Formatting
//!
//! Turns raw numbers and histograms into terminal text. Numbers are printed
//! so that they parse back to the same value, which keeps
//! `streamcalc exp | streamcalc sum` pipelines lossless.

use crate::stats::Histogram;

/// Columns taken by the brackets, comma, colon and space around each row label
const ROW_DECORATION_WIDTH: usize = 5;

/// Significant digits shown for histogram bin edges
const EDGE_SIGNIFICANT_DIGITS: usize = 2;

/// Format a single number
///
/// Integral values keep a trailing `.0` (`6.0`), very large or small
/// magnitudes switch to exponent notation (`1e300`), and non-finite values
/// print as `nan`, `inf` or `-inf`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else {
        format!("{value:?}")
    }
}

/// Format numbers one per line
pub fn format_lines(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format_number(*v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format numbers as a bracketed, comma-separated list
pub fn format_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
    format!("[{}]", items.join(", "))
}

/// Format a number with `digits` significant digits, like C's `%.Ng`
///
/// Trailing zeros are dropped; exponent notation is used when the decimal
/// exponent is below -4 or at least `digits`.
pub fn format_significant(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format_number(value);
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);
    let scientific = format!("{:.*e}", digits - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= digits as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

fn trim_fraction(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}

/// Number of ticks drawn for each bin
///
/// Counts are drawn one tick per unit unless the widest row would overflow
/// `max_width`, in which case every count is scaled by
/// `available * count / max_count` with integer division.
pub fn tick_counts(hist: &Histogram, label_width: usize, max_width: usize) -> Vec<u64> {
    let max_count = hist.max_count();
    let fixed_width = label_width * 2 + ROW_DECORATION_WIDTH;

    if max_count == 0 || fixed_width as u64 + max_count <= max_width as u64 {
        return hist.counts().to_vec();
    }

    let available = max_width.saturating_sub(fixed_width) as u64;
    tracing::debug!(
        "Scaling histogram bars from {} to {} columns",
        max_count,
        available
    );
    hist.counts()
        .iter()
        .map(|count| available * count / max_count)
        .collect()
}

/// Render a histogram as one bar row per bin
///
/// ```
/// use streamcalc::format::render_histogram;
/// use streamcalc::stats::Histogram;
///
/// let hist = Histogram::from_values(&[1.0, 2.0, 2.0, 3.0], 2);
/// assert_eq!(render_histogram(&hist, '#', 80), "[1,2): #\n[2,3]: ###");
/// ```
pub fn render_histogram(hist: &Histogram, tick_char: char, max_width: usize) -> String {
    let labels: Vec<String> = hist
        .edges()
        .iter()
        .map(|edge| format_significant(*edge, EDGE_SIGNIFICANT_DIGITS))
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let labels: Vec<String> = labels
        .iter()
        .map(|label| format!("{label:>label_width$}"))
        .collect();

    let ticks = tick_counts(hist, label_width, max_width);
    let last = ticks.len().saturating_sub(1);

    ticks
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let close = if i == last { ']' } else { ')' };
            let bar: String = std::iter::repeat(tick_char).take(count as usize).collect();
            format!("[{},{}{}: {}", labels[i], labels[i + 1], close, bar)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

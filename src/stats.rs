use crate::counter::Counter;
use crate::report::{Report, Value};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

/// Most frequent value(s) of a sample.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Scalar(f64),
    MultiValue(Vec<f64>),
}

impl From<Mode> for Value {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Scalar(val) => Value::Float(val),
            Mode::MultiValue(vals) => Value::Floats(vals),
        }
    }
}

/// Descriptive statistics of a sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub var: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Compute all measures, consuming the sample order.
    ///
    /// Every measure of an empty sample is NaN.
    pub fn new(mut vals: Vec<f64>) -> Self {
        let mean = compute_mean(&vals);
        let median = compute_median(&mut vals);
        // Counted after sorting, so ties come out in ascending order.
        let mode = compute_mode(&vals);
        let var = compute_var(&vals, mean);
        Self {
            mean,
            median,
            mode,
            var,
            std_dev: var.sqrt(),
        }
    }

    pub fn report(self) -> Report {
        let mut report = Report::new();
        report.push("Mean", Value::Float(self.mean));
        report.push("Median", Value::Float(self.median));
        report.push("Mode", self.mode.into());
        report.push("Variance", Value::Float(self.var));
        report.push("Standard Deviation", Value::Float(self.std_dev));
        report
    }
}

pub fn compute_mean(vals: &[f64]) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().sum::<f64>() / vals.len() as f64
}

/// Sorts `vals` in place and returns the middle value (or the average of
/// the two middle values for an even count).
pub fn compute_median(vals: &mut [f64]) -> f64 {
    let n_vals = vals.len();
    if n_vals == 0 {
        return f64::NAN;
    }
    vals.sort_by(cmp_vals);
    if n_vals % 2 == 1 {
        return vals[n_vals / 2];
    }
    (vals[n_vals / 2 - 1] + vals[n_vals / 2]) / 2.0
}

/// Values with the highest frequency, in first-seen order.
pub fn compute_mode(vals: &[f64]) -> Mode {
    let counter: Counter<FloatKey> = vals.iter().map(|&val| FloatKey(val)).collect();
    let max_cnt = counter.max_count();
    let modes: Vec<f64> = counter
        .iter()
        .filter(|&(_, cnt)| cnt == max_cnt)
        .map(|(key, _)| key.0)
        .collect();
    match modes.len() {
        0 => Mode::Scalar(f64::NAN),
        1 => Mode::Scalar(modes[0]),
        _ => Mode::MultiValue(modes),
    }
}

/// Population variance (divides by the number of values).
pub fn compute_var(vals: &[f64], mean: f64) -> f64 {
    if vals.is_empty() {
        return f64::NAN;
    }
    vals.iter().map(|&val| (val - mean).powi(2)).sum::<f64>() / vals.len() as f64
}

/// Total order in which `-0.0` and `0.0` compare equal.
fn cmp_vals(a: &f64, b: &f64) -> Ordering {
    if a == b {
        Ordering::Equal
    } else {
        a.total_cmp(b)
    }
}

/// Hash key for a float, treating `-0.0` and `0.0` as the same value.
#[derive(Clone, Copy)]
struct FloatKey(f64);

impl FloatKey {
    fn bits(self) -> u64 {
        if self.0 == 0.0 { 0 } else { self.0.to_bits() }
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-12, "{a} != {b}");
    }

    #[test]
    fn four_values() {
        let summary = Summary::new(vec![1.0, 2.0, 3.0, 4.0]);
        assert_close(summary.mean, 2.5);
        assert_close(summary.median, 2.5);
        assert_close(summary.var, 1.25);
        assert_close(summary.std_dev, 1.118033988749895);
        assert_eq!(summary.mode, Mode::MultiValue(vec![1.0, 2.0, 3.0, 4.0]));
    }

    #[test]
    fn tied_modes() {
        assert_eq!(
            compute_mode(&[1.0, 1.0, 2.0, 2.0, 3.0]),
            Mode::MultiValue(vec![1.0, 2.0])
        );
        assert_eq!(compute_mode(&[5.0, 3.0, 5.0]), Mode::Scalar(5.0));
    }

    #[test]
    fn tied_modes_after_sort_are_ascending() {
        let summary = Summary::new(vec![2.0, 2.0, 1.0, 1.0]);
        assert_eq!(summary.mode, Mode::MultiValue(vec![1.0, 2.0]));
    }

    #[test]
    fn signed_zeros_share_a_count() {
        let Mode::Scalar(mode) = compute_mode(&[-0.0, 0.0, 1.0]) else {
            panic!("expected a single mode");
        };
        assert!(mode == 0.0 && mode.is_sign_negative());

        let Mode::Scalar(mode) = compute_mode(&[-0.0]) else {
            panic!("expected a single mode");
        };
        assert!(mode.is_sign_negative());
    }

    #[test]
    fn sort_keeps_signed_zeros_in_input_order() {
        let summary = Summary::new(vec![1.0, 0.0, -0.0]);
        let Mode::Scalar(mode) = summary.mode else {
            panic!("expected a single mode");
        };
        assert!(mode == 0.0 && mode.is_sign_positive());
    }

    #[test]
    fn infinities() {
        let summary = Summary::new(vec![f64::INFINITY, 1.0]);
        assert_eq!(summary.mean, f64::INFINITY);
        assert_eq!(summary.median, f64::INFINITY);
        assert!(summary.var.is_nan());
        assert!(summary.std_dev.is_nan());
    }

    #[test]
    fn median_odd_count() {
        let mut vals = vec![9.0, -1.0, 3.0];
        assert_close(compute_median(&mut vals), 3.0);
        assert_eq!(vals, vec![-1.0, 3.0, 9.0]);
    }

    #[test]
    fn single_value() {
        let summary = Summary::new(vec![7.5]);
        assert_eq!(summary.mean, 7.5);
        assert_eq!(summary.median, 7.5);
        assert_eq!(summary.mode, Mode::Scalar(7.5));
        assert_eq!(summary.var, 0.0);
        assert_eq!(summary.std_dev, 0.0);
    }

    #[test]
    fn empty_sample() {
        let summary = Summary::new(Vec::new());
        assert!(summary.mean.is_nan());
        assert!(summary.median.is_nan());
        assert!(summary.var.is_nan());
    }

    #[test]
    fn variance_is_non_negative() {
        let samples: [&[f64]; 4] = [
            &[0.1, 0.2, 0.3],
            &[-1e6, 1e6, 3.5, -2.25],
            &[1e-9; 5],
            &[42.0, 42.0, 43.0, 41.0, 40.5, 100.0],
        ];
        for sample in samples {
            let summary = Summary::new(sample.to_vec());
            assert!(summary.var >= 0.0);
            assert_eq!(summary.std_dev, summary.var.sqrt());
        }
    }

    #[test]
    fn report_order() {
        let report = Summary::new(vec![1.0, 1.0, 2.0, 2.0, 3.0]).report();
        let labels: Vec<_> = report.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Mean", "Median", "Mode", "Variance", "Standard Deviation"]
        );
        assert_eq!(report.get("Mode"), Some(&Value::Floats(vec![1.0, 2.0])));
        assert_eq!(report.get("Median"), Some(&Value::Float(2.0)));
    }
}

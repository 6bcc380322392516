//! Summary statistics of numeric collections.
use serde::{Deserialize, Serialize};

/// Where the statistic label goes relative to the key in
/// [`TabularInput::record_misc_stat`](super::TabularInput::record_misc_stat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// `"<Stat><key>"`, e.g. `AverageReturn`.
    Front,

    /// `"<key><Stat>"`, e.g. `ReturnAverage`.
    #[default]
    Back,
}

impl Placement {
    /// Joins a statistic label and a key.
    pub fn label(&self, stat: &str, key: &str) -> String {
        match self {
            Placement::Front => format!("{}{}", stat, key),
            Placement::Back => format!("{}{}", key, stat),
        }
    }
}

/// Average, population standard deviation, median, min and max.
///
/// All fields are `NaN` for an empty collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Arithmetic mean.
    pub average: f64,
    /// Population standard deviation.
    pub std: f64,
    /// Median; mean of the two middle values for even lengths.
    pub median: f64,
    /// Minimum.
    pub min: f64,
    /// Maximum.
    pub max: f64,
}

impl Statistics {
    /// Labels of the statistics, in the order they are recorded.
    pub const LABELS: [&'static str; 5] = ["Average", "Std", "Median", "Min", "Max"];

    /// Computes the statistics of `values`.
    ///
    /// All five are NaN if `values` is empty or contains a NaN.
    pub fn of(values: &[f64]) -> Self {
        if values.is_empty() || values.iter().any(|v| v.is_nan()) {
            return Self {
                average: f64::NAN,
                std: f64::NAN,
                median: f64::NAN,
                min: f64::NAN,
                max: f64::NAN,
            };
        }

        let average = mean(values);
        Self {
            average,
            std: std(values, average),
            median: median(values),
            min: values.iter().copied().fold(f64::INFINITY, f64::min),
            max: values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        }
    }

    /// Pairs each label with its value, in [`Statistics::LABELS`] order.
    pub fn labelled(&self) -> [(&'static str, f64); 5] {
        [
            (Self::LABELS[0], self.average),
            (Self::LABELS[1], self.std),
            (Self::LABELS[2], self.median),
            (Self::LABELS[3], self.min),
            (Self::LABELS[4], self.max),
        ]
    }
}

fn mean(vs: &[f64]) -> f64 {
    vs.iter().sum::<f64>() / vs.len() as f64
}

fn std(vs: &[f64], mean: f64) -> f64 {
    let var = vs.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / vs.len() as f64;
    var.sqrt()
}

fn median(vs: &[f64]) -> f64 {
    let mut vs = vs.to_vec();
    vs.sort_by(|x, y| x.total_cmp(y));
    let n = vs.len();
    if n % 2 == 1 {
        vs[n / 2]
    } else {
        (vs[n / 2 - 1] + vs[n / 2]) / 2.0
    }
}

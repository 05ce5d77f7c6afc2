//! Normalized per-period weight distributions.
//!
//! A [`Distribution`] is the fraction of a total assigned to each period.
//! Every distribution built through [`Distribution::normalize`] satisfies:
//!
//! - entries are rounded to the configured precision (4 decimals by default)
//! - entries sum to exactly `1.0` at that precision, the rounding residual
//!   being folded into the last entry
//! - a zero-sum raw shape normalizes to all zeros, never dividing by zero

mod rounding;


pub use self::rounding::round_to;
pub(crate) use self::rounding::round_index;

use serde::{Deserialize, Serialize};

/// Default precision of normalized fractions.
pub const DISTRIBUTION_DECIMALS: u32 = 4;

/// Ordered per-period fractions of a total.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distribution(Vec<f64>);

impl Distribution {
    /// Normalize a raw weight vector at the default 4-decimal precision.
    ///
    /// ```
    /// use goal_ledger_npv::distribution::Distribution;
    ///
    /// let d = Distribution::normalize(vec![1.0, 1.0, 1.0]);
    /// assert_eq!(d.as_slice(), &[0.3333, 0.3333, 0.3334]);
    ///
    /// let zeros = Distribution::normalize(vec![0.0, 0.0]);
    /// assert_eq!(zeros.as_slice(), &[0.0, 0.0]);
    /// ```
    pub fn normalize(raw: Vec<f64>) -> Self {
        Self::normalize_with_precision(raw, DISTRIBUTION_DECIMALS)
    }

    /// Normalize a raw weight vector, rounding fractions to `decimals`.
    ///
    /// Non-finite or negative raw weights count as zero.
    pub fn normalize_with_precision(raw: Vec<f64>, decimals: u32) -> Self {
        let weights: Vec<f64> = raw
            .into_iter()
            .map(|w| if w.is_finite() && w > 0.0 { w } else { 0.0 })
            .collect();

        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return Self::zeros(weights.len());
        }

        let mut fractions: Vec<f64> = weights
            .iter()
            .map(|w| round_to(w / total, decimals))
            .collect();

        let rounded_sum: f64 = fractions.iter().sum();
        if let Some(last) = fractions.last_mut() {
            *last = round_to(*last + (1.0 - rounded_sum), decimals);
        }

        Self(fractions)
    }

    /// All-zero distribution over `len` periods.
    pub fn zeros(len: usize) -> Self {
        Self(vec![0.0; len])
    }

    /// Number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the distribution covers no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fractions as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over fractions in period order.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    /// Fraction for a 0-based period index, `0.0` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> f64 {
        self.0.get(index).copied().unwrap_or(0.0)
    }

    /// Sum of all fractions.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Whether the fractions sum to one within `tolerance`.
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.sum() - 1.0).abs() <= tolerance
    }

    /// Spread `total` over the periods: `fraction[i] * total`.
    pub fn scale(&self, total: f64) -> Vec<f64> {
        self.0.iter().map(|fraction| fraction * total).collect()
    }

    /// Consume into the underlying vector.
    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl AsRef<[f64]> for Distribution {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

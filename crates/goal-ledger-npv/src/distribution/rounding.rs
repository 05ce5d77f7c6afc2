//! Decimal rounding shared by every pipeline stage.

/// Round `value` to `decimals` decimal places, halves away from zero.
///
/// ```
/// use goal_ledger_npv::distribution::round_to;
///
/// assert_eq!(round_to(0.33333, 4), 0.3333);
/// assert_eq!(round_to(113.636_363, 2), 113.64);
/// assert_eq!(round_to(2.5, 0), 3.0);
/// assert!(round_to(-0.004, 2).is_sign_positive());
/// ```
///
/// Values that round to zero come back as `+0.0`, never `-0.0`.
#[inline]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor + 0.0
}

/// Round `value` to the nearest integer index, halves away from zero.
///
/// Shape generators use this for breakpoints such as `round(n * 0.25)`.
#[inline]
pub(crate) fn round_index(value: f64) -> usize {
    let rounded = value.round();
    if rounded <= 0.0 {
        0
    } else {
        rounded as usize
    }
}

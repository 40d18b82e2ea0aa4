//! Dashboard trend math.

/// Month-over-month trend as a rounded percentage.
///
/// Returns 0 when the prior count is zero, so a freshly seeded database
/// shows flat trends instead of dividing by zero.
pub fn month_over_month_trend(current: i64, previous: i64) -> i64 {
    if previous == 0 {
        return 0;
    }
    (((current - previous) as f64 / previous as f64) * 100.0).round() as i64
}

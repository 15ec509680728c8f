use chrono::NaiveDate;

/// Temporal weight: 1.0 inside the full-weight window, then
/// `0.5^((age - full_weight_days) / half_life_days)`.
///
/// Range: (0.0, 1.0]. Non-increasing in age.
pub fn weight(age_days: f64, full_weight_days: f64, half_life_days: f64) -> f64 {
    if age_days <= full_weight_days {
        return 1.0;
    }
    let excess = age_days - full_weight_days;
    0.5_f64.powf(excess / half_life_days).min(1.0)
}

/// Whole days between `date` and `as_of`. Future-dated items are age 0.
pub fn age_days(date: NaiveDate, as_of: NaiveDate) -> f64 {
    (as_of - date).num_days().max(0) as f64
}

use chrono::{DateTime, Utc};

const PRICE_MAY_VARY_AFTER_DAYS: i64 = 5;

pub fn format_price(price: f64) -> String {
    format!("${}", two_decimals(price))
}

/// Two-decimal rendering where an exact half-cent rounds away from zero
/// ("0.125" becomes "0.13"); everything else is nearest-value rounding.
fn two_decimals(value: f64) -> String {
    let half_cents = value * 200.0;
    let exact_tie = half_cents.fract() == 0.0
        && half_cents % 2.0 != 0.0
        && value.mul_add(200.0, -half_cents) == 0.0;

    if exact_tie {
        let cents = (half_cents + half_cents.signum()) / 2.0;
        return format!("{:.2}", cents / 100.0);
    }
    format!("{value:.2}")
}

/// True once more than five whole days have passed since posting.
pub fn price_may_vary(posted: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    (now - posted).num_days() > PRICE_MAY_VARY_AFTER_DAYS
}

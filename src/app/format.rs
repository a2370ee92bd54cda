use rust_decimal::{Decimal, RoundingStrategy};

/// Renders an amount as Indonesian rupiah without fraction digits,
/// e.g. `Rp 40.260.000` or `-Rp 1.500`.
pub fn format_idr(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{}Rp {}", sign, group_thousands(&digits))
}

/// Like [`format_idr`] but with an explicit `+` for gains.
pub fn format_signed_idr(amount: Decimal) -> String {
    if amount >= Decimal::ZERO {
        format!("+{}", format_idr(amount))
    } else {
        format_idr(amount)
    }
}

pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        let sign = if value < Decimal::ZERO { "-" } else { "+" };
        return format!("{}0.0%", sign);
    }
    if rounded > Decimal::ZERO {
        format!("+{:.1}%", rounded)
    } else {
        format!("{:.1}%", rounded)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Default currency symbol for displayed amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Renders an amount without decimals when whole, otherwise with two.
pub fn format_number(amount: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let amount = if amount == 0.0 { 0.0 } else { amount };
    if amount.fract() == 0.0 && amount.is_finite() {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

/// Formats an amount with a currency symbol, sign first: "-₹4.50".
pub fn format_money(amount: f64, symbol: &str) -> String {
    let digits = format_number(amount.abs());
    let rounds_to_zero = digits.chars().all(|c| c == '0' || c == '.');
    if amount < 0.0 && !rounds_to_zero {
        format!("-{}{}", symbol, digits)
    } else {
        format!("{}{}", symbol, digits)
    }
}

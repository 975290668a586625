/// Shared formatting utilities for the dashboard.
use chrono::NaiveDate;

/// Format a date as "Dec 6, 2025".
pub fn format_date_human(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Group the digits of a whole amount in thousands: 4100 → "4,100".
pub fn format_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Prefix an amount with its currency code: "ZMW 4,100".
pub fn format_money(currency: &str, amount: u64) -> String {
    format!("{currency} {}", format_thousands(amount))
}

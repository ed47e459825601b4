/// Format an integer with comma thousands separators.
///
/// Example: 48000 → "48,000"
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Humanize a day-count projection the way the goal timeline reads.
///
/// Example: 60 → "Est. 2 months", 21 → "Est. 3 weeks", 5 → "Est. 5 days"
pub fn humanize_eta_days(days: u32) -> String {
    if days >= 30 {
        let months = ((days as f64 / 30.0).round() as u32).max(1);
        if months == 1 {
            "Est. 1 month".to_string()
        } else {
            format!("Est. {} months", months)
        }
    } else if days >= 7 {
        let weeks = ((days as f64 / 7.0).round() as u32).max(1);
        if weeks == 1 {
            "Est. 1 week".to_string()
        } else {
            format!("Est. {} weeks", weeks)
        }
    } else if days == 1 {
        "Est. 1 day".to_string()
    } else {
        format!("Est. {} days", days)
    }
}

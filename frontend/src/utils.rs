use js_sys::Date;

/// Render an ISO timestamp from the API as `YYYY-MM-DD HH:MM`.
/// Unparseable input is shown verbatim, absent input as a dash.
pub fn format_date(iso: &str) -> String {
    if iso.is_empty() {
        return "-".to_string();
    }
    let d = Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if d.get_time().is_nan() {
        return iso.to_string();
    }
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        d.get_full_year(),
        d.get_month() + 1, // JS months are 0-indexed
        d.get_date(),
        d.get_hours(),
        d.get_minutes(),
    )
}

/// Dollar amount with thousands separators, two decimals.
pub fn format_money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac:02}")
}

/// Shortest password the forms accept.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimal sanity check for a sign-in email before a request goes out;
/// real validation is the backend's job.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

/// Clip long free text for table cells.
pub fn clip(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_chars).collect();
    format!("{clipped}...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(999.9), "$999.90");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-42.5), "-$42.50");
    }

    #[test]
    fn email_check_rejects_obvious_garbage() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("  admin@example.co.uk "));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("admin@nodot"));
        assert!(!is_valid_email("admin@.com"));
    }

    #[test]
    fn clip_is_char_aware() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a longer sentence", 8), "a longer...");
        assert_eq!(clip("héllo wörld", 5), "héllo...");
    }
}

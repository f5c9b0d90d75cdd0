//! Number formatting for currency rows.

/// Formats a number with comma separators, e.g. `1234567.891` -> `"1,234,567.89"` for 2 decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(dec) => format!("{}{}.{}", sign, grouped, dec),
        None => format!("{}{}", sign, grouped),
    }
}

/// Formats a USD price. Sub-dollar prices keep up to 6 decimals.
pub fn format_usd(price: f64) -> String {
    if price.abs() >= 1.0 || price == 0.0 {
        format!("${}", format_number(price, 2))
    } else {
        let precise = format!("{:.6}", price);
        let trimmed = precise.trim_end_matches('0').trim_end_matches('.');
        format!("${}", trimmed)
    }
}

/// Formats a percentage change with its sign.
pub fn format_percentage(pct: f64) -> String {
    if pct >= 0.0 {
        format!("+{:.2}%", pct)
    } else {
        format!("{:.2}%", pct)
    }
}

/// Formats a large USD amount as e.g. `$1.23B`.
pub fn format_compact_usd(value: f64) -> String {
    const UNITS: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

    UNITS
        .iter()
        .find(|(scale, _)| value.abs() >= *scale)
        .map(|(scale, suffix)| format!("${:.2}{}", value / scale, suffix))
        .unwrap_or_else(|| format!("${:.2}", value))
}

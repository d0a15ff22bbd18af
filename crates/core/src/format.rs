// crates/core/src/format.rs
//! Korean-reader-friendly number formatting for generated sentences and
//! comparison tables: 억/만 banding for large values, thousands grouping
//! below that.

/// Format a value with its unit: ≥1억 → "1.2억원", ≥1만 → "4500만원",
/// ≥1000 → "1,500원", integral → "12개", else one decimal. NaN → "N/A".
pub fn format_number(value: f64, unit: &str) -> String {
    if value.is_nan() {
        return "N/A".to_string();
    }
    let abs = value.abs();
    if abs >= 100_000_000.0 {
        format!("{:.1}억{}", value / 100_000_000.0, unit)
    } else if abs >= 10_000.0 {
        format!("{:.0}만{}", value / 10_000.0, unit)
    } else if abs >= 1000.0 {
        format!("{}{}", group_thousands(value), unit)
    } else if value == value.trunc() {
        format!("{}{}", value as i64, unit)
    } else {
        format!("{:.1}{}", value, unit)
    }
}

/// Format a ratio as a percentage with one decimal ("0.235" → "23.5%").
pub fn format_percent(value: f64) -> String {
    if value.is_nan() {
        return "N/A".to_string();
    }
    format!("{:.1}%", value * 100.0)
}

/// Round to an integer and insert thousands separators.
fn group_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

// ============================================================================
// Tests
// ============================================================================

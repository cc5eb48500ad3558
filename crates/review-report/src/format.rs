//! Number formatting for report text

/// `1234567` -> `"1,234,567"`
pub fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Minutes to two decimals, `n/a` when undefined
pub fn format_minutes(minutes: Option<f64>) -> String {
    match minutes {
        Some(m) if m.is_finite() => format!("{m:.2} min"),
        _ => "n/a".to_string(),
    }
}

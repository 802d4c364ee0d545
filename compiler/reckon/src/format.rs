/// Renders a result for display.
///
/// Very small or very large magnitudes use scientific notation with six
/// fractional digits; integral values print without decimals; everything
/// else keeps at most six decimals with trailing zeros dropped.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also catches -0.0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if !(1e-6..=1e6).contains(&magnitude) {
        return format!("{value:.6e}");
    }
    if value.fract() == 0.0 {
        return format!("{value:.0}");
    }

    let fixed = format!("{value:.6}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

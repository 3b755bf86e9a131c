//! Display helpers for rand amounts in the en-ZA style used by the funding portal.

/// Format a rand amount with no decimals and space-grouped thousands, e.g. `R 1 250 000`.
pub fn format_rand(amount: f64) -> String {
    if !amount.is_finite() {
        return "R -".to_string();
    }

    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }

    format!("{sign}R {grouped}")
}

/// Format a whole-rand amount; convenience for opportunity bounds.
pub fn format_rand_whole(amount: u64) -> String {
    format_rand(amount as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_rand(100_000.0), "R 100 000");
        assert_eq!(format_rand(1_250_000.0), "R 1 250 000");
        assert_eq!(format_rand(999.0), "R 999");
        assert_eq!(format_rand(0.0), "R 0");
    }

    #[test]
    fn rounds_to_whole_rand() {
        assert_eq!(format_rand(49_999.6), "R 50 000");
        assert_eq!(format_rand(-1_500.0), "-R 1 500");
        assert_eq!(format_rand_whole(500_000), "R 500 000");
    }

    #[test]
    fn non_finite_amounts_render_placeholder() {
        assert_eq!(format_rand(f64::NAN), "R -");
    }
}

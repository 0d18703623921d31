//! German-locale number and currency formatting for display.

const NBSP: char = '\u{a0}';

/// Formats a number with `decimals` places, `.` as thousands and `,` as decimal separator.
pub(crate) fn format_decimal(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match rendered.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    let mut output = String::new();
    if value.is_sign_negative() && !is_zero {
        output.push('-');
    }
    output.push_str(&grouped);
    if let Some(fraction) = fraction {
        output.push(',');
        output.push_str(fraction);
    }
    output
}

/// `1234.5` becomes `1.234,50 €`.
pub(crate) fn format_eur(value: f64) -> String {
    format!("{}{NBSP}€", format_decimal(value, 2))
}

/// Sizes print with up to two decimals, dropping trailing zeros after rounding.
pub(crate) fn format_size(value: f64) -> String {
    let rendered = format_decimal(value, 2);
    rendered
        .trim_end_matches('0')
        .trim_end_matches(',')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_euro_amounts_in_german_locale() {
        assert_eq!(format_eur(378.0), "378,00\u{a0}€");
        assert_eq!(format_eur(1234.5), "1.234,50\u{a0}€");
        assert_eq!(format_eur(1_234_567.891), "1.234.567,89\u{a0}€");
        assert_eq!(format_eur(6.3), "6,30\u{a0}€");
    }

    #[test]
    fn keeps_sign_except_for_rounded_zero() {
        assert_eq!(format_eur(-0.3), "-0,30\u{a0}€");
        assert_eq!(format_eur(-0.001), "0,00\u{a0}€");
    }

    #[test]
    fn formats_reduction_and_sizes() {
        assert_eq!(format_decimal(0.195, 3), "0,195");
        assert_eq!(format_size(60.0), "60");
        assert_eq!(format_size(60.5), "60,5");
        assert_eq!(format_size(1200.0), "1.200");
        assert_eq!(format_size(100.0), "100");
    }

    #[test]
    fn sizes_that_round_to_whole_numbers_drop_the_separator() {
        assert_eq!(format_size(60.001), "60");
        assert_eq!(format_size(59.999), "60");
        assert_eq!(format_size(60.504), "60,5");
    }
}

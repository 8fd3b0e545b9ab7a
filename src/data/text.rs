//! String rules applied cell by cell: header normalization, title casing and
//! amount parsing.

/// Trim, lowercase, and replace each space with an underscore.
pub fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Upper-case the first letter of every word, lower-case the rest.
///
/// A word starts at any letter not preceded by another letter, so
/// `"o'neil"` becomes `"O'Neil"` and `"3d printing"` becomes `"3D Printing"`.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if prev_letter {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(ch);
            prev_letter = false;
        }
    }
    out
}

/// Keep only ASCII digits and periods.
pub fn strip_amount(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Parse a free-form amount; anything that does not survive stripping as a
/// single decimal number becomes zero.
///
/// Commas and periods are not told apart: `"1,234.56"` parses as `1234.56`,
/// while `"1.234.567"` has two periods and becomes `0`.
pub fn parse_amount(value: &str) -> f64 {
    strip_amount(value).parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Startup Name", "startup_name")]
    #[case("  Date dd/mm/yyyy ", "date_dd/mm/yyyy")]
    #[case("Amount in USD", "amount_in_usd")]
    #[case("Investors  Name", "investors__name")]
    #[case("sno", "sno")]
    fn test_normalize_column_name(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(normalize_column_name(raw), expected);
    }

    #[rstest]
    #[case("ola cabs", "Ola Cabs")]
    #[case("FLIPKART", "Flipkart")]
    #[case("e-commerce", "E-Commerce")]
    #[case("byju's", "Byju'S")]
    #[case("3d printing", "3D Printing")]
    #[case("", "")]
    fn test_title_case(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(title_case(raw), expected);
    }

    #[rstest]
    #[case("$1,000 USD", 1000.0)]
    #[case("1,234.56", 1234.56)]
    #[case("20,00,000", 2_000_000.0)]
    #[case("unknown", 0.0)]
    #[case("", 0.0)]
    #[case(".", 0.0)]
    #[case("1.234.567", 0.0)]
    #[case("-500", 500.0)]
    #[case("0", 0.0)]
    fn test_parse_amount(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_amount(raw), expected);
    }
}

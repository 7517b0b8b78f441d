//! Number Formatting
//!
//! Prices and counts in Indian (en-IN) digit grouping: the last three digits,
//! then groups of two (`12,34,567`).

const RUPEE: &str = "₹";
const MAX_FRACTION_DIGITS: u32 = 3;

/// Whole-rupee price, e.g. `₹25,00,000`
pub fn format_currency(amount: f64) -> String {
    if amount.is_nan() {
        return format!("{}NaN", RUPEE);
    }
    if amount.is_infinite() {
        let sign = if amount < 0.0 { "-" } else { "" };
        return format!("{}{}∞", sign, RUPEE);
    }
    let (whole, _) = round_parts(amount.abs(), 0);
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{}{}{}", sign, RUPEE, group_indian(&whole))
}

/// Grouped number with up to three fraction digits, trailing zeros dropped
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return format_non_finite(value);
    }
    let (whole, fraction) = round_parts(value.abs(), MAX_FRACTION_DIGITS);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if fraction.is_empty() {
        format!("{}{}", sign, group_indian(&whole))
    } else {
        format!("{}{}.{}", sign, group_indian(&whole), fraction)
    }
}

fn format_non_finite(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value < 0.0 {
        "-∞".to_string()
    } else {
        "∞".to_string()
    }
}

/// Round half away from zero and split into integer digits and trimmed
/// fraction digits.
///
/// Works on the shortest decimal form of `abs` so values of any magnitude
/// keep their digits.
fn round_parts(abs: f64, digits: u32) -> (String, String) {
    let repr = abs.to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
    let digits = digits as usize;

    let mut kept: Vec<char> = int_part
        .chars()
        .chain(frac_part.chars().chain(std::iter::repeat('0')).take(digits))
        .collect();
    let round_up = frac_part.chars().nth(digits).is_some_and(|d| d >= '5');

    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if *d == '9' {
                *d = '0';
            } else {
                *d = char::from(*d as u8 + 1);
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, '1');
        }
    }

    let split = kept.len() - digits;
    let whole: String = kept[..split].iter().collect();
    let fraction: String = kept[split..].iter().collect();
    (whole, fraction.trim_end_matches('0').to_string())
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), last_three)
}

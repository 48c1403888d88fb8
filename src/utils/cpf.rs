use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIGITS: Regex = Regex::new(r"[^0-9]").expect("valid non-digit regex");
}

pub fn digits_only(value: &str) -> String {
    NON_DIGITS.replace_all(value, "").to_string()
}

// CPF check digits: weights run from `digits.len() + 1` down to 2, and a remainder of
// 10 or 11 (after multiplying the sum by 10) counts as zero.
fn check_digit(digits: &[u32]) -> u32 {
    let weight_start = digits.len() as u32 + 1;
    let sum: u32 = digits.iter().enumerate()
        .map(|(i, d)| d * (weight_start - i as u32))
        .sum();
    let rest = (sum * 10) % 11;
    if rest == 10 { 0 } else { rest }
}

/// Validates a CPF, with or without the `000.000.000-00` mask.
pub fn validate_cpf(cpf: &str) -> bool {
    let digits: Vec<u32> = digits_only(cpf).chars().filter_map(|c| c.to_digit(10)).collect();
    if digits.len() != 11 || digits.iter().all(|d| *d == digits[0]) {
        return false;
    }
    check_digit(&digits[..9]) == digits[9] && check_digit(&digits[..10]) == digits[10]
}

/// Applies the `000.000.000-00` mask to whatever digits were typed so far, extra digits are dropped.
pub fn mask_cpf(value: &str) -> String {
    let digits: String = digits_only(value).chars().take(11).collect();
    let mut masked = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => masked.push('.'),
            9 => masked.push('-'),
            _ => {}
        }
        masked.push(c);
    }
    masked
}

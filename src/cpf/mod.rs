//! CPF checksum validation
//!
//! A CPF is an 11-digit identifier whose last two digits are check digits
//! computed from weighted positional sums over the digits before them.
//! Input lines may carry formatting (`529.982.247-25`); everything that is
//! not an ASCII digit is ignored before the length and checksum tests.
//!
//! Every function here is pure and safe to call from any number of threads.

pub mod generate;

use std::fmt;

/// Number of digits in a CPF, check digits included
pub const CPF_LEN: usize = 11;

/// Number of leading digits the check digits are derived from
pub const BASE_LEN: usize = 9;

/// Validate one input line as a CPF.
///
/// Returns `false` when the line does not normalize to exactly 11 digits,
/// when all 11 digits are the same, or when either check digit does not
/// match. Empty and whitespace-only lines are simply invalid.
pub fn validate(line: &str) -> bool {
    let Some(digits) = normalize(line) else {
        return false;
    };

    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    (BASE_LEN..CPF_LEN).all(|position| check_digit(&digits, position) == digits[position])
}

/// Compute both check digits for a nine-digit base
pub fn check_digits(base: &[u8; BASE_LEN]) -> [u8; 2] {
    let mut digits = [0u8; CPF_LEN];
    digits[..BASE_LEN].copy_from_slice(base);
    digits[9] = check_digit(&digits, 9);
    digits[10] = check_digit(&digits, 10);
    [digits[9], digits[10]]
}

/// Strip formatting and collect exactly [`CPF_LEN`] digits
fn normalize(line: &str) -> Option<[u8; CPF_LEN]> {
    let mut digits = [0u8; CPF_LEN];
    let mut len = 0;

    for byte in line.bytes().filter(u8::is_ascii_digit) {
        if len == CPF_LEN {
            return None;
        }
        digits[len] = byte - b'0';
        len += 1;
    }

    (len == CPF_LEN).then_some(digits)
}

/// Expected digit at `position` (9 or 10) from the digits preceding it.
///
/// Weights run from `position + 1` down to 2; a result of 10 maps to 0.
fn check_digit(digits: &[u8], position: usize) -> u8 {
    let sum: u32 = digits[..position]
        .iter()
        .enumerate()
        .map(|(j, &d)| u32::from(d) * (position + 1 - j) as u32)
        .sum();

    match (sum * 10) % 11 {
        10 => 0,
        digit => digit as u8,
    }
}

/// A CPF that passed validation, stored as its 11 digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cpf([u8; CPF_LEN]);

impl Cpf {
    /// Parse a possibly formatted CPF, returning `None` if it is invalid
    pub fn parse(input: &str) -> Option<Self> {
        if !validate(input) {
            return None;
        }
        normalize(input).map(Cpf)
    }

    /// Build a valid CPF by appending the check digits to `base`.
    ///
    /// Returns `None` when the result would be a run of identical digits,
    /// which the validator always rejects.
    pub fn from_base(base: [u8; BASE_LEN]) -> Option<Self> {
        if base.iter().any(|&d| d > 9) {
            return None;
        }

        let [first, second] = check_digits(&base);
        let mut digits = [0u8; CPF_LEN];
        digits[..BASE_LEN].copy_from_slice(&base);
        digits[9] = first;
        digits[10] = second;

        if digits.iter().all(|&d| d == digits[0]) {
            return None;
        }
        Some(Cpf(digits))
    }

    pub fn digits(&self) -> &[u8; CPF_LEN] {
        &self.0
    }

    /// Digits without any formatting, e.g. `52998224725`
    pub fn to_plain(&self) -> String {
        self.0.iter().map(|d| char::from(b'0' + d)).collect()
    }
}

/// Formats with the conventional `000.000.000-00` mask
impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain = self.to_plain();
        write!(
            f,
            "{}.{}.{}-{}",
            &plain[0..3],
            &plain[3..6],
            &plain[6..9],
            &plain[9..11]
        )
    }
}

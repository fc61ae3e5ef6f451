//! Temporary password generation.
//!
//! Generated passwords satisfy the complexity rules by construction:
//! one character is seeded from each required class, the remainder is
//! filled from the combined alphabet, and the result is shuffled.

use rand::seq::{IndexedRandom, SliceRandom};

use super::validator::SYMBOLS;

const LOWERCASE: &str = "abcdefghijkmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "23456789";

/// Generate a random temporary password of `length` characters.
///
/// Lengths below 8 are raised to 8 so the result always meets the
/// minimum-length rule.
pub fn generate_temp_password(length: usize) -> String {
    let length = length.max(8);
    let mut rng = rand::rng();

    let lowercase: Vec<char> = LOWERCASE.chars().collect();
    let uppercase: Vec<char> = UPPERCASE.chars().collect();
    let digits: Vec<char> = DIGITS.chars().collect();
    let symbols: Vec<char> = SYMBOLS.chars().collect();

    let mut chars: Vec<char> = Vec::with_capacity(length);
    chars.push(*lowercase.choose(&mut rng).unwrap_or(&'a'));
    chars.push(*uppercase.choose(&mut rng).unwrap_or(&'A'));
    chars.push(*digits.choose(&mut rng).unwrap_or(&'2'));
    chars.push(*symbols.choose(&mut rng).unwrap_or(&'!'));

    let all: Vec<char> = lowercase
        .iter()
        .chain(uppercase.iter())
        .chain(digits.iter())
        .chain(symbols.iter())
        .copied()
        .collect();
    while chars.len() < length {
        chars.push(*all.choose(&mut rng).unwrap_or(&'x'));
    }

    chars.shuffle(&mut rng);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::validator::PasswordValidator;

    #[test]
    fn test_generated_password_passes_validation() {
        let validator = PasswordValidator::new(8, 90);
        for _ in 0..50 {
            let password = generate_temp_password(12);
            assert_eq!(password.chars().count(), 12);
            assert!(validator.validate(&password).is_ok(), "{password}");
        }
    }

    #[test]
    fn test_short_request_is_raised_to_minimum() {
        assert_eq!(generate_temp_password(4).chars().count(), 8);
    }
}

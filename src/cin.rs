//! Italian CIN, the single-letter domestic check over ABI + CAB + account.

use crate::error::{IbanError, Result};

const DIGITS: &str = "0123456789";
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ-. ";
const DIVISOR: u32 = 26;

// Weights for characters at 0-based odd positions.
const ODD_WEIGHTS: [u32; 29] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28,
];

// Weights for characters at 0-based even positions.
const EVEN_WEIGHTS: [u32; 29] = [
    1, 0, 5, 7, 9, 13, 15, 17, 19, 21, 2, 4, 18, 20, 11, 3, 6, 8, 12, 14, 16, 10, 22, 25, 24, 23,
    27, 28, 26,
];

fn table_index(ch: char) -> Option<usize> {
    DIGITS.find(ch).or_else(|| LETTERS.find(ch))
}

/// Computes the CIN letter for the concatenated bank, branch and account codes.
pub fn cin(code: &str) -> Result<char> {
    let mut sum = 0u32;
    for (position, ch) in code.chars().enumerate() {
        let upper = ch.to_ascii_uppercase();
        let index = table_index(upper).ok_or(IbanError::InvalidCharacter {
            character: ch,
            position,
        })?;
        sum += if position % 2 == 0 {
            EVEN_WEIGHTS[index]
        } else {
            ODD_WEIGHTS[index]
        };
    }
    let letter = (sum % DIVISOR) as u8;
    Ok(char::from(b'A' + letter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_cin() {
        assert_eq!(cin("0542811101000000123456").unwrap(), 'X');
        assert_eq!(cin("0306909606100000063118").unwrap(), 'N');
    }

    #[test]
    fn lowercase_is_folded() {
        assert_eq!(cin("abcabcdef123456").unwrap(), cin("ABCABCDEF123456").unwrap());
    }

    #[test]
    fn single_substitution_changes_cin() {
        assert_eq!(cin("ABCABCDEF123456").unwrap(), 'T');
        assert_eq!(cin("ABCABCDEF123457").unwrap(), 'V');
        assert_eq!(cin("0542811101000000123457").unwrap(), 'Y');
    }

    #[test]
    fn unknown_character_is_an_error() {
        assert_eq!(
            cin("05428/1101"),
            Err(IbanError::InvalidCharacter {
                character: '/',
                position: 5
            })
        );
    }
}

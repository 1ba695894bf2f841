//! ISO 7064 mod 97-10 checksum over IBAN strings.
//!
//! Letters are transliterated to two-digit numbers (`A` = 10 .. `Z` = 35) and
//! the resulting decimal string is reduced in blocks small enough to fit a
//! `u64` after the previous remainder has been prefixed.

use crate::error::{IbanError, Result};

/// Decimal digits consumed per reduction step.
pub const BLOCK_DIGITS: usize = 16;

const MODULUS: u64 = 97;

/// Moves the first four characters (country code and check digits) to the end.
pub fn rotate(iban: &str) -> String {
    let split = iban
        .char_indices()
        .nth(4)
        .map(|(idx, _)| idx)
        .unwrap_or(iban.len());
    let (head, tail) = iban.split_at(split);
    format!("{tail}{head}")
}

/// Replaces every letter with its numeric value; digits pass through.
pub fn transliterate(input: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len() * 2);
    for (position, ch) in input.chars().enumerate() {
        if ch.is_ascii_digit() {
            out.push(ch);
        } else if ch.is_ascii_uppercase() {
            let value = ch as u32 - 'A' as u32 + 10;
            out.push_str(&value.to_string());
        } else {
            return Err(IbanError::InvalidCharacter {
                character: ch,
                position,
            });
        }
    }
    Ok(out)
}

/// Remainder of an arbitrarily long decimal string divided by 97.
pub fn mod97(digits: &str) -> Result<u32> {
    let mut remainder: u64 = 0;
    let bytes = digits.as_bytes();
    let mut start = 0usize;
    while start < bytes.len() {
        let end = (start + BLOCK_DIGITS).min(bytes.len());
        let mut block = remainder;
        for (offset, byte) in bytes[start..end].iter().enumerate() {
            if !byte.is_ascii_digit() {
                return Err(IbanError::InvalidCharacter {
                    character: char::from(*byte),
                    position: start + offset,
                });
            }
            block = block * 10 + u64::from(byte - b'0');
        }
        remainder = block % MODULUS;
        start = end;
    }
    Ok(remainder as u32)
}

/// Rotates, transliterates and reduces a complete IBAN. Valid IBANs yield 1.
pub fn iban_remainder(iban: &str) -> Result<u32> {
    mod97(&transliterate(&rotate(iban))?)
}

pub fn is_valid_checksum(iban: &str) -> bool {
    matches!(iban_remainder(iban), Ok(1))
}

/// Computes the two IBAN check digits for a country code and BBAN.
pub fn check_digits(country_code: &str, bban: &str) -> Result<String> {
    let combined = format!("{bban}{country_code}00");
    let remainder = mod97(&transliterate(&combined)?)?;
    Ok(format!("{:02}", 98 - remainder))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_moves_prefix_to_tail() {
        assert_eq!(rotate("IT60X0542811101000000123456"), "X0542811101000000123456IT60");
        assert_eq!(rotate("IT6"), "IT6");
    }

    #[test]
    fn transliterate_maps_letters() {
        assert_eq!(transliterate("A9Z").unwrap(), "10935");
        assert_eq!(
            transliterate("IT 1"),
            Err(IbanError::InvalidCharacter {
                character: ' ',
                position: 2
            })
        );
    }

    #[test]
    fn mod97_handles_long_input() {
        // 3214282912345698765432161182 is the classic ISO 13616 example.
        assert_eq!(mod97("3214282912345698765432161182").unwrap(), 1);
        assert_eq!(mod97("").unwrap(), 0);
        assert_eq!(mod97("96").unwrap(), 96);
        assert_eq!(mod97(&"9".repeat(120)).unwrap(), {
            let mut r = 0u32;
            for _ in 0..120 {
                r = (r * 10 + 9) % 97;
            }
            r
        });
    }

    #[test]
    fn check_digits_match_known_iban() {
        assert_eq!(check_digits("DE", "370400440532013000").unwrap(), "89");
        assert_eq!(check_digits("IT", "X0542811101000000123456").unwrap(), "60");
    }

    #[test]
    fn remainder_of_valid_iban_is_one() {
        assert_eq!(iban_remainder("GB29NWBK60161331926819").unwrap(), 1);
        assert!(!is_valid_checksum("GB28NWBK60161331926819"));
    }
}

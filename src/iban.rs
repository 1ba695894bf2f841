use crate::checksum::iban_remainder;
use crate::cin::cin;
use crate::error::{IbanError, Result};
use crate::layout::CountryLayout;
use crate::models::IbanFields;
use crate::reference::DOMESTIC_COUNTRY;
use crate::registry::CountryRegistry;
use crate::util::{normalize, pad_right};
use std::fmt;
use std::str::FromStr;

pub const CIN_CHECK: &str = "CIN";
pub const IBAN_CHECK: &str = "IBAN";

/// A parsed IBAN bound to the layout of its country.
///
/// Parsing is permissive: only an unknown country prefix is rejected. Short or
/// garbled content is kept as-is and reported by [`Iban::validate_formal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Iban<'a> {
    fields: IbanFields,
    layout: &'a CountryLayout,
}

impl<'a> Iban<'a> {
    /// Parses a raw string against `registry`.
    ///
    /// Input shorter than two characters is not an error: it yields empty
    /// fields bound to the Italian layout.
    pub fn parse(registry: &'a CountryRegistry, raw: &str) -> Result<Self> {
        let normalized = normalize(raw);
        if normalized.chars().count() < 2 {
            let layout = registry
                .lookup(DOMESTIC_COUNTRY)
                .ok_or_else(|| IbanError::UnsupportedCountry(DOMESTIC_COUNTRY.to_string()))?;
            return Ok(Self {
                fields: IbanFields::default(),
                layout,
            });
        }

        let prefix: String = normalized.chars().take(2).collect();
        let layout = registry
            .lookup(&prefix)
            .ok_or(IbanError::UnsupportedCountry(prefix))?;
        let padded = pad_right(&normalized, layout.total_length(), ' ');
        Ok(Self {
            fields: layout.decompose(&padded),
            layout,
        })
    }

    /// Builds an IBAN from its six components.
    ///
    /// The components are concatenated as given (no padding, no cutting) in
    /// the field order of the country template, then parsed like a raw
    /// string, so wrong component lengths surface in validation.
    pub fn from_parts(
        registry: &'a CountryRegistry,
        country_code: &str,
        check_digit: &str,
        national_check: &str,
        bank_code: &str,
        branch_code: &str,
        account_number: &str,
    ) -> Result<Self> {
        let country_code = normalize(country_code);
        let check_digit = normalize(check_digit);
        let national_check = normalize(national_check);
        let bank_code = normalize(bank_code);
        let branch_code = normalize(branch_code);
        let account_number = normalize(account_number);

        let joined = match registry.lookup(&country_code) {
            Some(layout) if country_code.chars().count() == 2 => format!(
                "{}{}{}",
                country_code,
                check_digit,
                layout.join_fields(&national_check, &bank_code, &branch_code, &account_number)
            ),
            _ => [
                country_code.as_str(),
                check_digit.as_str(),
                national_check.as_str(),
                bank_code.as_str(),
                branch_code.as_str(),
                account_number.as_str(),
            ]
            .concat(),
        };
        Self::parse(registry, &joined)
    }

    pub fn fields(&self) -> &IbanFields {
        &self.fields
    }

    pub fn layout(&self) -> &'a CountryLayout {
        self.layout
    }

    pub fn full_iban(&self) -> &str {
        &self.fields.full_iban
    }

    pub fn paper_format(&self) -> &str {
        &self.fields.paper_format
    }

    pub fn country_code(&self) -> &str {
        &self.fields.country_code
    }

    pub fn check_digit(&self) -> &str {
        &self.fields.check_digit
    }

    pub fn national_check(&self) -> &str {
        &self.fields.national_check
    }

    pub fn bank_code(&self) -> &str {
        &self.fields.bank_code
    }

    pub fn branch_code(&self) -> &str {
        &self.fields.branch_code
    }

    pub fn account_number(&self) -> &str {
        &self.fields.account_number
    }

    pub fn country_name(&self) -> &str {
        self.layout.country_name()
    }

    pub fn currency_code(&self) -> &str {
        self.layout.currency_code()
    }

    pub fn is_sepa(&self) -> bool {
        self.layout.is_sepa()
    }

    pub fn is_italian(&self) -> bool {
        self.layout.is_domestic()
    }

    pub fn is_foreign(&self) -> bool {
        !self.is_italian()
    }

    /// True when the significant characters fill the whole layout.
    pub fn is_complete(&self) -> bool {
        self.fields.full_iban.trim_end().chars().count() == self.layout.total_length()
    }

    /// Every formal violation, in check order: total length, field lengths,
    /// CIN (Italy only), mod-97.
    pub fn violations(&self) -> Vec<IbanError> {
        let mut errors = Vec::new();
        let layout = self.layout;
        let iban = self.fields.full_iban.trim();

        check_length(&mut errors, "iban", iban, layout.total_length());
        check_length(
            &mut errors,
            "national_check",
            &self.fields.national_check,
            layout.national_check_length(),
        );
        check_length(
            &mut errors,
            "bank_code",
            &self.fields.bank_code,
            layout.bank_code_length(),
        );
        check_length(
            &mut errors,
            "branch_code",
            &self.fields.branch_code,
            layout.branch_code_length(),
        );
        check_length(
            &mut errors,
            "account_number",
            &self.fields.account_number,
            layout.account_number_length(),
        );

        if self.is_italian() {
            let code = format!(
                "{}{}{}",
                self.fields.bank_code, self.fields.branch_code, self.fields.account_number
            );
            match cin(&code) {
                Ok(expected) if self.fields.national_check == expected.to_string() => {}
                Ok(expected) => errors.push(IbanError::CheckDigitMismatch {
                    kind: CIN_CHECK,
                    expected: expected.to_string(),
                    actual: self.fields.national_check.clone(),
                }),
                Err(err) => errors.push(err),
            }
        }

        match iban_remainder(iban) {
            Ok(1) => {}
            Ok(remainder) => errors.push(IbanError::CheckDigitMismatch {
                kind: IBAN_CHECK,
                expected: "1".to_string(),
                actual: remainder.to_string(),
            }),
            Err(err) => errors.push(err),
        }

        errors
    }

    /// Fails with the first formal violation.
    pub fn validate_formal(&self) -> Result<()> {
        match self.violations().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Empty on success, otherwise the message of the first violation.
    pub fn validate_formal_message(&self) -> String {
        self.validate_formal()
            .err()
            .map(|err| err.to_string())
            .unwrap_or_default()
    }

    pub fn is_valid(&self) -> bool {
        self.validate_formal().is_ok()
    }

    /// The IBAN right-padded with `fill` up to the layout length.
    pub fn fill_with(&self, fill: char) -> String {
        pad_right(self.fields.full_iban.trim_end(), self.layout.total_length(), fill)
    }
}

impl Iban<'static> {
    /// Parses against the standard country table.
    pub fn from_string(raw: &str) -> Result<Self> {
        Self::parse(CountryRegistry::standard(), raw)
    }

    pub fn from_components(
        country_code: &str,
        check_digit: &str,
        national_check: &str,
        bank_code: &str,
        branch_code: &str,
        account_number: &str,
    ) -> Result<Self> {
        Self::from_parts(
            CountryRegistry::standard(),
            country_code,
            check_digit,
            national_check,
            bank_code,
            branch_code,
            account_number,
        )
    }
}

impl FromStr for Iban<'static> {
    type Err = IbanError;

    fn from_str(raw: &str) -> Result<Self> {
        Self::from_string(raw)
    }
}

impl fmt::Display for Iban<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fields.full_iban.trim_end())
    }
}

fn check_length(errors: &mut Vec<IbanError>, field: &'static str, value: &str, expected: usize) {
    let actual = value.trim().chars().count();
    if actual != expected {
        errors.push(IbanError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_italian() {
        let iban = Iban::from_string(" it60x0542811101000000123456 ").unwrap();
        assert_eq!(iban.full_iban(), "IT60X0542811101000000123456");
        assert_eq!(iban.country_code(), "IT");
        assert_eq!(iban.check_digit(), "60");
        assert_eq!(iban.national_check(), "X");
        assert_eq!(iban.bank_code(), "05428");
        assert_eq!(iban.branch_code(), "11101");
        assert_eq!(iban.account_number(), "000000123456");
        assert!(iban.is_italian());
        assert!(!iban.is_foreign());
        assert!(iban.is_complete());
        assert!(iban.is_sepa());
        assert_eq!(iban.currency_code(), "EUR");
        assert_eq!(iban.validate_formal(), Ok(()));
        assert_eq!(iban.validate_formal_message(), "");
    }

    #[test]
    fn unknown_country_is_rejected() {
        assert_eq!(
            Iban::from_string("ZZ1234567890"),
            Err(IbanError::UnsupportedCountry("ZZ".to_string()))
        );
    }

    #[test]
    fn short_input_defaults_to_italy() {
        for raw in ["", " ", "I"] {
            let iban = Iban::from_string(raw).unwrap();
            assert_eq!(iban.layout().country_code(), "IT");
            assert_eq!(iban.fields(), &IbanFields::default());
            assert!(iban.is_italian());
            assert!(!iban.is_complete());
            assert!(!iban.is_valid());
        }
    }

    #[test]
    fn short_input_is_padded_and_incomplete() {
        let iban = Iban::from_string("IT60X05428").unwrap();
        assert_eq!(iban.full_iban().len(), 27);
        assert!(!iban.is_complete());
        assert_eq!(iban.branch_code(), "     ");
        assert_eq!(iban.fill_with('*'), "IT60X05428*****************");
        assert_eq!(iban.to_string(), "IT60X05428");
        assert_eq!(
            iban.validate_formal(),
            Err(IbanError::LengthMismatch {
                field: "iban",
                expected: 27,
                actual: 10
            })
        );
    }

    #[test]
    fn wrong_cin_is_reported() {
        let iban = Iban::from_string("IT60Y0542811101000000123456").unwrap();
        let violations = iban.violations();
        assert_eq!(
            violations[0],
            IbanError::CheckDigitMismatch {
                kind: CIN_CHECK,
                expected: "X".to_string(),
                actual: "Y".to_string()
            }
        );
        assert!(matches!(
            violations[1],
            IbanError::CheckDigitMismatch {
                kind: IBAN_CHECK,
                ..
            }
        ));
    }

    #[test]
    fn foreign_iban_skips_cin() {
        let iban = Iban::from_string("FR7630006000011234567890189").unwrap();
        assert!(iban.is_foreign());
        assert_eq!(iban.national_check(), "89");
        assert!(iban.is_valid());
    }

    #[test]
    fn message_variant_reports_first_error() {
        let iban = Iban::from_string("DE88370400440532013000").unwrap();
        assert_eq!(
            iban.validate_formal_message(),
            "IBAN check mismatch: expected 1, found 0"
        );
    }

    #[test]
    fn parts_are_laid_out_by_template() {
        let iban = Iban::from_components("fr", "76", "89", "30006", "00001", "12345678901").unwrap();
        assert_eq!(iban.full_iban(), "FR7630006000011234567890189");
        assert!(iban.is_valid());
    }

    #[test]
    fn overlong_part_is_not_cut() {
        let iban =
            Iban::from_components("IT", "60", "X", "054281", "11101", "000000123456").unwrap();
        assert_eq!(iban.full_iban(), "IT60X05428111101000000123456");
        assert!(!iban.is_complete());
        assert_eq!(
            iban.validate_formal(),
            Err(IbanError::LengthMismatch {
                field: "iban",
                expected: 27,
                actual: 28
            })
        );
        let raw = Iban::from_string("IT60X05428111101000000123456").unwrap();
        assert_eq!(iban, raw);
    }

    #[test]
    fn parts_split_at_other_boundaries_are_concatenated() {
        let iban =
            Iban::from_components("IT", "60", "X", "0542", "811101", "000000123456").unwrap();
        assert_eq!(iban.full_iban(), "IT60X0542811101000000123456");
        assert!(iban.is_valid());
    }

    #[test]
    fn part_without_template_slot_is_kept() {
        let iban = Iban::from_components("DE", "89", "", "37040044", "9", "0532013000").unwrap();
        assert_eq!(iban.full_iban(), "DE893704004405320130009");
        assert!(!iban.is_valid());
    }

    #[test]
    fn parts_with_unknown_country_fail() {
        assert_eq!(
            Iban::from_components("ZZ", "00", "", "1", "2", "3"),
            Err(IbanError::UnsupportedCountry("ZZ".to_string()))
        );
    }

    #[test]
    fn custom_registry() {
        let mut registry = CountryRegistry::new();
        registry.register(CountryLayout::new("IT", "ITALY", "IT00KBBBBBSSSSSCCCCCCCCCCCC", true, "EUR"));
        let iban = Iban::parse(&registry, "IT60X0542811101000000123456").unwrap();
        assert!(iban.is_valid());
        assert!(Iban::parse(&registry, "DE89370400440532013000").is_err());

        let empty = CountryRegistry::new();
        assert_eq!(
            Iban::parse(&empty, "I"),
            Err(IbanError::UnsupportedCountry("IT".to_string()))
        );
    }
}

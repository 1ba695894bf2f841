use crate::checksum::check_digits;
use crate::cin::cin;
use crate::error::Result;
use crate::models::IbanFields;
use crate::reference::DOMESTIC_COUNTRY;
use crate::util::{fit_right, to_paper_format};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TemplateSymbol {
    CheckDigit,
    Bank,
    Branch,
    NationalCheck,
    Account,
}

impl TemplateSymbol {
    fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0' => Some(Self::CheckDigit),
            'B' => Some(Self::Bank),
            'S' => Some(Self::Branch),
            'K' => Some(Self::NationalCheck),
            'C' => Some(Self::Account),
            _ => None,
        }
    }
}

/// One country's fixed-width IBAN grammar.
///
/// The template spells every IBAN position: the first two are the country
/// code, the rest use `0` (IBAN check digit), `B` (bank), `S` (branch),
/// `K` (national check) and `C` (account number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryLayout {
    country_code: String,
    country_name: String,
    template: String,
    is_sepa: bool,
    currency_code: String,
    bank_code_length: usize,
    branch_code_length: usize,
    national_check_length: usize,
    account_number_length: usize,
}

impl CountryLayout {
    pub fn new(
        country_code: &str,
        country_name: &str,
        template: &str,
        is_sepa: bool,
        currency_code: &str,
    ) -> Self {
        let template = template.trim().to_uppercase();
        let mut layout = Self {
            country_code: country_code.trim().to_uppercase(),
            country_name: country_name.to_string(),
            template,
            is_sepa,
            currency_code: currency_code.to_string(),
            bank_code_length: 0,
            branch_code_length: 0,
            national_check_length: 0,
            account_number_length: 0,
        };

        for symbol in layout.template.chars().skip(2) {
            match TemplateSymbol::from_char(symbol) {
                Some(TemplateSymbol::Bank) => layout.bank_code_length += 1,
                Some(TemplateSymbol::Branch) => layout.branch_code_length += 1,
                Some(TemplateSymbol::NationalCheck) => layout.national_check_length += 1,
                Some(TemplateSymbol::Account) => layout.account_number_length += 1,
                Some(TemplateSymbol::CheckDigit) | None => {}
            }
        }
        layout
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn country_name(&self) -> &str {
        &self.country_name
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn is_sepa(&self) -> bool {
        self.is_sepa
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn total_length(&self) -> usize {
        self.template.chars().count()
    }

    pub fn bank_code_length(&self) -> usize {
        self.bank_code_length
    }

    pub fn branch_code_length(&self) -> usize {
        self.branch_code_length
    }

    pub fn national_check_length(&self) -> usize {
        self.national_check_length
    }

    pub fn account_number_length(&self) -> usize {
        self.account_number_length
    }

    /// True for the layout whose national check is the Italian CIN.
    pub fn is_domestic(&self) -> bool {
        self.country_code == DOMESTIC_COUNTRY
    }

    /// Routes each character of `iban` into its field following the template.
    ///
    /// Best effort: only the positions present in `iban` (and at most
    /// `total_length` of them) are scanned, so a truncated input yields
    /// shorter fields rather than an error.
    pub fn decompose(&self, iban: &str) -> IbanFields {
        let chars: Vec<char> = iban.chars().collect();
        let limit = chars.len().min(self.total_length());

        let mut bank_code = String::new();
        let mut branch_code = String::new();
        let mut national_check = String::new();
        let mut account_number = String::new();

        for (index, symbol) in self.template.chars().enumerate().take(limit).skip(2) {
            let ch = chars[index];
            match TemplateSymbol::from_char(symbol) {
                Some(TemplateSymbol::Bank) => bank_code.push(ch),
                Some(TemplateSymbol::Branch) => branch_code.push(ch),
                Some(TemplateSymbol::NationalCheck) => national_check.push(ch),
                Some(TemplateSymbol::Account) => account_number.push(ch),
                Some(TemplateSymbol::CheckDigit) | None => {}
            }
        }

        IbanFields {
            full_iban: iban.to_string(),
            paper_format: to_paper_format(iban),
            country_code: self.country_code.clone(),
            check_digit: chars.iter().skip(2).take(2).collect(),
            national_check,
            bank_code,
            branch_code,
            account_number,
        }
    }

    /// Assembles a template-length IBAN from discrete fields.
    ///
    /// Every field is space-padded (or cut) to its nominal length first, then
    /// characters are laid out in template order.
    pub fn recompose(
        &self,
        check_digit: &str,
        national_check: &str,
        bank_code: &str,
        branch_code: &str,
        account_number: &str,
    ) -> IbanFields {
        let check_digit = fit_right(check_digit, 2, ' ');
        let national_check = fit_right(national_check, self.national_check_length, ' ');
        let bank_code = fit_right(bank_code, self.bank_code_length, ' ');
        let branch_code = fit_right(branch_code, self.branch_code_length, ' ');
        let account_number = fit_right(account_number, self.account_number_length, ' ');

        let mut check_iter = check_digit.chars();
        let mut national_iter = national_check.chars();
        let mut bank_iter = bank_code.chars();
        let mut branch_iter = branch_code.chars();
        let mut account_iter = account_number.chars();

        let mut full_iban = String::with_capacity(self.template.len());
        full_iban.push_str(&self.country_code);
        for symbol in self.template.chars().skip(2) {
            let next = match TemplateSymbol::from_char(symbol) {
                Some(TemplateSymbol::CheckDigit) => check_iter.next(),
                Some(TemplateSymbol::Bank) => bank_iter.next(),
                Some(TemplateSymbol::Branch) => branch_iter.next(),
                Some(TemplateSymbol::NationalCheck) => national_iter.next(),
                Some(TemplateSymbol::Account) => account_iter.next(),
                None => None,
            };
            full_iban.push(next.unwrap_or(' '));
        }

        IbanFields {
            paper_format: to_paper_format(&full_iban),
            full_iban,
            country_code: self.country_code.clone(),
            check_digit,
            national_check,
            bank_code,
            branch_code,
            account_number,
        }
    }

    /// Concatenates the national fields verbatim, ordered by the first
    /// appearance of their symbol in the template.
    pub fn join_fields(
        &self,
        national_check: &str,
        bank_code: &str,
        branch_code: &str,
        account_number: &str,
    ) -> String {
        let mut order: Vec<TemplateSymbol> = Vec::with_capacity(4);
        for symbol in self.template.chars().skip(2).filter_map(TemplateSymbol::from_char) {
            if symbol != TemplateSymbol::CheckDigit && !order.contains(&symbol) {
                order.push(symbol);
            }
        }

        // Fields the template has no room for go last so they still count.
        for symbol in [
            TemplateSymbol::NationalCheck,
            TemplateSymbol::Bank,
            TemplateSymbol::Branch,
            TemplateSymbol::Account,
        ] {
            if !order.contains(&symbol) {
                order.push(symbol);
            }
        }

        let mut out = String::new();
        for symbol in order {
            out.push_str(match symbol {
                TemplateSymbol::Bank => bank_code,
                TemplateSymbol::Branch => branch_code,
                TemplateSymbol::NationalCheck => national_check,
                TemplateSymbol::Account => account_number,
                TemplateSymbol::CheckDigit => "",
            });
        }
        out
    }

    /// Builds a formally valid IBAN: fills the national check (CIN for Italy,
    /// zeros elsewhere) when it is not supplied, then computes the IBAN check
    /// digits.
    pub fn compose(
        &self,
        national_check: Option<&str>,
        bank_code: &str,
        branch_code: &str,
        account_number: &str,
    ) -> Result<IbanFields> {
        let national_check = match national_check {
            Some(value) => value.trim().to_uppercase(),
            None if self.is_domestic() => {
                let code = format!(
                    "{}{}{}",
                    fit_right(bank_code, self.bank_code_length, ' '),
                    fit_right(branch_code, self.branch_code_length, ' '),
                    fit_right(account_number, self.account_number_length, ' ')
                );
                cin(&code)?.to_string()
            }
            None => "0".repeat(self.national_check_length),
        };

        let draft = self.recompose("00", &national_check, bank_code, branch_code, account_number);
        let bban: String = draft.full_iban.chars().skip(4).collect();
        let digits = check_digits(&self.country_code, &bban)?;
        Ok(self.recompose(&digits, &national_check, bank_code, branch_code, account_number))
    }
}

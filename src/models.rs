use serde::{Deserialize, Serialize};

/// An IBAN split into its named parts according to a country template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbanFields {
    pub full_iban: String,
    pub paper_format: String,
    pub country_code: String,
    pub check_digit: String,
    pub national_check: String,
    pub bank_code: String,
    pub branch_code: String,
    pub account_number: String,
}

/// One input row of a batch file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanRow {
    #[serde(default)]
    pub reference: Option<String>,
    pub iban: String,
}

/// One output row of a batch file, mirroring the input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IbanCheckResult {
    #[serde(default)]
    pub reference: Option<String>,
    pub iban: String,
    pub country_code: String,
    pub valid: bool,
    pub message: String,
}

use crate::iban::Iban;
use crate::models::{IbanCheckResult, IbanRow};
use crate::registry::CountryRegistry;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueLevel {
    Error,
    Warning,
}

#[derive(Debug, Clone)]
pub struct PreflightIssue {
    pub level: IssueLevel,
    pub row: usize,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct PreflightReport {
    pub total_records: usize,
    pub valid_records: usize,
    pub issues: Vec<PreflightIssue>,
    pub results: Vec<IbanCheckResult>,
}

impl PreflightReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.level == IssueLevel::Warning)
            .count()
    }
}

/// Validates every `iban` column of a CSV file.
pub fn preflight_csv(registry: &CountryRegistry, path: &Path) -> Result<PreflightReport, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|err| err.to_string())?;
    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row: IbanRow = result.map_err(|err| err.to_string())?;
        rows.push(row);
    }
    Ok(preflight_rows(registry, &rows))
}

pub fn preflight_rows(registry: &CountryRegistry, rows: &[IbanRow]) -> PreflightReport {
    let mut issues = Vec::new();
    let mut results = Vec::with_capacity(rows.len());
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, row) in rows.iter().enumerate() {
        let line = idx + 1;
        let result = check_row(registry, row, line, &mut issues);
        if !result.iban.is_empty() && !seen.insert(result.iban.clone()) {
            issues.push(issue(IssueLevel::Warning, line, "duplicate IBAN in batch"));
        }
        results.push(result);
    }

    let valid_records = results.iter().filter(|result| result.valid).count();
    log::info!(
        "preflight checked {} IBANs: valid={} issues={}",
        results.len(),
        valid_records,
        issues.len()
    );

    PreflightReport {
        total_records: results.len(),
        valid_records,
        issues,
        results,
    }
}

fn check_row(
    registry: &CountryRegistry,
    row: &IbanRow,
    line: usize,
    issues: &mut Vec<PreflightIssue>,
) -> IbanCheckResult {
    let iban = match Iban::parse(registry, &row.iban) {
        Ok(iban) => iban,
        Err(err) => {
            let message = err.to_string();
            issues.push(issue(IssueLevel::Error, line, &message));
            return IbanCheckResult {
                reference: row.reference.clone(),
                iban: row.iban.trim().to_uppercase(),
                country_code: String::new(),
                valid: false,
                message,
            };
        }
    };

    let violations = iban.violations();
    for violation in &violations {
        issues.push(issue(IssueLevel::Error, line, &violation.to_string()));
    }
    if violations.is_empty() && !iban.is_sepa() {
        issues.push(issue(
            IssueLevel::Warning,
            line,
            "IBAN country is outside the SEPA area",
        ));
    }

    IbanCheckResult {
        reference: row.reference.clone(),
        iban: iban.to_string(),
        country_code: iban.layout().country_code().to_string(),
        valid: violations.is_empty(),
        message: violations
            .first()
            .map(|err| err.to_string())
            .unwrap_or_default(),
    }
}

pub fn write_results(path: &Path, results: &[IbanCheckResult]) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|err| err.to_string())?;
        }
    }
    let mut writer = csv::Writer::from_path(path).map_err(|err| err.to_string())?;
    for result in results {
        writer.serialize(result).map_err(|err| err.to_string())?;
    }
    writer.flush().map_err(|err| err.to_string())
}

fn issue(level: IssueLevel, row: usize, message: &str) -> PreflightIssue {
    PreflightIssue {
        level,
        row,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IbanError;

    fn row(iban: &str) -> IbanRow {
        IbanRow {
            reference: None,
            iban: iban.to_string(),
        }
    }

    #[test]
    fn mixed_batch() {
        let rows = vec![
            row("IT60X0542811101000000123456"),
            row("ZZ1234567890"),
            row("IT60X05428"),
            row("TR330006100519786457841326"),
            row("it60x0542811101000000123456"),
        ];
        let report = preflight_rows(CountryRegistry::standard(), &rows);
        assert_eq!(report.total_records, 5);
        assert_eq!(report.valid_records, 3);
        assert!(!report.results[1].valid);
        assert_eq!(report.results[1].country_code, "");
        let short_errors: Vec<&PreflightIssue> = report
            .issues
            .iter()
            .filter(|issue| issue.row == 3 && issue.level == IssueLevel::Error)
            .collect();
        let short_violations = Iban::from_string("IT60X05428").unwrap().violations();
        assert_eq!(short_errors.len(), short_violations.len());
        assert_eq!(
            short_errors[0].message,
            IbanError::LengthMismatch {
                field: "iban",
                expected: 27,
                actual: 10
            }
            .to_string()
        );
        assert!(report.issues.iter().any(|issue| issue.row == 4
            && issue.level == IssueLevel::Warning
            && issue.message.contains("SEPA")));
        assert!(report.issues.iter().any(|issue| issue.row == 5
            && issue.message == "duplicate IBAN in batch"));
        assert_eq!(report.warning_count(), 2);
    }
}

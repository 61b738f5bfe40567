//! # IBAN Subcommand
//!
//! Validates each argument independently and prints either its fields or
//! the first failing check.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use banking_iban::Iban;

use crate::OutputFormat;

/// Arguments for the `banking iban` subcommand.
#[derive(Args, Debug)]
pub struct IbanArgs {
    /// IBANs to validate, in electronic format (no spaces).
    #[arg(value_name = "IBAN", required = true)]
    pub codes: Vec<String>,
}

/// Outcome of validating one IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanReport {
    /// The input as given.
    pub input: String,
    /// Whether it passed every check.
    pub valid: bool,
    /// The first failing check, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Decomposed fields, present only for valid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<IbanFields>,
}

/// Non-empty fields of a valid IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IbanFields {
    /// Country code.
    pub country_code: String,
    /// Country name from the registry.
    pub country_name: String,
    /// Check digits.
    pub check_digit: String,
    /// Full BBAN.
    pub bban: String,
    /// `(entry type, value)` pairs in BBAN order.
    pub parts: Vec<(String, String)>,
}

impl IbanReport {
    /// Validate `input` and capture the outcome.
    pub fn new(input: &str) -> Self {
        match Iban::parse(input) {
            Ok(iban) => Self {
                input: input.to_string(),
                valid: true,
                error: None,
                fields: Some(IbanFields::from(&iban)),
            },
            Err(e) => Self {
                input: input.to_string(),
                valid: false,
                error: Some(e.to_string()),
                fields: None,
            },
        }
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        let Some(fields) = &self.fields else {
            let error = self.error.as_deref().unwrap_or_default();
            return format!("FAIL: {} — {}", self.input, error);
        };

        let mut out = format!("OK: {}", self.input);
        out.push_str(&format!(
            "\n  Country: {} ({})",
            fields.country_code, fields.country_name
        ));
        out.push_str(&format!("\n  CheckDigit: {}", fields.check_digit));
        out.push_str(&format!("\n  Bban: {}", fields.bban));
        for (name, value) in &fields.parts {
            out.push_str(&format!("\n  {name}: {value}"));
        }
        out
    }
}

impl From<&Iban> for IbanFields {
    fn from(iban: &Iban) -> Self {
        let parts = iban
            .structure()
            .segments(iban.bban())
            .map(|(part, value)| (part.entry_type().to_string(), value.to_string()))
            .collect();
        Self {
            country_code: iban.country_code().to_string(),
            country_name: iban.country().name.clone(),
            check_digit: iban.check_digit().to_string(),
            bban: iban.bban().to_string(),
            parts,
        }
    }
}

/// Execute the iban subcommand.
///
/// Returns exit code: 0 if every IBAN is valid, 1 otherwise.
pub fn run_iban(args: &IbanArgs, format: OutputFormat) -> Result<u8> {
    let reports: Vec<IbanReport> = args.codes.iter().map(|c| IbanReport::new(c)).collect();
    let all_valid = reports.iter().all(|r| r.valid);

    tracing::info!(
        total = reports.len(),
        invalid = reports.iter().filter(|r| !r.valid).count(),
        "validated ibans"
    );

    match format {
        OutputFormat::Text => {
            for report in &reports {
                println!("{}", report.render_text());
            }
        }
        OutputFormat::Json => println!("{}", crate::to_json(&reports)?),
    }

    Ok(crate::exit_code(all_valid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_report_lists_parts_in_order() {
        let report = IbanReport::new("GB29NWBK60161331926819");
        assert!(report.valid);
        let fields = report.fields.unwrap();
        assert_eq!(fields.country_name, "United Kingdom");
        assert_eq!(
            fields.parts,
            vec![
                ("BankCode".to_string(), "NWBK".to_string()),
                ("BranchCode".to_string(), "601613".to_string()),
                ("AccountNumber".to_string(), "31926819".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_report_carries_error() {
        let report = IbanReport::new("PL67102010260000042270201111");
        assert!(!report.valid);
        assert_eq!(report.error.as_deref(), Some("iban: invalid check digit"));
        assert!(report.fields.is_none());
        assert_eq!(
            report.render_text(),
            "FAIL: PL67102010260000042270201111 — iban: invalid check digit"
        );
    }

    #[test]
    fn text_rendering() {
        let text = IbanReport::new("BE68539007547034").render_text();
        assert!(text.starts_with("OK: BE68539007547034"));
        assert!(text.contains("Country: BE (Belgium)"));
        assert!(text.contains("BankCode: 539"));
        assert!(text.contains("NationalCheckDigit: 34"));
    }

    #[test]
    fn json_omits_absent_fields() {
        let json = crate::to_json(&IbanReport::new("")).unwrap();
        assert!(json.contains("\"valid\": false"));
        assert!(!json.contains("fields"));
    }
}

//! # Swift Subcommand
//!
//! Validates SWIFT/BIC codes and prints their fixed-offset fields.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use banking_swift::{Swift, SwiftType};

use crate::OutputFormat;

/// Arguments for the `banking swift` subcommand.
#[derive(Args, Debug)]
pub struct SwiftArgs {
    /// SWIFT/BIC codes to validate (8 or 11 characters).
    #[arg(value_name = "BIC", required = true)]
    pub codes: Vec<String>,
}

/// Outcome of validating one SWIFT/BIC code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwiftReport {
    /// The input as given.
    pub input: String,
    /// Whether it passed every check.
    pub valid: bool,
    /// The first failing check, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Decomposed fields, present only for valid input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<SwiftFields>,
}

/// Fields of a valid SWIFT/BIC code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwiftFields {
    /// Institution code.
    pub bank_code: String,
    /// Country code.
    pub country_code: String,
    /// Location code.
    pub location_code: String,
    /// Branch code, empty for 8-character codes.
    pub branch_code: String,
    /// Code form.
    pub swift_type: SwiftType,
    /// Whether the code addresses a primary office.
    pub primary_office: bool,
}

impl From<&Swift> for SwiftFields {
    fn from(swift: &Swift) -> Self {
        Self {
            bank_code: swift.bank_code().to_string(),
            country_code: swift.country_code().to_string(),
            location_code: swift.location_code().to_string(),
            branch_code: swift.branch_code().to_string(),
            swift_type: swift.swift_type(),
            primary_office: swift.is_primary_office(),
        }
    }
}

impl SwiftReport {
    /// Validate `input` and capture the outcome.
    pub fn new(input: &str) -> Self {
        let (error, fields) = match Swift::parse(input) {
            Ok(swift) => (None, Some(SwiftFields::from(&swift))),
            Err(e) => (Some(e.to_string()), None),
        };
        Self {
            input: input.to_string(),
            valid: fields.is_some(),
            error,
            fields,
        }
    }

    /// Human-readable rendering.
    pub fn render_text(&self) -> String {
        match &self.fields {
            Some(f) => {
                let branch = if f.branch_code.is_empty() {
                    "-"
                } else {
                    f.branch_code.as_str()
                };
                format!(
                    "OK: {} ({})\n  BankCode: {}\n  CountryCode: {}\n  LocationCode: {}\n  BranchCode: {}",
                    self.input, f.swift_type, f.bank_code, f.country_code, f.location_code, branch
                )
            }
            None => format!(
                "FAIL: {} — {}",
                self.input,
                self.error.as_deref().unwrap_or_default()
            ),
        }
    }
}

/// Execute the swift subcommand.
///
/// Returns exit code: 0 if every code is valid, 1 otherwise.
pub fn run_swift(args: &SwiftArgs, format: OutputFormat) -> Result<u8> {
    let reports: Vec<SwiftReport> = args.codes.iter().map(|c| SwiftReport::new(c)).collect();
    let all_valid = reports.iter().all(|r| r.valid);

    tracing::info!(total = reports.len(), all_valid, "validated swift codes");

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
    fn long_form_report() {
        let report = SwiftReport::new("DEUTDEFF500");
        assert!(report.valid);
        let text = report.render_text();
        assert!(text.starts_with("OK: DEUTDEFF500 (swift11)"));
        assert!(text.contains("BranchCode: 500"));
    }

    #[test]
    fn short_form_report_has_no_branch() {
        let text = SwiftReport::new("TATRSKBX").render_text();
        assert!(text.contains("BranchCode: -"));
    }

    #[test]
    fn unknown_country_report() {
        let report = SwiftReport::new("JMKMXXDL");
        assert!(!report.valid);
        assert_eq!(
            report.render_text(),
            "FAIL: JMKMXXDL — swift: country code does not exist"
        );
    }

    #[test]
    fn json_report() {
        let json = crate::to_json(&SwiftReport::new("DEUTDEFF500")).unwrap();
        assert!(json.contains("\"swift_type\": \"swift11\""));
        assert!(json.contains("\"primary_office\": false"));
    }
}

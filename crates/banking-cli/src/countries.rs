//! # Countries Subcommand
//!
//! Lists the built-in country registry, or shows the BBAN layout of one
//! country segment by segment.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use banking_core::{Countries, Country, CountryRegistry};

use crate::OutputFormat;

/// Arguments for the `banking countries` subcommand.
#[derive(Args, Debug)]
pub struct CountriesArgs {
    /// Show only this alpha-2 country code.
    #[arg(value_name = "CODE")]
    pub code: Option<String>,
}

/// Summary line for one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountrySummary {
    /// Alpha-2 code.
    pub alpha2_code: String,
    /// Alpha-3 code.
    pub alpha3_code: String,
    /// Country name.
    pub name: String,
    /// Full IBAN length: four header characters plus the BBAN.
    pub iban_length: usize,
    /// BBAN layout in registry notation, e.g. `3!n 7!n 2!n`.
    pub bban_format: String,
}

impl From<&Country> for CountrySummary {
    fn from(country: &Country) -> Self {
        Self {
            alpha2_code: country.alpha2_code.clone(),
            alpha3_code: country.alpha3_code.clone(),
            name: country.name.clone(),
            iban_length: 4 + country.structure.total_length(),
            bban_format: country.structure.to_string(),
        }
    }
}

/// One-line rendering of a country.
pub fn render_summary(summary: &CountrySummary) -> String {
    format!(
        "{} {} {:<2} {} ({})",
        summary.alpha2_code,
        summary.alpha3_code,
        summary.iban_length,
        summary.bban_format,
        summary.name
    )
}

/// Multi-line rendering of a country's segments.
pub fn render_detail(country: &Country) -> String {
    let mut out = render_summary(&CountrySummary::from(country));
    let mut offset = 0;
    for part in country.structure.parts() {
        out.push_str(&format!(
            "\n  {:>2}..{:<2} {:<20} {}!{}",
            offset,
            offset + part.length(),
            part.entry_type(),
            part.length(),
            part.char_class()
        ));
        offset += part.length();
    }
    out
}

/// Execute the countries subcommand.
///
/// Returns exit code: 0 on success, 1 if the requested country is unknown.
pub fn run_countries(args: &CountriesArgs, format: OutputFormat) -> Result<u8> {
    let registry = Countries::global();

    let Some(code) = &args.code else {
        let summaries: Vec<CountrySummary> = registry.iter().map(CountrySummary::from).collect();
        match format {
            OutputFormat::Text => {
                for summary in &summaries {
                    println!("{}", render_summary(summary));
                }
            }
            OutputFormat::Json => println!("{}", crate::to_json(&summaries)?),
        }
        return Ok(crate::EXIT_OK);
    };

    let Some(country) = registry.get(code) else {
        tracing::warn!(code = %code, "country not in registry");
        println!("FAIL: {code} — country code does not exist");
        return Ok(crate::EXIT_INVALID);
    };

    match format {
        OutputFormat::Text => println!("{}", render_detail(country)),
        OutputFormat::Json => println!("{}", crate::to_json(country)?),
    }
    Ok(crate::EXIT_OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_for_belgium() {
        let be = Countries::global().get("BE").unwrap();
        let summary = CountrySummary::from(be);
        assert_eq!(summary.iban_length, 16);
        assert_eq!(summary.bban_format, "3!n 7!n 2!n");
        assert_eq!(render_summary(&summary), "BE BEL 16 3!n 7!n 2!n (Belgium)");
    }

    #[test]
    fn detail_lists_offsets() {
        let gb = Countries::global().get("GB").unwrap();
        let detail = render_detail(gb);
        let lines: Vec<&str> = detail.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains(" 0..4 "));
        assert!(lines[1].contains("BankCode"));
        assert!(lines[3].contains("18"));
        assert!(lines[3].trim_end().ends_with("8!n"));
    }

    #[test]
    fn unknown_country_exits_invalid() {
        let args = CountriesArgs {
            code: Some("XX".to_string()),
        };
        assert_eq!(run_countries(&args, OutputFormat::Text).unwrap(), 1);
    }
}

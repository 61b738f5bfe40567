//! # SWIFT/BIC Scenarios
//!
//! End-to-end checks through the public API, one representative input per
//! failure kind, in both the 8- and 11-character forms where it applies.

use banking_swift::{Swift, SwiftError, SwiftType};

struct Valid {
    swift: &'static str,
    bank_code: &'static str,
    country_code: &'static str,
    location_code: &'static str,
    branch_code: &'static str,
    swift_type: SwiftType,
}

const VALID: &[Valid] = &[
    Valid {
        swift: "TATRSKBX",
        bank_code: "TATR",
        country_code: "SK",
        location_code: "BX",
        branch_code: "",
        swift_type: SwiftType::Swift8,
    },
    Valid {
        swift: "GIBASKBX",
        bank_code: "GIBA",
        country_code: "SK",
        location_code: "BX",
        branch_code: "",
        swift_type: SwiftType::Swift8,
    },
    Valid {
        swift: "DEUTDEFF500",
        bank_code: "DEUT",
        country_code: "DE",
        location_code: "FF",
        branch_code: "500",
        swift_type: SwiftType::Swift11,
    },
];

const INVALID: &[(&str, SwiftError)] = &[
    ("", SwiftError::InvalidLength),
    ("KU78N78", SwiftError::InvalidLength),
    ("KU78N78K43KL", SwiftError::InvalidLength),
    ("MK23MjK2", SwiftError::InvalidCase),
    ("MK23MjK2D23", SwiftError::InvalidCase),
    ("MK23KDLF", SwiftError::InvalidBankCode),
    ("24KM3KDLFDS", SwiftError::InvalidBankCode),
    ("JMKM3KDL", SwiftError::InvalidCountryCode),
    ("JMKM3KDLFDS", SwiftError::InvalidCountryCode),
    ("JMKMXXDL", SwiftError::CountryCodeNotPresent),
    ("JMKMXXDLFDS", SwiftError::CountryCodeNotPresent),
    ("JMKMSK--", SwiftError::InvalidLocationCode),
    ("JMKMSK--DSL", SwiftError::InvalidLocationCode),
    ("JMKMSKLDDS-", SwiftError::InvalidBranchCode),
];

#[test]
fn valid_codes_parse_with_expected_fields() {
    for case in VALID {
        let swift = Swift::parse(case.swift).unwrap_or_else(|e| panic!("{}: {e}", case.swift));
        assert_eq!(swift.bank_code(), case.bank_code, "{}", case.swift);
        assert_eq!(swift.country_code(), case.country_code, "{}", case.swift);
        assert_eq!(swift.location_code(), case.location_code, "{}", case.swift);
        assert_eq!(swift.branch_code(), case.branch_code, "{}", case.swift);
        assert_eq!(swift.swift_type(), case.swift_type, "{}", case.swift);
        assert_eq!(swift.to_string(), case.swift);
        assert_eq!(banking_swift::validate(case.swift), Ok(()));
    }
}

#[test]
fn invalid_codes_report_first_failure() {
    for (raw, expected) in INVALID {
        assert_eq!(Swift::parse(*raw), Err(*expected), "{raw}");
        assert_eq!(banking_swift::validate(raw), Err(*expected), "{raw}");
    }
}

#[test]
fn must_parse_accepts_valid_literals() {
    for case in VALID {
        assert_eq!(banking_swift::must_parse(case.swift).as_str(), case.swift);
    }
}

#[test]
fn invalid_codes_panic_in_must_parse() {
    for (raw, _) in INVALID {
        let result = std::panic::catch_unwind(|| banking_swift::must_parse(raw));
        assert!(result.is_err(), "{raw} did not panic");
    }
}

#[test]
fn non_ascii_input_is_rejected_without_panicking() {
    assert_eq!(
        banking_swift::validate("DÉUTDEFF"),
        Err(SwiftError::InvalidBankCode)
    );
    assert_eq!(
        banking_swift::validate("DEUTDEFFÄ00"),
        Err(SwiftError::InvalidBranchCode)
    );
}

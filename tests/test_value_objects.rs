//! Tests for the validated value objects through the public API.

use correios_models::domain::{
    FederalTaxNumber, Input, Phone, State, StateTaxNumber, TaxNumber, TrackingCode, ZipCode,
};
use correios_models::ValidationError;

/// Test zip codes normalize to 8 digits.
///
/// This test validates:
/// - Separators are stripped
/// - Display adds the dash back
/// - Equality against raw text re-validates the text
#[test]
fn test_zip_code_normalization() {
    let zip = ZipCode::new(" 01.310-200 ").unwrap();
    assert_eq!(zip.code(), "01310200");
    assert_eq!(zip.display(), "01310-200");
    assert_eq!(zip.to_string(), "01310200");
    assert_eq!(zip, "01310200");
    assert_ne!(zip, "0131020");
}

#[test]
fn test_zip_code_rejections() {
    for raw in ["", "1234567", "123456789", "abcdefgh"] {
        assert!(
            matches!(ZipCode::new(raw), Err(ValidationError::InvalidZipCode(_))),
            "{:?} should be rejected",
            raw
        );
    }
}

/// Test every state resolves from both its code and its name.
#[test]
fn test_state_codes_and_names() {
    let states: Vec<State> = State::all().collect();
    assert_eq!(states.len(), 27);

    for state in states {
        assert_eq!(State::new(&state.code().to_lowercase()).unwrap(), state);
        assert_eq!(State::new(state.display()).unwrap(), state);
        assert_eq!(State::new(&state.display().to_uppercase()).unwrap(), state);
    }
}

#[test]
fn test_state_errors() {
    assert_eq!(
        State::new("Atlantis"),
        Err(ValidationError::InvalidState("ATLANTIS".to_string()))
    );
    assert!(matches!(State::new("ZZ"), Err(ValidationError::InvalidState(_))));
}

/// Test phones parsed from different spellings compare equal.
#[test]
fn test_phone_equality_across_formats() {
    let local = Phone::new("(11) 3030-3030").unwrap();
    let international = Phone::new("+55 11 3030 3030").unwrap();

    assert_eq!(local, international);
    assert_eq!(local.country_code(), 55);
    assert_eq!(local.national_number(), 1130303030);
    assert_eq!(local.to_string(), "551130303030");
    assert_eq!(local.number(), "1130303030");
}

#[test]
fn test_phone_serializes_as_e164() {
    let phone = Phone::new("(11) 3030-3030").unwrap();
    let json = serde_json::to_string(&phone).unwrap();
    assert_eq!(json, "\"+551130303030\"");

    let parsed: Phone = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, phone);
}

/// Test the reference CNPJ from the documentation.
///
/// This test validates:
/// - Formatted input validates and displays identically
/// - Wrong check digits on the same base are rejected
#[test]
fn test_federal_tax_number() {
    let cnpj = FederalTaxNumber::new("11.222.333/0001-81").unwrap();
    assert_eq!(cnpj.number(), "11222333000181");
    assert_eq!(cnpj.display(), "11.222.333/0001-81");
    assert_eq!(cnpj, "11222333000181");

    for wrong in ["11.222.333/0001-80", "11.222.333/0001-91", "11.222.333/0001-18"] {
        assert!(
            matches!(
                FederalTaxNumber::new(wrong),
                Err(ValidationError::InvalidFederalTaxNumber(_))
            ),
            "{} should be rejected",
            wrong
        );
    }

    assert!(FederalTaxNumber::new("1122233300018").is_err());
}

#[test]
fn test_state_tax_number_keeps_digits() {
    let number = StateTaxNumber::new("110.042.490.114");
    assert_eq!(number.number(), "110042490114");
    assert_eq!(number.display(), "110042490114");
    assert_eq!(number, "110042490114");
}

#[test]
fn test_tracking_code() {
    let code = TrackingCode::new("sx 123 456 785 br").unwrap();
    assert_eq!(code.to_string(), "SX123456785BR");
    assert_eq!(code.display(), "SX 123 456 785 BR");
    assert_eq!(code.prefix_description(), Some("SEDEX 10"));
    assert!(matches!(
        TrackingCode::new("SX123456786BR"),
        Err(ValidationError::InvalidTrackingCode(_))
    ));
}

/// Test raw input is trimmed before it reaches the validators.
#[test]
fn test_input_resolution() {
    let raw: Input<'_, ZipCode> = "  01310-200  ".into();
    assert_eq!(raw.resolve().unwrap().code(), "01310200");

    let zip = ZipCode::new("01310200").unwrap();
    let value: Input<'_, ZipCode> = zip.clone().into();
    assert_eq!(value.resolve().unwrap(), zip);

    let owned: Input<'_, State> = String::from(" rio de janeiro ").into();
    assert_eq!(owned.resolve().unwrap().code(), "RJ");
}

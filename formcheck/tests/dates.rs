use chrono::NaiveDate;
use formcheck::dates::builtin_specs;
use formcheck::HandlerRegistry;

fn spec_for(name: &str) -> formcheck::dates::DateSpec {
    builtin_specs()
        .into_iter()
        .find(|(key, _)| *key == name)
        .map(|(_, spec)| spec)
        .unwrap_or_else(|| panic!("missing built-in spec {name}"))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// ============================================================================
// Round-trip: every built-in spec maps its sample back to the same date
// ============================================================================

#[test]
fn test_builtin_specs_roundtrip() {
    let samples = [
        ("YYYY-MM-DD", "2005-02-05"),
        ("YYYY-M-D", "2005-2-5"),
        ("MM.DD.YYYY", "02.05.2005"),
        ("M.D.YYYY", "2.5.2005"),
        ("MM/DD/YYYY", "02/05/2005"),
        ("M/D/YYYY", "2/5/2005"),
        ("MM-DD-YYYY", "02-05-2005"),
        ("M-D-YYYY", "2-5-2005"),
        ("DD.MM.YYYY", "05.02.2005"),
        ("D.M.YYYY", "5.2.2005"),
        ("DD/MM/YYYY", "05/02/2005"),
        ("D/M/YYYY", "5/2/2005"),
        ("DD-MM-YYYY", "05-02-2005"),
        ("D-M-YYYY", "5-2-2005"),
    ];
    for (name, sample) in samples {
        let parsed = spec_for(name).parse(sample);
        assert_eq!(parsed, Some(ymd(2005, 2, 5)), "spec {name} on {sample}");
    }
}

#[test]
fn test_all_builtin_specs_are_registered() {
    let registry = HandlerRegistry::new();
    for (name, _) in builtin_specs() {
        assert!(registry.date_spec(name).is_ok(), "spec {name} not seeded");
    }
}

// ============================================================================
// Calendar validation
// ============================================================================

#[test]
fn test_nonexistent_calendar_dates_are_rejected() {
    let spec = spec_for("YYYY-MM-DD");
    // Shape matches, calendar does not
    assert_eq!(spec.parse("2023-02-30"), None);
    assert_eq!(spec.parse("2023-02-29"), None);
    assert_eq!(spec.parse("2023-13-01"), None);
    assert_eq!(spec.parse("2023-00-10"), None);
}

#[test]
fn test_leap_day_is_accepted_on_leap_years() {
    let spec = spec_for("YYYY-MM-DD");
    assert_eq!(spec.parse("2024-02-29"), Some(ymd(2024, 2, 29)));
}

#[test]
fn test_shape_mismatch_is_rejected() {
    let spec = spec_for("YYYY-MM-DD");
    assert_eq!(spec.parse("05-02-2005"), None);
    assert_eq!(spec.parse("2005/02/05"), None);
    assert_eq!(spec.parse("not a date"), None);
    assert_eq!(spec.parse(""), None);
}

#[test]
fn test_separator_must_match_the_spec() {
    // The dotted spec must not accept dashes even though "." in a naive
    // regex would match any character
    let spec = spec_for("MM.DD.YYYY");
    assert_eq!(spec.parse("02.05.2005"), Some(ymd(2005, 2, 5)));
    assert_eq!(spec.parse("02-05-2005"), None);
}

#[test]
fn test_compact_specs_accept_single_digit_tokens() {
    let spec = spec_for("D/M/YYYY");
    assert_eq!(spec.parse("5/2/2005"), Some(ymd(2005, 2, 5)));
    assert_eq!(spec.parse("15/12/2005"), Some(ymd(2005, 12, 15)));
}

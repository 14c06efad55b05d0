//! Built-in named regex patterns for the `pattern` rule.

use regex::Regex;

/// The built-in named patterns, ready to seed a registry.
pub fn builtin_patterns() -> Vec<(&'static str, Regex)> {
    [
        ("lettersonly", "^[a-zA-Z]*$"),
        ("alphanumeric", r"^\w*$"),
        ("integer", "^-?[1-9][0-9]*$"),
        ("positiveinteger", r"^\d\d*$"),
        ("number", r"^-?(\d\d*\.\d*$)|(^-?\d\d*$)|(^-?\.\d\d*$)"),
        ("filepath_pdf", r"[\w_]*\.([pP][dD][fF])$"),
        ("filepath_jpg", r"[\w_]*\.([jJ][pP][eE]?[gG])$"),
        ("filepath_zip", r"[\w_]*\.([zZ][iI][pP])$"),
        ("filepath", r"[\w_]*\.\w{3}$"),
        ("time", "([0-1][0-9]|2[0-3]):[0-5][0-9]$"),
    ]
    .into_iter()
    .map(|(name, pattern)| {
        (
            name,
            Regex::new(pattern).expect("Invalid built-in pattern"),
        )
    })
    .collect()
}

//! Date specs: how to parse a date string of a given named format.

use chrono::NaiveDate;
use regex::Regex;

/// Describes how to parse one date format: a shape-matching regex plus the
/// position of the year/month/day tokens once the string is split on the
/// separator.
#[derive(Debug, Clone)]
pub struct DateSpec {
    regex: Regex,
    year: usize,
    month: usize,
    day: usize,
    separator: char,
}

impl DateSpec {
    pub fn new(regex: Regex, year: usize, month: usize, day: usize, separator: char) -> Self {
        Self {
            regex,
            year,
            month,
            day,
            separator,
        }
    }

    /// Parse a string into a calendar date.
    ///
    /// Returns `None` when the string does not match the shape regex, the
    /// tokens are not three numbers, or the numbers name a day that does not
    /// exist on the calendar (2023-02-30 matches the shape of `YYYY-MM-DD`
    /// but is still rejected).
    pub fn parse(&self, raw: &str) -> Option<NaiveDate> {
        if !self.regex.is_match(raw) {
            return None;
        }
        let tokens: Vec<&str> = raw.split(self.separator).collect();
        if tokens.len() != 3 {
            return None;
        }
        let year: i32 = tokens.get(self.year)?.parse().ok()?;
        let month: u32 = tokens.get(self.month)?.parse().ok()?;
        let day: u32 = tokens.get(self.day)?.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// The built-in date specs, ready to seed a registry. Keys are the
/// human-readable format strings fields reference via `datepattern`.
pub fn builtin_specs() -> Vec<(&'static str, DateSpec)> {
    [
        ("YYYY-MM-DD", (r"^([0-9]{4})-([0-1][0-9])-([0-3][0-9])$", 0, 1, 2, '-')),
        ("YYYY-M-D", (r"^([0-9]{4})-([0-1]?[0-9])-([0-3]?[0-9])$", 0, 1, 2, '-')),
        ("MM.DD.YYYY", (r"^([0-1][0-9])\.([0-3][0-9])\.([0-9]{4})$", 2, 0, 1, '.')),
        ("M.D.YYYY", (r"^([0-1]?[0-9])\.([0-3]?[0-9])\.([0-9]{4})$", 2, 0, 1, '.')),
        ("MM/DD/YYYY", (r"^([0-1][0-9])/([0-3][0-9])/([0-9]{4})$", 2, 0, 1, '/')),
        ("M/D/YYYY", (r"^([0-1]?[0-9])/([0-3]?[0-9])/([0-9]{4})$", 2, 0, 1, '/')),
        ("MM-DD-YYYY", (r"^([0-1][0-9])-([0-3][0-9])-([0-9]{4})$", 2, 0, 1, '-')),
        ("M-D-YYYY", (r"^([0-1]?[0-9])-([0-3]?[0-9])-([0-9]{4})$", 2, 0, 1, '-')),
        ("DD.MM.YYYY", (r"^([0-3][0-9])\.([0-1][0-9])\.([0-9]{4})$", 2, 1, 0, '.')),
        ("D.M.YYYY", (r"^([0-3]?[0-9])\.([0-1]?[0-9])\.([0-9]{4})$", 2, 1, 0, '.')),
        ("DD/MM/YYYY", (r"^([0-3][0-9])/([0-1][0-9])/([0-9]{4})$", 2, 1, 0, '/')),
        ("D/M/YYYY", (r"^([0-3]?[0-9])/([0-1]?[0-9])/([0-9]{4})$", 2, 1, 0, '/')),
        ("DD-MM-YYYY", (r"^([0-3][0-9])-([0-1][0-9])-([0-9]{4})$", 2, 1, 0, '-')),
        ("D-M-YYYY", (r"^([0-3]?[0-9])-([0-1]?[0-9])-([0-9]{4})$", 2, 1, 0, '-')),
    ]
    .into_iter()
    .map(|(name, (pattern, year, month, day, separator))| {
        (
            name,
            DateSpec::new(
                Regex::new(pattern).expect("Invalid built-in date pattern"),
                year,
                month,
                day,
                separator,
            ),
        )
    })
    .collect()
}

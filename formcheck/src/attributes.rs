//! Names of the declarative validation attributes.

// Field-level rule and config attributes
pub const REQUIRED: &str = "required";
pub const EMAIL: &str = "email";
pub const PATTERN: &str = "pattern";
pub const MIN_LENGTH: &str = "minlength";
pub const MAX_LENGTH: &str = "maxlength";
pub const MIN_NUMBER: &str = "minnumber";
pub const MAX_NUMBER: &str = "maxnumber";
pub const DATE_PATTERN: &str = "datepattern";
pub const MIN_DATE: &str = "mindate";
pub const MAX_DATE: &str = "maxdate";
pub const EQUAL_TO: &str = "equalto";
pub const MIN_CHECKED: &str = "minchecked";
pub const MAX_CHECKED: &str = "maxchecked";
pub const INVALID_INDEX: &str = "invalidindex";
pub const INVALID_VALUE: &str = "invalidvalue";
pub const MESSAGE: &str = "message";
pub const ERROR_CLASS: &str = "errorclass";
pub const DISABLED_LABEL: &str = "disabledlabel";

// Form-level attributes
pub const BLOCK_SUBMIT: &str = "blocksubmit";
pub const ERROR: &str = "error";
pub const BEFORE: &str = "before";
pub const AFTER: &str = "after";

/// Date spec used when a field carries date rules but no `datepattern`.
pub const DEFAULT_DATE_PATTERN: &str = "YYYY-MM-DD";

/// Registry name of the error handler used when none is configured.
pub const DEFAULT_ERROR_HANDLER: &str = "errorAlert";

/// Every attribute a field may legitimately carry. Anything else in the
/// validation namespace is a configuration error, not a silent pass.
pub const KNOWN_ATTRIBUTES: &[&str] = &[
    REQUIRED,
    EMAIL,
    PATTERN,
    MIN_LENGTH,
    MAX_LENGTH,
    MIN_NUMBER,
    MAX_NUMBER,
    DATE_PATTERN,
    MIN_DATE,
    MAX_DATE,
    EQUAL_TO,
    MIN_CHECKED,
    MAX_CHECKED,
    INVALID_INDEX,
    INVALID_VALUE,
    MESSAGE,
    ERROR_CLASS,
    DISABLED_LABEL,
];

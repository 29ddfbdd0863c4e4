//! Conversion options — delimiter, foreign separators, edge trimming, input policy
//!
//! `CaseOptions` is plain data and (de)serializes with serde, so it can be
//! embedded in a caller's own configuration. Two presets reproduce the
//! historical variants:
//!
//! | preset  | delimiter | extra separators | trim edges | non-string input |
//! |---------|-----------|------------------|------------|------------------|
//! | `kebab` | `-`       | none             | yes        | strict (error)   |
//! | `dot`   | `.`       | `-`              | no         | lenient (`""`)   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;

use crate::{Error, Result};

// ── Delimiter ──────────────────────────────────────────────

/// Output separator. Always printable on its own and never alphanumeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Delimiter(char);

impl Delimiter {
    pub const HYPHEN: Delimiter = Delimiter('-');
    pub const DOT: Delimiter = Delimiter('.');

    /// Validate `c` as a delimiter.
    ///
    /// # Errors
    /// Returns `InvalidDelimiter` for alphanumeric, whitespace, control, or
    /// combining mark characters.
    pub fn new(c: char) -> Result<Self> {
        if c.is_alphanumeric()
            || c.is_whitespace()
            || is_blank(c)
            || c.is_control()
            || is_combining_mark(c)
        {
            return Err(Error::InvalidDelimiter(c));
        }
        Ok(Delimiter(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Delimiter {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Delimiter::new(c)
    }
}

impl From<Delimiter> for char {
    fn from(d: Delimiter) -> char {
        d.0
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Separator ──────────────────────────────────────────────

/// Extra input character treated like `_` and whitespace.
///
/// Letters, digits and combining marks are rejected: case folding can
/// produce them, which would make a second conversion split differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Separator(char);

impl Separator {
    pub const HYPHEN: Separator = Separator('-');

    /// Validate `c` as a separator.
    ///
    /// # Errors
    /// Returns `InvalidSeparator` for alphanumeric or combining mark characters.
    pub fn new(c: char) -> Result<Self> {
        if c.is_alphanumeric() || is_combining_mark(c) {
            return Err(Error::InvalidSeparator(c));
        }
        Ok(Separator(c))
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Separator {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Separator::new(c)
    }
}

impl From<Separator> for char {
    fn from(s: Separator) -> char {
        s.0
    }
}

/// Blank characters that always separate words: tab, line feed, vertical
/// tab, form feed, carriage return, the Zs space separators, line and
/// paragraph separators, and the byte order mark. NEL (U+0085) is not blank.
fn is_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{B}' | '\u{C}' | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

// ── Input policy ───────────────────────────────────────────

/// What to do when the input is not a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Fail with `InvalidInputType`
    #[default]
    #[serde(alias = "throw")]
    Strict,
    /// Substitute an empty string
    #[serde(alias = "emptyString")]
    Lenient,
}

// ── Presets ────────────────────────────────────────────────

/// Named output style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    Kebab,
    Dot,
}

impl Case {
    pub fn options(self) -> CaseOptions {
        match self {
            Case::Kebab => CaseOptions::kebab(),
            Case::Dot => CaseOptions::dot(),
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Case::Kebab => write!(f, "kebab"),
            Case::Dot => write!(f, "dot"),
        }
    }
}

impl FromStr for Case {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "kebab" | "kebab-case" | "kebab_case" => Ok(Case::Kebab),
            "dot" | "dot.case" | "dot-case" | "dot_case" => Ok(Case::Dot),
            _ => Err(Error::Config(format!("unknown case: {:?}", s))),
        }
    }
}

// ── Options ────────────────────────────────────────────────

/// Full conversion configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseOptions {
    pub delimiter: Delimiter,
    /// Foreign delimiters in addition to `_` and whitespace
    pub separators: Vec<Separator>,
    pub trim_edges: bool,
    pub on_invalid_input: InputPolicy,
}

impl CaseOptions {
    pub fn kebab() -> Self {
        Self {
            delimiter: Delimiter::HYPHEN,
            separators: Vec::new(),
            trim_edges: true,
            on_invalid_input: InputPolicy::Strict,
        }
    }

    pub fn dot() -> Self {
        Self {
            delimiter: Delimiter::DOT,
            separators: vec![Separator::HYPHEN],
            trim_edges: false,
            on_invalid_input: InputPolicy::Lenient,
        }
    }

    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_separator(mut self, separator: Separator) -> Self {
        if !self.separators.contains(&separator) {
            self.separators.push(separator);
        }
        self
    }

    pub fn with_separators(mut self, separators: impl IntoIterator<Item = Separator>) -> Self {
        self.separators = separators.into_iter().collect();
        self
    }

    pub fn with_trim_edges(mut self, trim_edges: bool) -> Self {
        self.trim_edges = trim_edges;
        self
    }

    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.on_invalid_input = policy;
        self
    }

    /// Parse options from a JSON object.
    ///
    /// Every field is optional. `preset` (`"kebab"` or `"dot"`) picks the base
    /// configuration, the remaining fields override it:
    ///
    /// ```
    /// use casenorm_core::CaseOptions;
    ///
    /// let opts = CaseOptions::from_json(r#"{"preset": "dot", "delimiter": "/"}"#).unwrap();
    /// assert_eq!(opts.delimiter.as_char(), '/');
    /// assert!(!opts.trim_edges);
    /// ```
    ///
    /// # Errors
    /// `Config` for malformed JSON or unknown fields, `InvalidDelimiter` or
    /// `InvalidSeparator` for characters that fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawOptions =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;

        let mut opts = raw.preset.unwrap_or(Case::Kebab).options();
        if let Some(c) = raw.delimiter {
            opts.delimiter = Delimiter::new(c)?;
        }
        if let Some(separators) = raw.separators {
            opts.separators = separators
                .into_iter()
                .map(Separator::new)
                .collect::<Result<_>>()?;
        }
        if let Some(trim) = raw.trim_edges {
            opts.trim_edges = trim;
        }
        if let Some(policy) = raw.on_invalid_input {
            opts.on_invalid_input = policy;
        }
        Ok(opts)
    }

    /// `_`, a blank, or one of the configured extra separators
    pub(crate) fn is_separator(&self, c: char) -> bool {
        c == '_' || is_blank(c) || self.separators.iter().any(|s| s.as_char() == c)
    }
}

impl Default for CaseOptions {
    fn default() -> Self {
        Self::kebab()
    }
}

impl From<Case> for CaseOptions {
    fn from(case: Case) -> Self {
        case.options()
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    preset: Option<Case>,
    delimiter: Option<char>,
    separators: Option<Vec<char>>,
    trim_edges: Option<bool>,
    on_invalid_input: Option<InputPolicy>,
}

//! Case converter — rewrites identifiers into one delimiter-separated lowercase form
//!
//! # Pipeline
//!
//! `input → word boundaries → foreign separators → lowercase → collapse → trim`
//!
//! Each step consumes the output of the previous one.
//!
//! # Guarantees
//!
//! - **Pure**: output depends only on `(input, options)`
//! - **Idempotent**: `convert(convert(x)) == convert(x)`
//! - **Collapsed**: no run of two or more delimiters in the output
//! - **Lowercase**: every letter with a lowercase mapping is folded
//!
//! Word boundaries are only detected at an ASCII lowercase letter followed by
//! an ASCII uppercase letter. Runs of capitals are never split, so
//! `XMLParser` becomes `xmlparser`, not `xml-parser`.

use serde_json::Value;

use crate::options::{Case, CaseOptions};
use crate::Result;

// ── Public API ─────────────────────────────────────────────

/// Normalize `input` according to `options`.
///
/// ```
/// use casenorm_core::{convert, CaseOptions};
///
/// assert_eq!(convert("MY_VARIABLE_NAME", &CaseOptions::kebab()), "my-variable-name");
/// assert_eq!(convert("hello-world", &CaseOptions::dot()), "hello.world");
/// ```
pub fn convert(input: &str, options: &CaseOptions) -> String {
    let delimiter = options.delimiter.as_char();

    // ── Step 1: camelCase / PascalCase boundaries ──────
    let split = insert_word_boundaries(input, delimiter);

    // ── Step 2: foreign separators ─────────────────────
    let unified = replace_separators(&split, options);

    // ── Step 3: case folding ───────────────────────────
    let lowered = unified.to_lowercase();

    // ── Step 4: collapse delimiter runs ────────────────
    let collapsed = collapse_delimiters(&lowered, delimiter);

    // ── Step 5: edge trimming ──────────────────────────
    let output = if options.trim_edges {
        collapsed.trim_matches(delimiter).to_string()
    } else {
        collapsed
    };

    tracing::trace!(
        delimiter = %delimiter,
        input_len = input.len(),
        output_len = output.len(),
        "converted identifier"
    );
    output
}

/// Convert to kebab-case: `myVariableName` → `my-variable-name`
pub fn to_kebab_case(input: &str) -> String {
    convert(input, &CaseOptions::kebab())
}

/// Convert to dot.case: `helloWorld` → `hello.world`
///
/// Leading and trailing delimiters are kept: `_hello_` → `.hello.`
pub fn to_dot_case(input: &str) -> String {
    convert(input, &CaseOptions::dot())
}

// ── Reusable converter ─────────────────────────────────────

/// A converter bound to one set of options
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Converter {
    options: CaseOptions,
}

impl Converter {
    pub fn new(options: CaseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CaseOptions {
        &self.options
    }

    pub fn convert(&self, input: &str) -> String {
        convert(input, &self.options)
    }

    /// Convert an untyped value, applying the configured input policy
    pub fn convert_value(&self, input: &Value) -> Result<String> {
        crate::value::convert_value(input, &self.options)
    }
}

impl From<CaseOptions> for Converter {
    fn from(options: CaseOptions) -> Self {
        Self::new(options)
    }
}

impl From<Case> for Converter {
    fn from(case: Case) -> Self {
        Self::new(case.options())
    }
}

// ── Steps ──────────────────────────────────────────────────

fn insert_word_boundaries(input: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 4);
    let mut prev: Option<char> = None;
    for c in input.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
            out.push(delimiter);
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Each maximal run of separators becomes one delimiter
fn replace_separators(input: &str, options: &CaseOptions) -> String {
    let delimiter = options.delimiter.as_char();
    let mut out = String::with_capacity(input.len());
    let mut in_run = false;
    for c in input.chars() {
        if options.is_separator(c) {
            if !in_run {
                out.push(delimiter);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn collapse_delimiters(input: &str, delimiter: char) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_was_delimiter = false;
    for c in input.chars() {
        let is_delimiter = c == delimiter;
        if !(is_delimiter && prev_was_delimiter) {
            out.push(c);
        }
        prev_was_delimiter = is_delimiter;
    }
    out
}

//! Casenorm Core - identifier case normalization
//!
//! Rewrites camelCase, PascalCase, snake_case, SCREAMING_SNAKE_CASE,
//! kebab-case and space-separated words into one lowercase,
//! delimiter-separated form.
//!
//! # Architecture
//!
//! ```text
//! &str ──────────→ convert(input, CaseOptions) → String
//!                     ↑
//! serde_json::Value → convert_value → InputPolicy (strict: Error / lenient: "")
//! ```
//!
//! # Guarantees
//!
//! - **Pure**: same input and options always produce identical output
//! - **Idempotent**: normalizing normalized output changes nothing
//! - **Total**: converting a `&str` never fails
//!
//! # Example
//!
//! ```
//! use casenorm_core::{to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_kebab_case("MyVariableName"), "my-variable-name");
//! assert_eq!(to_dot_case("hello_world"), "hello.world");
//! ```

pub mod converter;
pub mod error;
pub mod options;
pub mod value;

pub use converter::{convert, to_dot_case, to_kebab_case, Converter};
pub use error::{Error, Result};
pub use options::{Case, CaseOptions, Delimiter, InputPolicy, Separator};
pub use value::{convert_value, convert_values, dot_case_value, kebab_case_value};

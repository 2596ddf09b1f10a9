//! keycase - normalize identifier-like text into standard case conventions.
//!
//! Splits free-form input (names, labels, configuration keys) into word
//! tokens on whitespace, hyphens and underscores, then renders the tokens as
//! camelCase, kebab-case or dot.case. Useful for code generation and for
//! keeping key naming consistent across a codebase.
//!
//! ```
//! use keycase::{convert_str, to_camel_case, CaseStyle};
//! use serde_json::json;
//!
//! assert_eq!(convert_str("SCREEN_NAME", CaseStyle::Dot), "screen.name");
//! assert_eq!(to_camel_case(&json!("hello world")).unwrap(), "helloWorld");
//! assert!(to_camel_case(&json!(123)).is_err());
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod render;
pub mod tokenize;
pub mod validate;

pub use error::{ConvertError, ConvertResult};
pub use pipeline::{convert, convert_str, to_camel_case, to_dot_case, to_kebab_case};
pub use render::{render, CaseStyle};
pub use tokenize::tokenize;

//! Conversion pipeline: validate -> tokenize -> render.
//!
//! Every conversion is an independent, side-effect-free computation over its
//! own input; nothing is retained between calls.

use serde_json::Value;

use crate::error::ConvertResult;
use crate::render::{render, CaseStyle};
use crate::tokenize::tokenize;
use crate::validate::validate;

/// Run the full pipeline on a dynamically typed value
pub fn convert(input: &Value, style: CaseStyle) -> ConvertResult<String> {
    let text = validate(input)?;
    Ok(convert_str(text, style))
}

/// Convert text that is already known to be a string.
/// Cannot fail: empty and whitespace-only inputs render to `""`.
pub fn convert_str(text: &str, style: CaseStyle) -> String {
    render(&tokenize(text), style)
}

/// Convert a value to camelCase
pub fn to_camel_case(input: &Value) -> ConvertResult<String> {
    convert(input, CaseStyle::Camel)
}

/// Convert a value to kebab-case
pub fn to_kebab_case(input: &Value) -> ConvertResult<String> {
    convert(input, CaseStyle::Kebab)
}

/// Convert a value to dot.case
pub fn to_dot_case(input: &Value) -> ConvertResult<String> {
    convert(input, CaseStyle::Dot)
}

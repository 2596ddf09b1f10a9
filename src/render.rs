use serde::{Deserialize, Serialize};

/// Target case convention for rendered output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    /// camelCase: `hello world` -> `helloWorld`
    Camel,
    /// kebab-case: `hello world` -> `hello-world`
    Kebab,
    /// dot.case: `hello world` -> `hello.world`
    Dot,
}

impl CaseStyle {
    /// Parse a style name as written in config files or on the command line
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "camel" | "camelCase" => Some(CaseStyle::Camel),
            "kebab" | "kebab-case" => Some(CaseStyle::Kebab),
            "dot" | "dot.case" => Some(CaseStyle::Dot),
            _ => None,
        }
    }

    /// Canonical name, the inverse of `parse`
    pub fn name(self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Dot => "dot",
        }
    }
}

/// Render a token sequence into the requested style.
/// Tokens are joined in the order given; an empty sequence renders to the
/// empty string for every style.
pub fn render(tokens: &[&str], style: CaseStyle) -> String {
    match style {
        CaseStyle::Camel => render_camel(tokens),
        CaseStyle::Kebab => render_joined(tokens, '-'),
        CaseStyle::Dot => render_joined(tokens, '.'),
    }
}

/// First token fully lowercased, each later token capitalized, no separator
fn render_camel(tokens: &[&str]) -> String {
    let mut result = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i == 0 {
            result.push_str(&token.to_lowercase());
        } else {
            result.push_str(&capitalize(token));
        }
    }

    result
}

/// All tokens lowercased, joined with a single separator character
fn render_joined(tokens: &[&str], separator: char) -> String {
    let mut result = String::new();

    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(&token.to_lowercase());
    }

    result
}

/// Uppercase the first character, lowercase the rest.
/// Case mapping touches only alphabetic characters, so digit-leading tokens
/// like `2fa` pass through the uppercase step unchanged.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
    }
}

//! Placeholder substitution for template file contents.
//!
//! A placeholder is an identifier wrapped in double braces, `{{projectName}}`.
//! Spaces or tabs are allowed inside the braces (`{{ projectName }}`).
//! Placeholders with a name missing from the values map are kept verbatim.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::project::ValuesMap;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*\}\}")
        .expect("placeholder pattern is a valid regex")
});

/// Replaces every known placeholder in `content` with its value.
///
/// Substitution is a single pass: inserted values are never scanned again.
/// Returns `Cow::Borrowed` when `content` contains no placeholder at all.
///
/// ```
/// use create_yoshi_app::{placeholder::substitute, project::ValuesMap};
///
/// let values = ValuesMap::from([("projectName".to_string(), "demo".to_string())]);
/// assert_eq!(substitute(r#"{"name": "{{projectName}}"}"#, &values), r#"{"name": "demo"}"#);
/// assert_eq!(substitute("{{unknown}}", &values), "{{unknown}}");
/// ```
pub fn substitute<'a>(content: &'a str, values: &ValuesMap) -> Cow<'a, str> {
    PLACEHOLDER.replace_all(content, |caps: &Captures| match values.get(&caps[1]) {
        Some(value) => value.clone(),
        None => caps[0].to_string(),
    })
}

/// Names of all placeholders found in `content`, in order of appearance.
pub fn placeholders(content: &str) -> Vec<&str> {
    PLACEHOLDER
        .captures_iter(content)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

//! Environment variable expansion for connection strings
//!
//! Follows shell conventions: `$NAME` and `${NAME}` are replaced with the
//! variable's value and unset variables expand to the empty string.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `${NAME}`, a dangling `${`, a one-character special name, or `$NAME`
static ENV_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$(?:\{([^}]*)\}|\{|([*#$@!?0-9-])|([A-Za-z_][A-Za-z0-9_]*))").unwrap()
});

/// Expand variable references using the process environment
pub fn expand_env(content: &str) -> String {
    expand_with(content, |name| std::env::var(name).ok())
}

/// Expand variable references using `lookup` to resolve names
pub fn expand_with<F>(content: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    ENV_PATTERN
        .replace_all(content, |caps: &Captures| match var_name(caps) {
            Some(name) if !name.is_empty() => lookup(name).unwrap_or_default(),
            // `${}` and an unterminated `${` are consumed
            _ => String::new(),
        })
        .into_owned()
}

/// Extract the names of all variables referenced in a string
pub fn referenced_vars(content: &str) -> Vec<String> {
    ENV_PATTERN
        .captures_iter(content)
        .filter_map(|caps| var_name(&caps).map(str::to_string))
        .filter(|name| !name.is_empty())
        .collect()
}

fn var_name<'a>(caps: &Captures<'a>) -> Option<&'a str> {
    caps.get(1)
        .or_else(|| caps.get(2))
        .or_else(|| caps.get(3))
        .map(|m| m.as_str())
}

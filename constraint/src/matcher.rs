//! Compiled generic type matchers.

use regex_lite::Regex;
use soma_core::GenericTypeMatcher;

/// A generic type matcher ready to run against bodyparts.
///
/// Exact and contains matchers are lowercased once up front; patterns are
/// compiled case-insensitively.
#[derive(Debug, Clone)]
pub enum Matcher {
    Exact(String),
    Contains(String),
    Pattern(Regex),
}

impl Matcher {
    /// Compile an authored matcher. Fails with the regex error message for a
    /// pattern that does not compile.
    pub fn compile(matcher: &GenericTypeMatcher) -> Result<Self, String> {
        Ok(match matcher {
            GenericTypeMatcher::Exact(text) => Matcher::Exact(text.to_lowercase()),
            GenericTypeMatcher::Contains(text) => Matcher::Contains(text.to_lowercase()),
            GenericTypeMatcher::Pattern(pattern) => {
                let re = Regex::new(&format!("(?i){}", pattern)).map_err(|e| e.to_string())?;
                Matcher::Pattern(re)
            }
        })
    }

    /// Check a bodypart generic type.
    pub fn matches(&self, generic_type: &str) -> bool {
        match self {
            Matcher::Exact(text) => generic_type.to_lowercase() == *text,
            Matcher::Contains(text) => generic_type.to_lowercase().contains(text.as_str()),
            Matcher::Pattern(re) => re.is_match(generic_type),
        }
    }
}

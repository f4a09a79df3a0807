//! Wildcard location patterns.
//!
//! A pattern such as `*Test.java`, `src/gen/*` or `org.acme.*#equals` matches
//! a violation when it matches either its file path (whole path or any
//! trailing run of path segments) or its code location (`package.Class#method`,
//! with or without package and method).

use regex::Regex;
use serde::Serialize;
use std::fmt;

use crate::error::Result;
use crate::types::Location;

#[derive(Debug, Clone, Serialize)]
#[serde(into = "String")]
pub struct LocationPattern {
    source: String,
    path: Regex,
    code: Regex,
    literal_len: usize,
}

impl LocationPattern {
    /// Compiles a `*` wildcard pattern.
    ///
    /// # Errors
    /// Returns error if the pattern is empty or cannot be compiled.
    pub fn parse(pattern: &str) -> Result<Self> {
        let source = pattern.trim().replace('\\', "/");
        if source.is_empty() {
            return Err(crate::error::GateError::Config(
                "empty location pattern".into(),
            ));
        }
        let body = source
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        Ok(Self {
            path: Regex::new(&format!("(^|/){body}$"))?,
            code: Regex::new(&format!("^{body}$"))?,
            literal_len: source.chars().filter(|c| *c != '*').count(),
            source,
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match quality for `location`, `None` if it does not match.
    #[must_use]
    pub fn quality(&self, location: &Location) -> Option<usize> {
        self.matches(location).then_some(self.literal_len)
    }

    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        let file = location.file.to_string_lossy().replace('\\', "/");
        if !file.is_empty() && self.path.is_match(&file) {
            return true;
        }
        code_candidates(location)
            .iter()
            .any(|candidate| self.code.is_match(candidate))
    }
}

fn code_candidates(location: &Location) -> Vec<String> {
    let Some(class) = location.class.as_deref() else {
        return Vec::new();
    };
    let mut out = vec![class.to_string()];
    if let Some(pkg) = location.package.as_deref().filter(|p| !p.is_empty()) {
        out.push(format!("{pkg}.{class}"));
    }
    if let Some(method) = location.method.as_deref() {
        let with_method: Vec<String> = out.iter().map(|c| format!("{c}#{method}")).collect();
        out.extend(with_method);
    }
    out
}

impl PartialEq for LocationPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for LocationPattern {}

impl fmt::Display for LocationPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<LocationPattern> for String {
    fn from(p: LocationPattern) -> Self {
        p.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code_loc(pkg: &str, class: &str, method: Option<&str>) -> Location {
        Location {
            package: Some(pkg.into()),
            class: Some(class.into()),
            method: method.map(Into::into),
            ..Location::at("src/main/java/Foo.java", 1)
        }
    }

    #[test]
    fn matches_trailing_path_segments() {
        let p = LocationPattern::parse("java/Foo.java").unwrap();
        assert!(p.matches(&Location::at("src/main/java/Foo.java", 1)));
        assert!(!p.matches(&Location::at("src/main/java/XFoo.java", 1)));
    }

    #[test]
    fn wildcard_matches_file_suffix() {
        let p = LocationPattern::parse("*Test.java").unwrap();
        assert!(p.matches(&Location::at("src/test/java/FooTest.java", 1)));
        assert!(!p.matches(&Location::at("src/test/java/FooTest.kt", 1)));
    }

    #[test]
    fn windows_separators_are_normalized() {
        let p = LocationPattern::parse("gen\\*").unwrap();
        assert!(p.matches(&Location::at("src/gen/Parser.java", 1)));
    }

    #[test]
    fn matches_code_locations() {
        let loc = code_loc("org.acme", "Foo", Some("bar"));
        assert!(LocationPattern::parse("org.acme.Foo").unwrap().matches(&loc));
        assert!(LocationPattern::parse("Foo#bar").unwrap().matches(&loc));
        assert!(LocationPattern::parse("org.acme.*#bar").unwrap().matches(&loc));
        assert!(!LocationPattern::parse("org.acme.Foo#baz").unwrap().matches(&loc));
    }

    #[test]
    fn quality_counts_literal_characters() {
        let p = LocationPattern::parse("*Foo*").unwrap();
        assert_eq!(p.quality(&Location::at("Foo.java", 1)), Some(3));
        assert_eq!(p.quality(&Location::at("Bar.java", 1)), None);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        assert!(LocationPattern::parse("  ").is_err());
    }
}

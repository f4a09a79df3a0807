//! PMD's built-in Java rule categories, plus configured variants of the
//! rules people most often tune.

use super::Ruleset;

const CATEGORIES: &[(&str, &str)] = &[
    ("bestpractices", "category/java/bestpractices.xml"),
    ("codestyle", "category/java/codestyle.xml"),
    ("design", "category/java/design.xml"),
    ("documentation", "category/java/documentation.xml"),
    ("errorprone", "category/java/errorprone.xml"),
    ("multithreading", "category/java/multithreading.xml"),
    ("performance", "category/java/performance.xml"),
    ("security", "category/java/security.xml"),
    ("quickstart", "rulesets/java/quickstart.xml"),
];

/// `(alias, PMD rule set name)` for every predefined rule set.
#[must_use]
pub fn all() -> &'static [(&'static str, &'static str)] {
    CATEGORIES
}

/// Resolves a short alias (`design`, `best-practices`) to its rule set.
#[must_use]
pub fn by_alias(alias: &str) -> Option<Ruleset> {
    let key = alias.trim().to_ascii_lowercase().replace(['-', '_'], "");
    CATEGORIES
        .iter()
        .find(|(a, _)| *a == key)
        .map(|(_, name)| Ruleset::new(*name))
}

/// Whether `name` is one of PMD's single-category rule sets, whose
/// violations report the category title as their rule set.
#[must_use]
pub fn is_category(name: &str) -> bool {
    CATEGORIES
        .iter()
        .any(|(_, n)| *n == name && n.starts_with("category/"))
}

/// Alias lookup, falling back to treating `name` as a PMD rule set reference.
#[must_use]
pub fn resolve(name: &str) -> Ruleset {
    by_alias(name).unwrap_or_else(|| Ruleset::new(name.trim()))
}

#[must_use]
pub fn best_practices() -> Ruleset {
    Ruleset::new("category/java/bestpractices.xml")
}

#[must_use]
pub fn code_style() -> Ruleset {
    Ruleset::new("category/java/codestyle.xml")
}

#[must_use]
pub fn design() -> Ruleset {
    Ruleset::new("category/java/design.xml")
}

#[must_use]
pub fn documentation() -> Ruleset {
    Ruleset::new("category/java/documentation.xml")
}

#[must_use]
pub fn error_prone() -> Ruleset {
    Ruleset::new("category/java/errorprone.xml")
}

#[must_use]
pub fn multithreading() -> Ruleset {
    Ruleset::new("category/java/multithreading.xml")
}

#[must_use]
pub fn performance() -> Ruleset {
    Ruleset::new("category/java/performance.xml")
}

#[must_use]
pub fn security() -> Ruleset {
    Ruleset::new("category/java/security.xml")
}

/// Design rules with a custom cyclomatic complexity report level.
#[must_use]
pub fn design_with_complexity(method_level: u32, class_level: u32) -> Ruleset {
    design()
        .with_property("CyclomaticComplexity", "methodReportLevel", method_level)
        .with_property("CyclomaticComplexity", "classReportLevel", class_level)
}

/// Design rules with custom NCSS (non-commenting source statements) limits.
#[must_use]
pub fn design_with_size_limits(method_ncss: u32, class_ncss: u32, max_methods: u32) -> Ruleset {
    design()
        .with_property("NcssCount", "methodReportLevel", method_ncss)
        .with_property("NcssCount", "classReportLevel", class_ncss)
        .with_property("TooManyMethods", "maxmethods", max_methods)
}

#[must_use]
pub fn code_style_with_variable_length(min_len: u32, max_len: u32) -> Ruleset {
    code_style()
        .with_property("ShortVariable", "minimum", min_len)
        .with_property("LongVariable", "minimum", max_len)
}

#[must_use]
pub fn documentation_with_comment_size(max_lines: u32, max_line_length: u32) -> Ruleset {
    documentation()
        .with_property("CommentSize", "maxLines", max_lines)
        .with_property("CommentSize", "maxLineLength", max_line_length)
}

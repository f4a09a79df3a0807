use std::fs;
use std::path::{Component, Path, PathBuf};

use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

use super::json::{self, JsonReport};
use super::{Engine, EngineRequest, ReportSink};
use crate::error::{GateError, Result};
use crate::ruleset::predefined;
use crate::types::Violation;

/// Replays PMD JSON reports produced by an earlier run (e.g. a build plugin).
///
/// Only violations in files under the requested sources are forwarded. When
/// every selected rule set is a single PMD category, violations of other
/// categories are dropped too; composite or custom rule sets keep everything.
#[derive(Debug, Clone)]
pub struct ReportFileEngine {
    reports: Vec<PathBuf>,
}

impl ReportFileEngine {
    #[must_use]
    pub fn new(reports: Vec<PathBuf>) -> Self {
        Self { reports }
    }
}

impl Engine for ReportFileEngine {
    fn run(&self, request: &EngineRequest, sink: &mut dyn ReportSink) -> Result<()> {
        // Parse in parallel, deliver sequentially in file order.
        let parsed: Vec<Result<JsonReport>> =
            self.reports.par_iter().map(|p| load_report(p)).collect();

        let mut violations = Vec::new();
        for report in parsed {
            let report = report?;
            report.log_errors();
            violations.extend(report.into_violations());
        }

        let categories = category_filter(request);
        tracing::debug!(
            reports = self.reports.len(),
            violations = violations.len(),
            by_category = categories.is_some(),
            "replaying PMD reports"
        );

        for v in violations {
            let in_category = categories.as_ref().map_or(true, |c| selected(c, &v));
            if in_category && in_sources(&request.sources, &v.location.file) {
                sink.accept(v);
            }
        }
        Ok(())
    }
}

fn load_report(path: &Path) -> Result<JsonReport> {
    let content = fs::read_to_string(path).map_err(|e| GateError::io(e, path))?;
    json::parse_report(&content)
}

/// Normalized category stems, or `None` when some selected rule set can
/// report violations under names we cannot predict.
fn category_filter(request: &EngineRequest) -> Option<Vec<String>> {
    request
        .rulesets
        .iter()
        .map(|rs| predefined::is_category(&rs.name).then(|| normalize(rs.stem())))
        .collect()
}

fn selected(wanted: &[String], v: &Violation) -> bool {
    v.rule.ruleset.is_empty() || wanted.contains(&normalize(&v.rule.ruleset))
}

/// Whether `file` lies under one of `sources`. Reports often carry paths
/// relative to the project root while sources are absolute (or the other way
/// round), so a source also matches when its trailing components start `file`,
/// or when it appears as a run of components inside an absolute `file`.
fn in_sources(sources: &[PathBuf], file: &Path) -> bool {
    sources.is_empty() || sources.iter().any(|s| under(s, file))
}

fn under(source: &Path, file: &Path) -> bool {
    if file.starts_with(source) {
        return true;
    }
    let src = names(source);
    let path = names(file);
    if src.is_empty() {
        return file.is_relative();
    }
    if file.is_relative() {
        (0..src.len()).any(|i| path.starts_with(&src[i..]))
    } else if source.is_relative() {
        path.windows(src.len()).any(|w| w == src.as_slice())
    } else {
        false
    }
}

fn names(path: &Path) -> Vec<&std::ffi::OsStr> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(n) => Some(n),
            _ => None,
        })
        .collect()
}

/// `Best Practices`, `bestpractices` and `best-practices` compare equal.
fn normalize(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::AccumulatingSink;
    use crate::ruleset::RulesetSelection;

    const REPORT: &str = r#"{"files": [
      {"filename": "src/main/java/org/acme/Repo.java", "violations": [
        {"beginline": 4, "begincolumn": 1, "endline": 4, "endcolumn": 9,
         "description": "Avoid unused private fields", "rule": "UnusedPrivateField",
         "ruleset": "Best Practices", "priority": 3},
        {"beginline": 1, "begincolumn": 1, "endline": 90, "endcolumn": 1,
         "description": "Possible God Class", "rule": "GodClass",
         "ruleset": "Design", "priority": 3}]},
      {"filename": "src/test/java/org/acme/RepoTest.java", "violations": [
        {"beginline": 9, "begincolumn": 5, "endline": 9, "endcolumn": 30,
         "description": "Avoid empty catch blocks", "rule": "EmptyCatchBlock",
         "ruleset": "Error Prone", "priority": 3}]}
    ]}"#;

    fn replay(sources: &[&str], rulesets: RulesetSelection) -> Vec<String> {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pmd.json");
        fs::write(&path, REPORT).unwrap();
        let request = EngineRequest {
            sources: sources.iter().map(PathBuf::from).collect(),
            rulesets,
            threads: 0,
        };
        let mut sink = AccumulatingSink::new();
        ReportFileEngine::new(vec![path]).run(&request, &mut sink).unwrap();
        sink.into_violations()
            .iter()
            .map(|v| v.rule_name().to_string())
            .collect()
    }

    #[test]
    fn composite_rulesets_keep_every_category() {
        let rulesets = RulesetSelection::new()
            .with([predefined::resolve("quickstart"), predefined::design()]);
        assert_eq!(
            replay(&["src/main/java", "src/test/java"], rulesets),
            vec!["UnusedPrivateField", "GodClass", "EmptyCatchBlock"]
        );
    }

    #[test]
    fn custom_ruleset_files_keep_every_category() {
        let rulesets = RulesetSelection::new()
            .with([predefined::resolve("config/pmd/company.xml"), predefined::design()]);
        assert_eq!(replay(&["src/main/java"], rulesets).len(), 2);
    }

    #[test]
    fn plain_categories_filter_by_ruleset() {
        let rulesets = RulesetSelection::new()
            .with([predefined::design(), predefined::error_prone()]);
        assert_eq!(
            replay(&["src/main/java", "src/test/java"], rulesets),
            vec!["GodClass", "EmptyCatchBlock"]
        );
    }

    #[test]
    fn violations_outside_sources_are_dropped() {
        let rulesets = RulesetSelection::new().with([predefined::resolve("quickstart")]);
        assert_eq!(replay(&["src/test/java"], rulesets), vec!["EmptyCatchBlock"]);
    }

    #[test]
    fn absolute_sources_match_relative_files() {
        let file = Path::new("src/main/java/org/acme/Repo.java");
        assert!(under(Path::new("/work/project/src/main/java"), file));
        assert!(!under(Path::new("/work/project/src/test/java"), file));
        assert!(under(
            Path::new("src/main/java"),
            Path::new("/ci/build/src/main/java/org/acme/Repo.java")
        ));
        assert!(!under(Path::new("/elsewhere/lib"), Path::new("/work/src/A.java")));
    }

    #[test]
    fn normalize_drops_case_and_separators() {
        assert_eq!(normalize("Best Practices"), "bestpractices");
        assert_eq!(normalize("error-prone"), "errorprone");
    }
}

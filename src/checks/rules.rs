//! Declarative checks.
//!
//! A [`Rule`] pairs a display name with a [`Probe`] (what to look at) and a
//! [`Severity`] (what a violation means). The built-in catalog is nothing but
//! a list of rules.

use crate::core::check::Check;
use crate::core::error::{Error, Result};
use crate::core::outcome::{Outcome, Status};
use crate::core::project::ProjectRoot;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What a violated rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The violation fails the run.
    #[default]
    Fail,
    /// The violation is advisory.
    Warn,
}

impl Severity {
    /// Returns the outcome status for a violation at this severity.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::Fail => Status::Fail,
            Self::Warn => Status::Warn,
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fail" => Ok(Self::Fail),
            "warn" => Ok(Self::Warn),
            _ => Err(format!("Invalid severity: {s}. Expected: fail or warn")),
        }
    }
}

/// What a rule inspects. Paths are relative to the project root; JSON key
/// paths are lists of object keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Probe {
    /// A regular file exists.
    File(String),
    /// A directory exists.
    Dir(String),
    /// At least one of several files exists.
    AnyFile(Vec<String>),
    /// A directory exists and has at least one entry.
    NonEmptyDir(String),
    /// At least `min` files directly inside `dir` match a glob pattern.
    GlobCount {
        /// Directory to list.
        dir: String,
        /// Glob matched against file names.
        pattern: String,
        /// Minimum number of matches.
        min: usize,
    },
    /// A file contains a substring.
    Contains {
        /// File to scan.
        file: String,
        /// Substring to find.
        needle: String,
    },
    /// A file contains at least one of several substrings.
    ContainsAny {
        /// File to scan.
        file: String,
        /// Candidate substrings.
        needles: Vec<String>,
    },
    /// A file contains every one of several substrings.
    ContainsAll {
        /// File to scan.
        file: String,
        /// Required substrings.
        needles: Vec<String>,
    },
    /// A file matches a regular expression.
    Matches {
        /// File to scan.
        file: String,
        /// Regular expression.
        pattern: String,
    },
    /// A key path exists in a JSON file.
    JsonKey {
        /// JSON file.
        file: String,
        /// Key path.
        path: Vec<String>,
    },
    /// The value at a key path is `true`.
    JsonTrue {
        /// JSON file.
        file: String,
        /// Key path.
        path: Vec<String>,
    },
    /// The array at a key path includes every value. An object with a
    /// `packages` array (yarn workspaces) is looked into.
    JsonArrayIncludes {
        /// JSON file.
        file: String,
        /// Key path.
        path: Vec<String>,
        /// Values that must be present.
        values: Vec<String>,
    },
    /// The string at a key path contains one of several substrings, ignoring
    /// case.
    JsonTextContains {
        /// JSON file.
        file: String,
        /// Key path.
        path: Vec<String>,
        /// Candidate substrings.
        needles: Vec<String>,
    },
}

/// Result of evaluating a probe, before severity is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Finding {
    /// Expectation holds, with an optional detail to show.
    Holds(Option<String>),
    /// Expectation does not hold, with the reason.
    Violated(String),
    /// The input the probe needs is absent; reported as a skip.
    Unavailable(String),
}

/// A named, declarative check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    name: String,
    probe: Probe,
    severity: Severity,
}

impl Rule {
    /// Creates a rule that fails when violated.
    pub fn new(name: impl Into<String>, probe: Probe) -> Self {
        Self {
            name: name.into(),
            probe,
            severity: Severity::Fail,
        }
    }

    /// Sets the severity of a violation.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Makes a violation advisory.
    #[must_use]
    pub fn advisory(self) -> Self {
        self.with_severity(Severity::Warn)
    }

    /// Returns the probe.
    #[must_use]
    pub fn probe(&self) -> &Probe {
        &self.probe
    }

    /// Returns the severity.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    fn evaluate(&self, root: &ProjectRoot) -> Result<Finding> {
        match &self.probe {
            Probe::File(path) => Ok(exists(root.is_file(path))),
            Probe::Dir(path) => Ok(exists(root.is_dir(path))),
            Probe::AnyFile(paths) => Ok(any_file(root, paths)),
            Probe::NonEmptyDir(path) => non_empty_dir(root, path),
            Probe::GlobCount { dir, pattern, min } => glob_count(root, dir, pattern, *min),
            Probe::Contains { file, needle } => text_finding(root, file, |text| {
                if text.contains(needle.as_str()) {
                    Finding::Holds(None)
                } else {
                    Finding::Violated(format!("`{needle}` not found in {file}"))
                }
            }),
            Probe::ContainsAny { file, needles } => text_finding(root, file, |text| {
                if needles.iter().any(|n| text.contains(n.as_str())) {
                    Finding::Holds(None)
                } else {
                    Finding::Violated(format!("none of {} found in {file}", quoted(needles.iter())))
                }
            }),
            Probe::ContainsAll { file, needles } => text_finding(root, file, |text| {
                let missing = needles.iter().filter(|n| !text.contains(n.as_str()));
                missing_or_holds(missing.collect(), &format!("not found in {file}"))
            }),
            Probe::Matches { file, pattern } => {
                let re = regex::Regex::new(pattern).map_err(|e| Error::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
                text_finding(root, file, |text| {
                    if re.is_match(text) {
                        Finding::Holds(None)
                    } else {
                        Finding::Violated(format!("no match for /{pattern}/ in {file}"))
                    }
                })
            },
            Probe::JsonKey { file, path } => json_finding(root, file, path, |_| Finding::Holds(None)),
            Probe::JsonTrue { file, path } => json_finding(root, file, path, |found| match found {
                Value::Bool(true) => Finding::Holds(None),
                other => Finding::Violated(format!("{} is {other}", dotted(path))),
            }),
            Probe::JsonArrayIncludes { file, path, values } => {
                json_finding(root, file, path, |found| array_includes(found, path, values))
            },
            Probe::JsonTextContains {
                file,
                path,
                needles,
            } => json_finding(root, file, path, |found| text_value_contains(found, path, needles)),
        }
    }
}

fn any_file(root: &ProjectRoot, paths: &[String]) -> Finding {
    match paths.iter().find(|p| root.is_file(p)) {
        Some(found) => Finding::Holds(Some(found.clone())),
        None => Finding::Violated(format!("none of {} found", paths.join(", "))),
    }
}

fn non_empty_dir(root: &ProjectRoot, path: &str) -> Result<Finding> {
    Ok(match root.entry_count(path)? {
        None => Finding::Violated("directory not found".to_string()),
        Some(0) => Finding::Violated("directory is empty".to_string()),
        Some(n) => Finding::Holds(Some(plural(n, "entry", "entries"))),
    })
}

fn glob_count(root: &ProjectRoot, dir: &str, pattern: &str, min: usize) -> Result<Finding> {
    let compiled = glob::Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;
    Ok(match root.matching_files(dir, &compiled)? {
        None => Finding::Violated(format!("{dir}/ not found")),
        Some(n) if n < min => Finding::Violated(format!(
            "found {n} matching {pattern}, expected at least {min}"
        )),
        Some(n) => Finding::Holds(Some(plural(n, "file", "files"))),
    })
}

/// Runs `inspect` over the text of `file`, or skips if it does not exist.
fn text_finding<F>(root: &ProjectRoot, file: &str, inspect: F) -> Result<Finding>
where
    F: FnOnce(&str) -> Finding,
{
    Ok(match root.read_text(file)? {
        Some(text) => inspect(&text),
        None => skipped(file),
    })
}

/// Runs `inspect` over the value at `path` in the JSON document `file`.
fn json_finding<F>(root: &ProjectRoot, file: &str, path: &[String], inspect: F) -> Result<Finding>
where
    F: FnOnce(&Value) -> Finding,
{
    let Some(json) = root.read_json(file)? else {
        return Ok(skipped(file));
    };
    Ok(match lookup(&json, path) {
        Some(found) => inspect(found),
        None => not_defined(path, file),
    })
}

fn text_value_contains(found: &Value, path: &[String], needles: &[String]) -> Finding {
    match found {
        Value::String(text) => {
            let upper = text.to_uppercase();
            if needles.iter().any(|n| upper.contains(&n.to_uppercase())) {
                Finding::Holds(Some(text.clone()))
            } else {
                Finding::Violated(format!("{} is \"{text}\"", dotted(path)))
            }
        },
        other => Finding::Violated(format!("{} is {other}", dotted(path))),
    }
}

fn missing_or_holds(missing: Vec<&String>, reason: &str) -> Finding {
    if missing.is_empty() {
        Finding::Holds(None)
    } else {
        Finding::Violated(format!("{} {reason}", quoted(missing.into_iter())))
    }
}

/// Checks that the array at `path` (or its `packages` list) includes `values`.
fn array_includes(found: &Value, path: &[String], values: &[String]) -> Finding {
    let items = match found {
        Value::Array(items) => items,
        Value::Object(map) => match map.get("packages") {
            Some(Value::Array(items)) => items,
            _ => return Finding::Violated(format!("{} has no packages list", dotted(path))),
        },
        _ => return Finding::Violated(format!("{} is not a list", dotted(path))),
    };
    let missing = values
        .iter()
        .filter(|v| !items.iter().any(|item| item.as_str() == Some(v.as_str())));
    missing_or_holds(missing.collect(), &format!("missing from {}", dotted(path)))
}

fn skipped(file: &str) -> Finding {
    Finding::Unavailable(format!("skipped, {file} not found"))
}

fn lookup<'a>(json: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(json, |value, key| value.get(key.as_str()))
}

fn not_defined(path: &[String], file: &str) -> Finding {
    Finding::Violated(format!("{} not defined in {file}", dotted(path)))
}

fn dotted(path: &[String]) -> String {
    path.join(".")
}

fn quoted<'a>(items: impl Iterator<Item = &'a String>) -> String {
    items.map(|s| format!("`{s}`")).collect::<Vec<_>>().join(", ")
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    fn fixture(files: &[(&str, &str)]) -> (TempDir, ProjectRoot) {
        let temp = TempDir::new().expect("create temp dir");
        for (path, content) in files {
            let full = temp.path().join(path);
            if let Some(parent) = full.parent() {
                std::fs::create_dir_all(parent).expect("create parent");
            }
            std::fs::write(full, content).expect("write file");
        }
        let root = ProjectRoot::open(temp.path()).expect("open root");
        (temp, root)
    }

    fn keys(path: &[&str]) -> Vec<String> {
        path.iter().map(|s| (*s).to_string()).collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        keys(items)
    }

    fn run(rule: &Rule, root: &ProjectRoot) -> Outcome {
        rule.execute(root).expect("rule should decide")
    }

    // =========================================================================
    // Severity
    // =========================================================================

    #[rstest]
    #[case("fail", Severity::Fail)]
    #[case("WARN", Severity::Warn)]
    #[case("Warn", Severity::Warn)]
    fn test_severity_from_str(#[case] input: &str, #[case] expected: Severity) {
        assert_eq!(input.parse::<Severity>(), Ok(expected));
    }

    #[test]
    fn test_severity_from_str_invalid() {
        assert!("error".parse::<Severity>().is_err());
    }

    // =========================================================================
    // Path rules
    // =========================================================================

    #[test]
    fn test_file_rule() {
        let (_temp, root) = fixture(&[("package.json", "{}")]);
        let present = Rule::new("File: package.json", Probe::File("package.json".into()));
        let missing = Rule::new("File: README.md", Probe::File("README.md".into()));

        assert_eq!(run(&present, &root), Outcome::pass("File: package.json"));
        assert_eq!(
            run(&missing, &root),
            Outcome::fail("File: README.md: not found")
        );
    }

    #[test]
    fn test_dir_rejects_file() {
        let (_temp, root) = fixture(&[("apps", "not a dir")]);
        let rule = Rule::new("Directory: apps/", Probe::Dir("apps".into()));
        assert_eq!(run(&rule, &root).status(), Status::Fail);
    }

    #[test]
    fn test_any_file_names_first_match() {
        let (_temp, root) = fixture(&[("apps/api/test/app.controller.spec.ts", "")]);
        let rule = Rule::new(
            "Backend test",
            Probe::AnyFile(strings(&[
                "apps/api/src/app.spec.ts",
                "apps/api/test/app.controller.spec.ts",
            ])),
        );
        assert_eq!(
            run(&rule, &root),
            Outcome::pass("Backend test (apps/api/test/app.controller.spec.ts)")
        );
    }

    #[test]
    fn test_any_file_none_present() {
        let (_temp, root) = fixture(&[]);
        let rule = Rule::new("Backend test", Probe::AnyFile(strings(&["a.ts", "b.ts"])));
        assert_eq!(
            run(&rule, &root),
            Outcome::fail("Backend test: none of a.ts, b.ts found")
        );
    }

    #[test]
    fn test_non_empty_dir() {
        let (temp, root) = fixture(&[("icons/icon-192.png", "")]);
        std::fs::create_dir(temp.path().join("empty")).expect("mkdir");
        let full = Rule::new("Icons", Probe::NonEmptyDir("icons".into()));
        let empty = Rule::new("Empty", Probe::NonEmptyDir("empty".into()));
        let absent = Rule::new("Absent", Probe::NonEmptyDir("absent".into())).advisory();

        assert_eq!(run(&full, &root), Outcome::pass("Icons (1 entry)"));
        assert_eq!(
            run(&empty, &root),
            Outcome::fail("Empty: directory is empty")
        );
        assert_eq!(
            run(&absent, &root),
            Outcome::warn("Absent: directory not found")
        );
    }

    #[test]
    fn test_glob_count() {
        let (_temp, root) = fixture(&[
            ("__tests__/a.test.ts", ""),
            ("__tests__/b.test.ts", ""),
            ("__tests__/setup.ts", ""),
        ]);
        let enough = Rule::new(
            "Tests",
            Probe::GlobCount {
                dir: "__tests__".into(),
                pattern: "*.test.ts".into(),
                min: 1,
            },
        );
        let too_few = Rule::new(
            "Tests",
            Probe::GlobCount {
                dir: "__tests__".into(),
                pattern: "*.test.ts".into(),
                min: 3,
            },
        );

        assert_eq!(run(&enough, &root), Outcome::pass("Tests (2 files)"));
        assert_eq!(
            run(&too_few, &root),
            Outcome::fail("Tests: found 2 matching *.test.ts, expected at least 3")
        );
    }

    #[test]
    fn test_glob_count_invalid_pattern_is_fatal() {
        let (_temp, root) = fixture(&[]);
        let rule = Rule::new(
            "Bad",
            Probe::GlobCount {
                dir: ".".into(),
                pattern: "[".into(),
                min: 1,
            },
        );
        let err = rule.execute(&root).expect_err("should fail");
        assert!(matches!(err, Error::InvalidPattern { .. }));
    }

    // =========================================================================
    // Text rules
    // =========================================================================

    #[test]
    fn test_contains() {
        let (_temp, root) = fixture(&[("vite.config.ts", "plugins: [VitePWA({})]")]);
        let hit = Rule::new(
            "VitePWA",
            Probe::Contains {
                file: "vite.config.ts".into(),
                needle: "VitePWA".into(),
            },
        );
        let miss = Rule::new(
            "Workbox",
            Probe::Contains {
                file: "vite.config.ts".into(),
                needle: "workbox".into(),
            },
        );

        assert_eq!(run(&hit, &root), Outcome::pass("VitePWA"));
        assert_eq!(
            run(&miss, &root),
            Outcome::fail("Workbox: `workbox` not found in vite.config.ts")
        );
    }

    #[test]
    fn test_text_rule_on_missing_file_is_skipped() {
        let (_temp, root) = fixture(&[]);
        let rule = Rule::new(
            "VitePWA",
            Probe::Contains {
                file: "vite.config.ts".into(),
                needle: "VitePWA".into(),
            },
        );
        assert_eq!(
            run(&rule, &root),
            Outcome::warn("VitePWA: skipped, vite.config.ts not found")
        );
    }

    #[test]
    fn test_contains_any() {
        let (_temp, root) = fixture(&[("Limiter.ts", "ctx.createDynamicsCompressor()")]);
        let rule = Rule::new(
            "Compressor",
            Probe::ContainsAny {
                file: "Limiter.ts".into(),
                needles: strings(&["DynamicsCompressorNode", "createDynamicsCompressor"]),
            },
        );
        assert_eq!(run(&rule, &root), Outcome::pass("Compressor"));
    }

    #[test]
    fn test_contains_all_lists_missing() {
        let (_temp, root) = fixture(&[("database.ts", "createObjectStore('pistas')")]);
        let rule = Rule::new(
            "Stores",
            Probe::ContainsAll {
                file: "database.ts".into(),
                needles: strings(&["pistas", "archivos"]),
            },
        );
        assert_eq!(
            run(&rule, &root),
            Outcome::fail("Stores: `archivos` not found in database.ts")
        );
    }

    #[test]
    fn test_matches() {
        let (_temp, root) = fixture(&[("database.ts", "import { openDB } from \"idb\";")]);
        let rule = Rule::new(
            "idb",
            Probe::Matches {
                file: "database.ts".into(),
                pattern: r#"from\s+['"]idb['"]"#.into(),
            },
        );
        assert_eq!(run(&rule, &root), Outcome::pass("idb"));
    }

    #[test]
    fn test_matches_invalid_regex_is_fatal() {
        let (_temp, root) = fixture(&[("a.ts", "")]);
        let rule = Rule::new(
            "Bad",
            Probe::Matches {
                file: "a.ts".into(),
                pattern: "(".into(),
            },
        );
        assert!(rule.execute(&root).is_err());
    }

    // =========================================================================
    // JSON rules
    // =========================================================================

    const PACKAGE_JSON: &str = r#"{
        "workspaces": ["packages/*", "apps/*"],
        "scripts": {"dev": "vite", "build": "tsc"},
        "engines": {"node": ">=20.0.0"},
        "dependencies": {"@tanstack/react-query": "^5.0.0"}
    }"#;

    #[test]
    fn test_json_key() {
        let (_temp, root) = fixture(&[("package.json", PACKAGE_JSON)]);
        let dev = Rule::new(
            "Script dev",
            Probe::JsonKey {
                file: "package.json".into(),
                path: keys(&["scripts", "dev"]),
            },
        );
        let lint = Rule::new(
            "Script lint",
            Probe::JsonKey {
                file: "package.json".into(),
                path: keys(&["scripts", "lint"]),
            },
        );

        assert_eq!(run(&dev, &root).status(), Status::Pass);
        assert_eq!(
            run(&lint, &root),
            Outcome::fail("Script lint: scripts.lint not defined in package.json")
        );
    }

    #[test]
    fn test_json_key_with_slash() {
        let (_temp, root) = fixture(&[("package.json", PACKAGE_JSON)]);
        let rule = Rule::new(
            "Query",
            Probe::JsonKey {
                file: "package.json".into(),
                path: keys(&["dependencies", "@tanstack/react-query"]),
            },
        );
        assert_eq!(run(&rule, &root).status(), Status::Pass);
    }

    #[rstest]
    #[case(r#"{"compilerOptions": {"strict": true}}"#, Status::Pass)]
    #[case(r#"{"compilerOptions": {"strict": false}}"#, Status::Fail)]
    #[case(r#"{"compilerOptions": {"strict": "true"}}"#, Status::Fail)]
    #[case(r#"{"compilerOptions": {}}"#, Status::Fail)]
    #[case("{\n// strict below\n\"compilerOptions\": {\"strict\": true,},\n}", Status::Pass)]
    fn test_json_true(#[case] content: &str, #[case] expected: Status) {
        let (_temp, root) = fixture(&[("tsconfig.base.json", content)]);
        let rule = Rule::new(
            "Strict mode",
            Probe::JsonTrue {
                file: "tsconfig.base.json".into(),
                path: keys(&["compilerOptions", "strict"]),
            },
        );
        assert_eq!(run(&rule, &root).status(), expected);
    }

    #[rstest]
    #[case(r#"{"workspaces": ["packages/*", "apps/*"]}"#, Status::Pass)]
    #[case(r#"{"workspaces": {"packages": ["apps/*", "packages/*"]}}"#, Status::Pass)]
    #[case(r#"{"workspaces": ["packages/*"]}"#, Status::Fail)]
    #[case(r#"{"workspaces": "apps/*"}"#, Status::Fail)]
    #[case(r#"{}"#, Status::Fail)]
    fn test_json_array_includes(#[case] content: &str, #[case] expected: Status) {
        let (_temp, root) = fixture(&[("package.json", content)]);
        let rule = Rule::new(
            "Workspaces",
            Probe::JsonArrayIncludes {
                file: "package.json".into(),
                path: keys(&["workspaces"]),
                values: strings(&["packages/*", "apps/*"]),
            },
        );
        assert_eq!(run(&rule, &root).status(), expected);
    }

    #[test]
    fn test_json_array_includes_reports_missing() {
        let (_temp, root) = fixture(&[("package.json", r#"{"workspaces": ["packages/*"]}"#)]);
        let rule = Rule::new(
            "Workspaces",
            Probe::JsonArrayIncludes {
                file: "package.json".into(),
                path: keys(&["workspaces"]),
                values: strings(&["packages/*", "apps/*"]),
            },
        );
        assert_eq!(
            run(&rule, &root),
            Outcome::fail("Workspaces: `apps/*` missing from workspaces")
        );
    }

    #[rstest]
    #[case(r#"{"compilerOptions": {"target": "ES2022"}}"#, Outcome::pass("Target (ES2022)"))]
    #[case(r#"{"compilerOptions": {"target": "esnext"}}"#, Outcome::pass("Target (esnext)"))]
    #[case(
        r#"{"compilerOptions": {"target": "ES5"}}"#,
        Outcome::warn("Target: compilerOptions.target is \"ES5\"")
    )]
    #[case(
        r#"{"compilerOptions": {}}"#,
        Outcome::warn("Target: compilerOptions.target not defined in tsconfig.base.json")
    )]
    fn test_json_text_contains(#[case] content: &str, #[case] expected: Outcome) {
        let (_temp, root) = fixture(&[("tsconfig.base.json", content)]);
        let rule = Rule::new(
            "Target",
            Probe::JsonTextContains {
                file: "tsconfig.base.json".into(),
                path: keys(&["compilerOptions", "target"]),
                needles: strings(&["ES2022", "ESNEXT"]),
            },
        )
        .advisory();
        assert_eq!(run(&rule, &root), expected);
    }

    #[test]
    fn test_json_rule_malformed_is_fatal() {
        let (_temp, root) = fixture(&[("package.json", "{ nope")]);
        let rule = Rule::new(
            "Script dev",
            Probe::JsonKey {
                file: "package.json".into(),
                path: keys(&["scripts", "dev"]),
            },
        );
        let err = rule.execute(&root).expect_err("should abort");
        assert!(err.is_fatal_inspection());
    }

    #[test]
    fn test_json_rule_missing_file_is_skipped() {
        let (_temp, root) = fixture(&[]);
        let rule = Rule::new(
            "Script dev",
            Probe::JsonKey {
                file: "package.json".into(),
                path: keys(&["scripts", "dev"]),
            },
        );
        assert_eq!(run(&rule, &root).status(), Status::Warn);
    }

    #[test]
    fn test_rule_accessors() {
        let rule = Rule::new("x", Probe::File("x".into())).advisory();
        assert_eq!(rule.name(), "x");
        assert_eq!(rule.severity(), Severity::Warn);
        assert_eq!(rule.probe(), &Probe::File("x".into()));
    }
}

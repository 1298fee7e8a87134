//! Fixture-driven end-to-end checks for `cron-table`.
//!
//! usage: dev-test-runner [PATTERN...]   (defaults to `fixtures/*.json`)
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde::de::DeserializeOwned;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

#[derive(Deserialize, Debug)]
struct FixtureFile {
    cases: Vec<Case>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
struct Case {
    name: String,
    /// five fields, or a whole crontab line when `command` is absent
    schedule: String,
    #[serde(default)]
    command: Option<String>,
    #[serde(default)]
    expect: Option<Expect>,
    /// expected error kind: `arity`, `malformed_number` or `invalid_field`
    #[serde(default)]
    error: Option<String>,
    /// expected field named by the error
    #[serde(default)]
    error_field: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Expect {
    #[serde(default)]
    command: Option<String>,
    /// field key → values; each entry is an integer or an `"a..b"` run
    #[serde(flatten)]
    fields: BTreeMap<String, Vec<Values>>,
}

#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum Values {
    One(u32),
    Run(String),
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

static RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s*\.\.\s*(\d+)\s*$").unwrap());

fn flatten_values(values: &[Values]) -> Result<Vec<u32>, String> {
    let mut out = Vec::new();
    for v in values {
        match v {
            Values::One(n) => out.push(*n),
            Values::Run(src) => {
                let caps = RUN.captures(src).ok_or_else(|| format!("bad run `{src}`"))?;
                let a: u32 = caps[1].parse().map_err(|e| format!("{e}"))?;
                let b: u32 = caps[2].parse().map_err(|e| format!("{e}"))?;
                out.extend(a..=b);
            }
        }
    }
    Ok(out)
}

impl Case {
    fn run(&self) -> Result<(), String> {
        let result = match self.command.as_deref() {
            Some(command) => {
                let tokens = self.schedule.split_whitespace().collect::<Vec<_>>();
                cron_table::parse_schedule(tokens.as_slice(), command)
            }
            None => cron_table::parse_line(&self.schedule),
        };
        match (result, &self.error) {
            (Ok(schedule), None) => {
                let Some(expect) = self.expect.as_ref() else {
                    return Ok(());
                };
                if let Some(command) = expect.command.as_ref() {
                    if &schedule.command != command {
                        return Err(format!("command: got {:?}, want {command:?}", schedule.command));
                    }
                }
                for (key, values) in &expect.fields {
                    let want = flatten_values(values)?;
                    let got = schedule
                        .field(key)
                        .ok_or_else(|| format!("no field `{key}`"))?
                        .values();
                    if got != want.as_slice() {
                        return Err(format!("{key}: got {got:?}, want {want:?}"));
                    }
                }
                Ok(())
            }
            (Ok(_), Some(kind)) => Err(format!("expected {kind} error, parse succeeded")),
            (Err(error), None) => Err(format!("unexpected error: {error}")),
            (Err(error), Some(kind)) => {
                if error.kind() != kind {
                    return Err(format!("expected {kind} error, got {}: {error}", error.kind()));
                }
                if let Some(field) = self.error_field.as_deref() {
                    if error.field() != Some(field) {
                        return Err(format!("expected error on {field}, got {error}"));
                    }
                }
                Ok(())
            }
        }
    }
}

/// Deserialize with JSON-path context in error messages.
fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T, String> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            Err(format!("at JSON path {path} → {}", err.into_inner()))
        }
    }
}

fn resolve_file_path_patterns(patterns: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut out = Vec::<PathBuf>::new();
    for pattern in patterns {
        let mut matched_any = false;
        for entry in glob::glob(pattern)? {
            matched_any = true;
            out.push(entry?);
        }
        if !matched_any {
            anyhow::bail!("pattern matched no files: {pattern}");
        }
    }
    Ok(out)
}

fn main() -> anyhow::Result<ExitCode> {
    let mut patterns = std::env::args().skip(1).collect::<Vec<_>>();
    if patterns.is_empty() {
        patterns.push(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/*.json").to_string());
    }

    let (mut passed, mut failed) = (0usize, 0usize);
    for path in resolve_file_path_patterns(&patterns)? {
        let source = std::fs::read_to_string(&path)?;
        let fixture = from_str_with_path::<FixtureFile>(&source)
            .map_err(|e| anyhow::anyhow!("{}: {e}", path.display()))?;
        eprintln!("{}", path.display().to_string().bold());
        for case in &fixture.cases {
            match case.run() {
                Ok(()) => {
                    passed += 1;
                    eprintln!("  {} {}", "✅".green(), case.name);
                }
                Err(why) => {
                    failed += 1;
                    eprintln!("  {} {}: {why}", "❌".red(), case.name);
                }
            }
        }
    }

    eprintln!("{passed} passed, {failed} failed");
    Ok(if failed == 0 { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

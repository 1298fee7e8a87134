//! Whole-schedule parsing: five field tokens plus a command.
use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::expand::{self, ExpandedField};
use crate::field::FIELDS;

/// A parsed schedule. Fields are keyed by their table key (`minute`, `hour`,
/// `dayM`, `month`, `dayW`) in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub command: String,
    #[serde(flatten)]
    pub fields: IndexMap<&'static str, ExpandedField>,
}

impl Schedule {
    /// The textual mapping in render order: `command` first, then the fields.
    pub fn rows(&self) -> IndexMap<&'static str, String> {
        let mut rows = IndexMap::with_capacity(FIELDS.len() + 1);
        rows.insert("command", self.command.clone());
        for (key, field) in &self.fields {
            rows.insert(*key, field.to_string());
        }
        rows
    }

    pub fn field(&self, key: &str) -> Option<&ExpandedField> {
        self.fields.get(key)
    }
}

/// Expand `tokens` (at least five, extras ignored) against the registry in
/// canonical order. The first failing field aborts the parse.
pub fn parse_schedule<S: AsRef<str>>(tokens: &[S], command: &str) -> Result<Schedule> {
    if tokens.len() < FIELDS.len() || command.is_empty() {
        return Err(Error::Arity {
            fields: tokens.len(),
            empty_command: command.is_empty(),
        });
    }
    if tokens.len() > FIELDS.len() {
        tracing::warn!(extra = tokens.len() - FIELDS.len(), "ignoring extra schedule fields");
    }
    tracing::debug!(command, "parsing schedule");

    let mut fields = IndexMap::with_capacity(FIELDS.len());
    for (spec, token) in FIELDS.iter().zip(tokens) {
        let expanded = expand::expand(spec, token.as_ref())?;
        fields.insert(spec.key, expanded);
    }
    Ok(Schedule {
        command: command.to_string(),
        fields,
    })
}

/// Parse a crontab-style line: five whitespace-separated fields, then the
/// command (the rest of the line, trimmed).
pub fn parse_line(line: &str) -> Result<Schedule> {
    let mut rest = line.trim_start();
    let mut tokens = Vec::with_capacity(FIELDS.len());
    while tokens.len() < FIELDS.len() && !rest.is_empty() {
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        tokens.push(&rest[..end]);
        rest = rest[end..].trim_start();
    }
    parse_schedule(tokens.as_slice(), rest.trim_end())
}

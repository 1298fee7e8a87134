//! Output renderings of a parsed [`Schedule`].
use crate::schedule::Schedule;

const RULE_WIDTH: usize = 64;

/// The boxed table: blank line, rule, `key\t\tvalue` rows, rule, blank line.
pub fn table(schedule: &Schedule) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for (key, value) in schedule.rows() {
        out.push_str(key);
        out.push_str("\t\t");
        out.push_str(&value);
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push('\n');
    out
}

/// One-line `{key=value, ...}` dump of the mapping, preceded by a blank line.
pub fn map(schedule: &Schedule) -> String {
    let body = schedule
        .rows()
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("\n{{{body}}}\n")
}

pub fn json(schedule: &Schedule) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schedule)
}

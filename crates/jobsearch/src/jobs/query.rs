// crates/jobsearch/src/jobs/query.rs
//
// SQL templates use `%PREFIX%` for the table prefix and `?` for bind
// parameters. `QueryTemplates::prepare` resolves both before execution.

use std::fmt::Write;

use crate::JobSearchError;

pub const COUNT_BY_JOB_NAME: &str =
    "SELECT COUNT(1) FROM %PREFIX%JOB_INSTANCE WHERE JOB_NAME = ?";

pub const GET_BY_ID: &str =
    "SELECT JOB_INSTANCE_ID, JOB_NAME FROM %PREFIX%JOB_INSTANCE WHERE JOB_INSTANCE_ID = ?";

pub const GET_JOB_NAMES: &str =
    "SELECT DISTINCT JOB_NAME FROM %PREFIX%JOB_INSTANCE ORDER BY JOB_NAME";

const SEARCH_BASE: &str = "SELECT inst.JOB_INSTANCE_ID, inst.JOB_NAME \
     FROM %PREFIX%JOB_EXECUTION exe \
     JOIN %PREFIX%JOB_INSTANCE inst ON inst.JOB_INSTANCE_ID = exe.JOB_INSTANCE_ID \
     WHERE TRUE ";

const SEARCH_TAIL: &str = "GROUP BY inst.JOB_INSTANCE_ID ORDER BY inst.JOB_INSTANCE_ID DESC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplates {
    prefix: String,
}

impl QueryTemplates {
    pub fn new(prefix: impl Into<String>) -> Result<Self, JobSearchError> {
        let prefix = prefix.into();
        validate_table_prefix(&prefix)?;
        Ok(Self { prefix })
    }

    /// Substitute the table prefix and number the placeholders `$1, $2, ...`
    /// (understood by both the Postgres and SQLite drivers).
    pub fn prepare(&self, template: &str) -> String {
        let sql = template.replace("%PREFIX%", &self.prefix);
        number_placeholders(&sql)
    }
}

/// Table names can't be bound, so the prefix is limited to identifier
/// characters and a schema separator.
pub fn validate_table_prefix(prefix: &str) -> Result<(), JobSearchError> {
    let ok = prefix
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
    if !ok {
        return Err(JobSearchError::InvalidTablePrefix(prefix.to_string()));
    }
    Ok(())
}

fn number_placeholders(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len() + 8);
    let mut n = 0;
    for ch in sql.chars() {
        if ch == '?' {
            n += 1;
            let _ = write!(out, "${n}");
        } else {
            out.push(ch);
        }
    }
    out
}

/// Search SQL (still a template) plus its bind values in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub template: String,
    pub params: Vec<String>,
}

/// Blank (empty or whitespace-only) filters are treated as absent.
pub fn build_search_query(job_name: Option<&str>, job_state: Option<&str>) -> SearchQuery {
    let mut template = String::from(SEARCH_BASE);
    let mut params = Vec::with_capacity(2);

    if let Some(name) = not_blank(job_name) {
        template.push_str("AND inst.JOB_NAME = ? ");
        params.push(name.to_string());
    }
    if let Some(state) = not_blank(job_state) {
        template.push_str("AND exe.STATUS = ? ");
        params.push(state.to_string());
    }

    template.push_str(SEARCH_TAIL);

    SearchQuery { template, params }
}

fn not_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

// Lead capture — optional contact emails appended to a CSV log.
//
// A user may leave an email after running a comparison. Only the email and a
// timestamp are written; CV and job text never touch disk. Recording is best
// effort: callers log a failure and carry on, the comparison result is never
// affected by it.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use csv::WriterBuilder;
use regex_lite::Regex;
use serde::Serialize;
use tracing::{debug, info};

/// Longest address accepted (RFC 5321 path limit).
const MAX_EMAIL_LEN: usize = 254;

static EMAIL_RE: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_RE
        .get_or_init(|| {
            Regex::new(
                r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
            )
            .ok()
        })
        .as_ref()
}

/// Trim and validate an email address. Returns `None` for blank or malformed input.
///
/// The address is kept as entered; case is not folded.
pub fn normalize_email(raw: &str) -> Option<String> {
    let email = raw.trim();
    if email.is_empty() || email.len() > MAX_EMAIL_LEN {
        return None;
    }
    let re = email_regex()?;
    re.is_match(email).then(|| email.to_string())
}

/// One row of the lead log.
#[derive(Debug, Serialize)]
struct LeadRecord<'a> {
    email: &'a str,
    timestamp: String,
}

/// What happened to a submitted email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadOutcome {
    Recorded(String),
    /// Blank or not an email address — nothing written
    Skipped,
}

/// Append-only CSV log of contact emails.
#[derive(Debug, Clone)]
pub struct LeadLog {
    path: PathBuf,
}

impl LeadLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record `raw_email` with the current local time.
    pub fn record(&self, raw_email: &str) -> Result<LeadOutcome> {
        self.record_at(raw_email, Local::now())
    }

    /// Record `raw_email` with an explicit timestamp.
    ///
    /// The header row is written only when the file is created.
    pub fn record_at(&self, raw_email: &str, at: DateTime<Local>) -> Result<LeadOutcome> {
        let Some(email) = normalize_email(raw_email) else {
            debug!("Skipping lead: not a valid email address");
            return Ok(LeadOutcome::Skipped);
        };

        let file_exists = self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .with_context(|| format!("Failed to open lead log {}", self.path.display()))?;

        let mut writer = WriterBuilder::new()
            .has_headers(!file_exists)
            .from_writer(file);
        writer
            .serialize(LeadRecord {
                email: &email,
                timestamp: at.to_rfc3339(),
            })
            .with_context(|| format!("Failed to write lead to {}", self.path.display()))?;
        writer.flush()?;

        info!(path = %self.path.display(), "Recorded lead");
        Ok(LeadOutcome::Recorded(email))
    }
}

// Admin statistics — usage counts read from the CSV logs.
//
// Three append-only files feed the dashboard: email leads (written by
// `leads`), checkout clicks and user feedback (written by whatever front end
// hosts the payment link and feedback form). Missing files simply count as
// empty. Access is gated by a single shared password.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use csv::ReaderBuilder;
use serde::Serialize;
use tracing::{debug, warn};

/// Column holding the click time in the payments log.
const TIMESTAMP_COLUMN: &str = "timestamp";

/// Constant-time password check. An empty expected password never matches,
/// so an unconfigured deployment can't be unlocked with an empty string.
pub fn verify_password(expected: &str, provided: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    expected.len() == provided.len()
        && expected
            .bytes()
            .zip(provided.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

/// Where the three CSV logs live.
#[derive(Debug, Clone)]
pub struct StatsSources {
    pub leads: PathBuf,
    pub payments: PathBuf,
    pub feedback: PathBuf,
}

/// How well leads turn into checkout clicks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Insight {
    Low,
    Average,
    Strong,
}

impl Insight {
    pub fn from_rate(conversion_rate: f64) -> Self {
        if conversion_rate < 10.0 {
            Insight::Low
        } else if conversion_rate < 25.0 {
            Insight::Average
        } else {
            Insight::Strong
        }
    }

    pub fn advice(self) -> &'static str {
        match self {
            Insight::Low => "Low conversion rate. Improve value messaging or CTA.",
            Insight::Average => "Average conversion. Try urgency or testimonials.",
            Insight::Strong => "Strong conversion rate.",
        }
    }
}

/// Percentage of leads that clicked through to checkout, rounded to 2 decimals.
pub fn conversion_rate(leads: usize, clicks: usize) -> f64 {
    if leads == 0 {
        return 0.0;
    }
    let rate = clicks as f64 / leads as f64 * 100.0;
    (rate * 100.0).round() / 100.0
}

/// A CSV log loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Read a CSV file with a header row. A missing file is an empty table.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "CSV log not found, treating as empty");
            return Ok(Self::default());
        }

        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open {}", path.display()))?;

        let headers = reader
            .headers()
            .with_context(|| format!("Failed to read header row of {}", path.display()))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            match record {
                Ok(record) => rows.push(record.iter().map(str::to_string).collect()),
                Err(e) => warn!(path = %path.display(), row = line + 1, "Skipping malformed row: {e}"),
            }
        }

        Ok(Self { headers, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Parse a logged timestamp: RFC 3339, or the "YYYY-MM-DD HH:MM:SS[.ffffff]" form.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}

/// Dashboard numbers derived from the three logs.
#[derive(Debug, Clone, Serialize)]
pub struct AdminStats {
    pub lead_count: usize,
    pub checkout_clicks: usize,
    pub feedback_entries: usize,
    /// Checkout clicks per lead, in percent (0 when there are no leads)
    pub conversion_rate: f64,
    pub insight: Insight,
    /// Valid click timestamps, newest first. Empty when the log has no timestamp column.
    pub payment_timeline: Vec<NaiveDateTime>,
    /// Header of the payments log, to diagnose column mismatches
    pub payment_columns: Vec<String>,
}

impl AdminStats {
    pub fn load(sources: &StatsSources) -> Result<Self> {
        let leads = CsvTable::load(&sources.leads)?;
        let payments = CsvTable::load(&sources.payments)?;
        let feedback = CsvTable::load(&sources.feedback)?;
        Ok(Self::from_tables(&leads, &payments, &feedback))
    }

    pub fn from_tables(leads: &CsvTable, payments: &CsvTable, feedback: &CsvTable) -> Self {
        let rate = conversion_rate(leads.len(), payments.len());

        Self {
            lead_count: leads.len(),
            checkout_clicks: payments.len(),
            feedback_entries: feedback.len(),
            conversion_rate: rate,
            insight: Insight::from_rate(rate),
            payment_timeline: payment_timeline(payments),
            payment_columns: payments.headers.clone(),
        }
    }
}

fn payment_timeline(payments: &CsvTable) -> Vec<NaiveDateTime> {
    let Some(col) = payments.column(TIMESTAMP_COLUMN) else {
        return Vec::new();
    };

    let mut timeline: Vec<NaiveDateTime> = payments
        .rows
        .iter()
        .filter_map(|row| row.get(col))
        .filter_map(|raw| parse_timestamp(raw))
        .collect();
    timeline.sort_by(|a, b| b.cmp(a));
    timeline
}

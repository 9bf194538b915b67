use std::env;
use std::path::PathBuf;

use anyhow::Result;

use crate::admin::StatsSources;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional lexicon overrides JSON (CVMATCH_LEXICON). Unset means the
    /// built-in English lexicon is used as is.
    pub lexicon_path: Option<PathBuf>,
    /// Where opted-in contact emails are appended
    pub leads_path: PathBuf,
    /// Checkout click log written by the payment front end
    pub payments_path: PathBuf,
    /// Feedback log written by the feedback form
    pub feedback_path: PathBuf,
    /// Shared secret for the admin statistics (CVMATCH_ADMIN_PASSWORD)
    pub admin_password: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default except the admin password, which is only
    /// needed for `stats` and the admin API.
    pub fn load() -> Result<Self> {
        Ok(Self {
            lexicon_path: env::var("CVMATCH_LEXICON")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            leads_path: path_var("CVMATCH_LEADS_PATH", "./leads.csv"),
            payments_path: path_var("CVMATCH_PAYMENTS_PATH", "./payment_clicks.csv"),
            feedback_path: path_var("CVMATCH_FEEDBACK_PATH", "./usage_log.csv"),
            admin_password: env::var("CVMATCH_ADMIN_PASSWORD").unwrap_or_default(),
        })
    }

    /// Check that the admin password is configured.
    /// Call this before any operation that exposes usage statistics.
    pub fn require_admin(&self) -> Result<()> {
        if self.admin_password.is_empty() {
            anyhow::bail!(
                "CVMATCH_ADMIN_PASSWORD not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    pub fn stats_sources(&self) -> StatsSources {
        StatsSources {
            leads: self.leads_path.clone(),
            payments: self.payments_path.clone(),
            feedback: self.feedback_path.clone(),
        }
    }
}

fn path_var(name: &str, default: &str) -> PathBuf {
    env::var(name)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

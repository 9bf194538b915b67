use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use cvmatch::admin::AdminStats;
use cvmatch::config::Config;
use cvmatch::keywords::lexicon::Lexicon;
use cvmatch::keywords::tagger::RuleTagger;
use cvmatch::keywords::KeywordComparator;
use cvmatch::leads::{LeadLog, LeadOutcome};
use cvmatch::output::terminal;

/// cvmatch: ATS keyword optimizer.
///
/// Compares the keywords of a CV against a job description and reports the
/// match score plus the keywords the CV is missing.
#[derive(Parser)]
#[command(name = "cvmatch", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a CV against a job description
    Compare {
        /// CV text file ("-" reads stdin)
        #[arg(long)]
        cv: String,

        /// Job description text file ("-" reads stdin)
        #[arg(long)]
        job: String,

        /// Leave a contact email (appended to the lead log)
        #[arg(long)]
        email: Option<String>,

        /// Print the result as JSON instead of the colored report
        #[arg(long)]
        json: bool,
    },

    /// List the keywords extracted from a text file
    Keywords {
        /// Text file to analyze ("-" reads stdin)
        file: String,
    },

    /// Show usage statistics from the CSV logs (admin only)
    Stats {
        /// Admin password (CVMATCH_ADMIN_PASSWORD)
        #[arg(long)]
        password: String,
    },

    /// Run the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8000")]
        port: u16,

        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        bind: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cvmatch=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Compare {
            cv,
            job,
            email,
            json,
        } => {
            let config = Config::load()?;
            if cv == "-" && job == "-" {
                anyhow::bail!("Only one of --cv and --job can read from stdin");
            }
            let cv_text = read_input(&cv)?;
            let job_text = read_input(&job)?;
            if cv_text.trim().is_empty() || job_text.trim().is_empty() {
                anyhow::bail!("Please paste both your CV and the job description.");
            }

            let comparator = build_comparator(&config)?;
            let result = comparator.compare(&cv_text, &job_text);

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                terminal::display_comparison(&result);
            }

            if let Some(email) = email {
                record_lead(&config, &email);
            }
        }

        Commands::Keywords { file } => {
            let config = Config::load()?;
            let text = read_input(&file)?;
            let comparator = build_comparator(&config)?;
            terminal::display_keywords(&comparator.extract_keywords(&text));
        }

        Commands::Stats { password } => {
            let config = Config::load()?;
            config.require_admin()?;
            if !cvmatch::admin::verify_password(&config.admin_password, &password) {
                anyhow::bail!("Incorrect admin password.");
            }

            let stats = AdminStats::load(&config.stats_sources())?;
            terminal::display_admin_stats(&stats);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let config = Config::load()?;
            if config.admin_password.is_empty() {
                warn!("CVMATCH_ADMIN_PASSWORD not set; /api/admin/stats will return 503");
            }
            let comparator = build_comparator(&config)?;
            let state = cvmatch::web::AppState::new(config, comparator);
            cvmatch::web::run_server(state, port, &bind).await?;
        }
    }

    Ok(())
}

/// Build the comparator once, loading lexicon overrides if configured.
fn build_comparator(config: &Config) -> Result<KeywordComparator> {
    let lexicon = Lexicon::load(config.lexicon_path.as_deref())?;
    Ok(KeywordComparator::new(RuleTagger::new(Arc::new(lexicon))))
}

/// Read a text input from a file path, or stdin for "-".
fn read_input(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        return Ok(text);
    }
    let path = Path::new(source);
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Append the email to the lead log. Failures are reported, never fatal.
fn record_lead(config: &Config, email: &str) {
    let log = LeadLog::new(config.leads_path.clone());
    match log.record(email) {
        Ok(LeadOutcome::Recorded(email)) => {
            println!("{} We'll be in touch at {email}.", "✓".green());
        }
        Ok(LeadOutcome::Skipped) => {
            println!("{}", "That doesn't look like a valid email; nothing was saved.".dimmed());
        }
        Err(e) => warn!("Failed to record lead: {e:#}"),
    }
}

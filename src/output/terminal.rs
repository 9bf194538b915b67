// Colored terminal output for comparison results and admin statistics.
//
// This module handles all terminal-specific formatting. The main.rs command
// handlers delegate here.

use colored::Colorize;

use crate::admin::{AdminStats, Insight};
use crate::keywords::{ComparisonResult, KeywordSet};

/// Score above which interview callbacks tend to pick up.
const CALLBACK_THRESHOLD: u8 = 50;

/// Display a comparison result.
pub fn display_comparison(result: &ComparisonResult) {
    println!("\n{}", "=== ATS Match Score ===".bold());
    println!("  {}", colorize_score(result.match_score));
    println!();
    println!(
        "  {}",
        "Most companies use Applicant Tracking Systems (ATS) to scan CVs before a \
         recruiter sees them.\n  Low keyword match scores may result in automatic \
         rejection, even if you are qualified."
            .dimmed()
    );

    println!("\n{}", "=== Missing Keywords ===".bold());
    if result.missing_keywords.is_empty() {
        println!("  {}", "Your CV already matches very well.".green());
    } else {
        println!("  These keywords appear in the job description but not in your CV:");
        for line in super::wrap_keywords(&result.missing_keywords, 72) {
            println!("    {}", line.yellow());
        }
    }

    if result.match_score < CALLBACK_THRESHOLD {
        println!(
            "\n  {} Candidates who raise their ATS score above {}% often get more interview callbacks.",
            "Tip:".bold(),
            CALLBACK_THRESHOLD
        );
    }
    println!();
}

/// Display an extracted keyword set, one wrapped block.
pub fn display_keywords(keywords: &KeywordSet) {
    println!(
        "\n{}",
        format!("=== Keywords ({}) ===", keywords.len()).bold()
    );
    if keywords.is_empty() {
        println!("  {}", "No keywords found.".dimmed());
        return;
    }
    let list: Vec<String> = keywords.iter().map(str::to_string).collect();
    for line in super::wrap_keywords(&list, 72) {
        println!("  {line}");
    }
    println!();
}

/// Display admin statistics.
pub fn display_admin_stats(stats: &AdminStats) {
    println!("\n{}", "=== Key Metrics ===".bold());
    println!("  Email leads:       {}", stats.lead_count);
    println!("  Checkout clicks:   {}", stats.checkout_clicks);
    println!("  Lead -> Checkout:  {}%", stats.conversion_rate);
    println!("  Feedback entries:  {}", stats.feedback_entries);

    println!("\n{}", "=== Payment Intent Timeline ===".bold());
    if stats.payment_timeline.is_empty() {
        println!(
            "  {}",
            "No valid payment timestamp data available.".dimmed()
        );
        println!(
            "  {} {}",
            "Payments CSV columns:".dimmed(),
            stats.payment_columns.join(", ").dimmed()
        );
    } else {
        for at in &stats.payment_timeline {
            println!("  {}", at.format("%Y-%m-%d %H:%M:%S"));
        }
    }

    println!("\n{}", "=== Insights ===".bold());
    let advice = stats.insight.advice();
    let colored_advice = match stats.insight {
        Insight::Low => advice.red(),
        Insight::Average => advice.yellow(),
        Insight::Strong => advice.green(),
    };
    println!("  {colored_advice}");
    println!();
}

/// Colorize a match score by band.
fn colorize_score(score: u8) -> colored::ColoredString {
    let text = format!("{score}%");
    match score {
        75..=100 => text.green().bold(),
        CALLBACK_THRESHOLD..=74 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

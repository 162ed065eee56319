//! Display functions for command results

use super::formatters::{create_bar, format_duration};
use crate::commands::{CheckResult, FindResult, StatsReport};
use colored::Colorize;

/// Print the result of a full dictionary search
pub fn print_find_result(result: &FindResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "COMBINATIONS:".bright_cyan().bold(),
        format!("{}-letter words", result.target_len)
            .bright_yellow()
            .bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!(
        "\nSearched {} target words among {} loaded ({} mode)",
        result.target_count, result.dictionary_size, result.mode
    );

    if result.combinations.is_empty() {
        println!("\n{}", "No combinations found".yellow().bold());
        return;
    }

    println!();
    for combination in &result.combinations {
        println!("{combination}");
    }

    println!(
        "\n{}",
        format!(
            "Found {} combinations in {}",
            result.combinations.len(),
            format_duration(result.duration)
        )
        .green()
        .bold()
    );
}

/// Print the result of checking a single word
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Checking: {}",
        result.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if !result.in_dictionary {
        println!("{}", "Not in the word list itself".bright_black());
    }

    if result.combinations.is_empty() {
        println!(
            "\n{}",
            "❌ No combination of smaller words builds it".red().bold()
        );
        return;
    }

    println!();
    for combination in &result.combinations {
        println!("{combination}");
    }

    println!(
        "\n{}",
        format!(
            "✅ Built {} ways from smaller words",
            result.combinations.len()
        )
        .green()
        .bold()
    );
}

/// Print the dictionary statistics report
pub fn print_stats_report(report: &StatsReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "DICTIONARY STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Words loaded:     {}", report.total_words);
    println!("   Target length:    {}", report.target_len);
    println!(
        "   Split targets:    {}",
        format!("{}", report.target_count).bright_yellow().bold()
    );
    println!("   Part candidates:  {}", report.part_candidates);

    if report.length_counts.is_empty() {
        return;
    }

    let max_count = report
        .length_counts
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(0);

    println!("\n📈 {}", "Length distribution:".bright_cyan().bold());
    for &(len, count) in &report.length_counts {
        let pct = (count as f64 / report.total_words as f64) * 100.0;
        let bar = create_bar(count as f64, max_count as f64, 40);
        println!("   {len:3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

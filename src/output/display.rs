//! Display functions for command results

use super::formatters::{TREND_THRESHOLD, create_progress_bar, format_letters, percent, trend_label};
use crate::commands::{
    AuditReport, GenerateResult, PuzzleSetStatistics, RandomizationCheck, RedateResult,
};
use crate::core::Puzzle;
use colored::Colorize;
use std::path::Path;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the summary of a generation run
pub fn print_generate_result(result: &GenerateResult, output: &Path) {
    print_header("PUZZLE SET GENERATED");

    println!("\n📊 {}", "Summary:".bright_cyan().bold());
    println!(
        "   Puzzles:          {}",
        result.puzzles.len().to_string().bright_yellow().bold()
    );
    if let (Some(first), Some(last)) = (
        result.puzzles.first().and_then(|p| p.live_date),
        result.puzzles.last().and_then(|p| p.live_date),
    ) {
        println!("   Live dates:       {first} → {last}");
    }
    println!("   Average words:    {:.1}", result.average_words());
    println!("   Average score:    {:.1}", result.average_score());
    println!("   Average pangrams: {:.2}", result.average_pangrams());
    if result.relaxed > 0 {
        println!(
            "   Relaxed slots:    {}",
            result.relaxed.to_string().yellow()
        );
    }
    if result.forced > 0 {
        println!("   Forced slots:     {}", result.forced.to_string().red());
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!(
        "\n{}",
        format!("✅ Saved to {}", output.display()).green().bold()
    );
}

/// Print a single puzzle with its words
pub fn print_puzzle(puzzle: &Puzzle) {
    print_header(&format!("PUZZLE {}", puzzle.id));

    println!(
        "\n   Letters:  {}",
        format_letters(puzzle.center_letter, &puzzle.outside_letters)
            .bright_yellow()
            .bold()
    );
    if let Some(date) = puzzle.live_date {
        println!("   Live:     {date}");
    }
    println!("   Words:    {}", puzzle.total_words);
    println!("   Score:    {}", puzzle.total_score);
    println!(
        "   Bingo:    {}",
        if puzzle.bingo_possible {
            "yes".green()
        } else {
            "no".bright_black()
        }
    );

    if puzzle.pangrams.is_empty() {
        println!("   Pangrams: {}", "none".bright_black());
    } else {
        println!(
            "   Pangrams: {}",
            puzzle.pangrams.join(", ").bright_green().bold()
        );
    }

    if !puzzle.valid_words.is_empty() {
        println!("\n📖 {}", "Words:".bright_cyan().bold());
        for chunk in puzzle.valid_words.chunks(8) {
            println!("   {}", chunk.join(" "));
        }
    }
}

/// Print statistics for a puzzle set
pub fn print_statistics(stats: &PuzzleSetStatistics) {
    print_header("PUZZLE SET STATISTICS");

    println!("\n📊 {}", "Size:".bright_cyan().bold());
    println!("   Puzzles:       {}", stats.total_puzzles);
    println!(
        "   Words:         {} – {} (avg {})",
        stats.min_words,
        stats.max_words,
        format!("{:.1}", stats.average_words).bright_yellow()
    );
    println!(
        "   Score:         {} – {} (avg {})",
        stats.min_score,
        stats.max_score,
        format!("{:.1}", stats.average_score).bright_yellow()
    );
    println!(
        "   Bingo:         {} ({:.1}%)",
        stats.bingo_count,
        percent(stats.bingo_count, stats.total_puzzles)
    );

    println!("\n📈 {}", "Pangrams per puzzle:".bright_cyan().bold());
    for (&pangrams, &count) in &stats.pangram_histogram {
        let pct = percent(count, stats.total_puzzles);
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {pangrams:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    println!("\n🔤 {}", "Center letters:".bright_cyan().bold());
    for (letter, count) in &stats.top_center_letters {
        println!("   {}: {count}", letter.to_ascii_uppercase());
    }

    println!("\n🔤 {}", "Letters on boards:".bright_cyan().bold());
    let letters: Vec<String> = stats
        .top_letters
        .iter()
        .map(|(letter, count)| format!("{}×{count}", letter.to_ascii_uppercase()))
        .collect();
    println!("   {}", letters.join("  "));
}

/// Print correlations of puzzle size with calendar position
pub fn print_randomization(check: &RandomizationCheck) {
    println!("\n🎲 {}", "Randomization (correlation with date):".bright_cyan().bold());

    for (label, value) in [
        ("Words", check.word_correlation),
        ("Score", check.score_correlation),
        ("Pangrams", check.pangram_correlation),
    ] {
        let verdict = trend_label(value);
        let verdict = if value.abs() < TREND_THRESHOLD {
            verdict.green()
        } else {
            verdict.yellow()
        };
        println!("   {label:9} {value:+.3}  {verdict}");
    }
}

/// Print the findings of an audit
pub fn print_audit_report(report: &AuditReport) {
    print_header("PUZZLE SET AUDIT");

    println!("\n   Puzzles audited: {}", report.audited);

    if report.is_clean() {
        println!("\n{}", "✅ All puzzles pass".green().bold());
        return;
    }

    for failure in &report.failures {
        println!("\n   {}", failure.id.bright_yellow().bold());
        for violation in &failure.violations {
            println!("     {} {violation}", "✗".red());
        }
    }

    println!(
        "\n{}",
        format!(
            "❌ {} violations in {} puzzles",
            report.violation_count(),
            report.failures.len()
        )
        .red()
        .bold()
    );
}

/// Print the new date range after redating
pub fn print_redate_result(result: &RedateResult, output: &Path) {
    match (result.first, result.last) {
        (Some(first), Some(last)) => println!(
            "{}",
            format!(
                "✅ Redated {} puzzles: {first} → {last} ({})",
                result.count,
                output.display()
            )
            .green()
            .bold()
        ),
        _ => println!("{}", "No puzzles to redate".yellow()),
    }
}

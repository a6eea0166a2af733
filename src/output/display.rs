//! Display functions for command results

use crate::commands::{BenchmarkResult, ExhaustiveStatistics, SolveResult};
use colored::Colorize;

/// Print the result of deducing one secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Deducing: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        let turn = i + 1;
        println!("\nTurn {}: {} → {}", turn, step.guess, step.feedback);

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Deduced in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not deduced within {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Codes tested:     {}", result.total_codes);
    println!("   Codes cracked:    {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Codes/second:     {:.1}", result.codes_per_second);

    print_distribution(&result.distribution, result.total_codes);
}

/// Print the statistics of an exhaustive run
pub fn print_exhaustive_statistics(stats: &ExhaustiveStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXHAUSTIVE RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Coverage:".bright_cyan().bold());
    println!("   Codes tested:     {}", stats.total_codes);
    println!(
        "   Cracked:          {}",
        format!("{}", stats.solved).green()
    );
    if stats.failed > 0 {
        println!("   Survived:         {}", format!("{}", stats.failed).red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("   Best case:        {}", stats.min_guesses);
    println!("   Worst case:       {}", stats.max_guesses);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    print_distribution(&stats.guess_distribution, stats.total_codes);

    if !stats.worst_codes.is_empty() {
        println!("\n🔎 {}", "Hardest codes:".bright_cyan().bold());
        for (code, guesses) in &stats.worst_codes {
            println!("   {code}: {guesses} guesses");
        }
    }
}

fn print_distribution(distribution: &std::collections::HashMap<usize, usize>, total: usize) {
    if total == 0 || distribution.is_empty() {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());

    let mut guess_counts: Vec<usize> = distribution.keys().copied().collect();
    guess_counts.sort_unstable();

    for guess_count in guess_counts {
        let count = distribution[&guess_count];
        let pct = (count as f64 / total as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
        );
        println!("   {guess_count:2}: {bar} {count:4} ({pct:5.1}%)");
    }
}

//! Display functions for command results

use super::formatters::{create_progress_bar, format_ladder, highlight_ladder};
use crate::commands::{BenchmarkResult, GenerateResult, SolveResult};
use crate::core::normalize;
use colored::Colorize;

/// Print the result of solving a puzzle
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {} → {}",
        result.start.bright_yellow().bold(),
        result.end.bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match result.minimum {
        Some(minimum) => println!("Shortest possible ladder: {minimum} words"),
        None => println!("{}", "These words are not connected".red()),
    }
    println!("Maximum ladder length:    {}", result.max_ladder_length);

    println!();
    for (i, ladder) in result.solutions.iter().enumerate() {
        println!("{:4}. {}", i + 1, highlight_ladder(ladder));
    }

    if verbose {
        println!("\n   Branches explored: {}", result.explored);
        println!("   Time taken:        {:.3}s", result.duration.as_secs_f64());
    }

    println!();
    if result.is_solved() {
        println!(
            "{}",
            format!("✅ Found {} ladders", result.solutions.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!(
                "❌ No ladder of at most {} words",
                result.max_ladder_length
            )
            .red()
            .bold()
        );
    }
}

/// Print the shortest ladder length between two words
pub fn print_minimum_length(start: &str, end: &str, minimum: Option<usize>) {
    let (start, end) = (normalize(start.trim()), normalize(end.trim()));
    match minimum {
        Some(minimum) => println!(
            "{} → {}: {}",
            start.bright_yellow(),
            end.bright_yellow(),
            format!("{minimum} words").green().bold()
        ),
        None => println!(
            "{} → {}: {}",
            start.bright_yellow(),
            end.bright_yellow(),
            "not connected".red().bold()
        ),
    }
}

/// Print a generated puzzle
///
/// With `reveal`, the whole ladder is shown; otherwise only its endpoints.
pub fn print_generate_result(result: &GenerateResult, reveal: bool) {
    let (Some(start), Some(end)) = (result.start(), result.end()) else {
        return;
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {} ({} words)",
        "PUZZLE:".bright_cyan().bold(),
        start.bright_yellow().bold(),
        end.bright_yellow().bold(),
        result.words.len()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.attempts > 1 {
        println!("Generated after {} attempts", result.attempts);
    }
    if reveal {
        println!("\n   {}", format_ladder(&result.words));
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!(
        "   Puzzles:          {} × {}-letter words, ladder length {}",
        result.puzzles, result.word_length, result.ladder_length
    );
    if result.failed_generations > 0 {
        println!(
            "   Not generated:    {}",
            format!("{}", result.failed_generations).yellow()
        );
    }
    println!(
        "   Average explored: {}",
        format!("{:.1}", result.average_explored())
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest explored:  {}",
        format!("{}", result.min_explored).green()
    );
    println!(
        "   Most explored:    {}",
        format!("{}", result.max_explored).yellow()
    );
    println!("   Solutions/puzzle: {:.1}", result.average_solutions());
    println!(
        "   Solve time:       {:.2}s",
        result.solve_duration.as_secs_f64()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second());

    if result.puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Minimum ladder lengths:".bright_cyan().bold());
    let mut lengths: Vec<_> = result.minimum_distribution.iter().collect();
    lengths.sort_unstable();
    for (&length, &count) in lengths {
        let pct = (count as f64 / result.puzzles as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {length:2}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

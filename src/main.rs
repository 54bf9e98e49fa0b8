use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use disjoint_words::{solve, CancellationToken, NoProgress, SearchConfig};

#[derive(Parser)]
#[command(name = "disjoint-words")]
#[command(about = "Count groups of words that share no letters")]
#[command(
    long_about = "Count groups of words that share no letters.\n\n\
The core options are PATH, --word-length and --count. --threads, --list and \
--progress are optional extras for tuning and inspecting a run."
)]
#[command(version)]
struct Cli {
    /// Word list, one word per line
    path: PathBuf,

    /// Letters per word
    #[arg(short = 'l', long, default_value = "5")]
    word_length: usize,

    /// Words per group
    #[arg(short = 'k', long = "count", default_value = "5")]
    count: usize,

    /// Worker threads (defaults to one per core)
    #[arg(short = 'j', long)]
    threads: Option<usize>,

    /// Print every word group found
    #[arg(long)]
    list: bool,

    /// Show progress on stderr
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = SearchConfig {
        word_length: cli.word_length,
        target_count: cli.count,
        threads: cli.threads,
        collect_solutions: cli.list,
    };

    let show_progress = |percent: u8| {
        eprint!("\r{percent:3}%");
        let _ = std::io::stderr().flush();
    };
    let cancel = CancellationToken::new();
    let outcome = if cli.progress {
        let outcome = solve(&cli.path, &config, &show_progress, &cancel);
        eprintln!();
        outcome
    } else {
        solve(&cli.path, &config, &NoProgress, &cancel)
    };
    let report =
        outcome.with_context(|| format!("could not search words from {}", cli.path.display()))?;

    if report.dictionary_size == 0 {
        println!("No valid words found.");
        return Ok(());
    }
    println!("Loaded {} unique words.", report.dictionary_size);
    if let Some(solutions) = &report.solutions {
        for group in solutions {
            println!("{}", group.join(" "));
        }
    }
    println!(
        "Found {} valid combinations of {} words.",
        report.combinations, config.target_count
    );
    println!("Time: {:.2} seconds.", report.elapsed.as_secs_f64());
    Ok(())
}

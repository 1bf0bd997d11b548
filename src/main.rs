//! Spelling Bee Generator - CLI
//!
//! Generates, inspects and maintains Spelling Bee puzzle sets.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use log::{LevelFilter, info};
use spelling_bee::{
    commands::{
        GenerateConfig, analyze_puzzles, audit_puzzles, check_randomization,
        create_custom_puzzle, redate_puzzles, run_generate,
    },
    core::LetterSet,
    dictionary::{Dictionary, load_dictionary, load_rejections},
    generator::{GeneratorConfig, WordLengthRange},
    output::{
        print_audit_report, print_generate_result, print_puzzle, print_randomization,
        print_redate_result, print_statistics,
    },
    persistence::{load_puzzles, save_puzzle, save_puzzles},
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "spelling_bee",
    about = "Generate balanced Spelling Bee puzzle sets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more detail (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a batch of puzzles with consecutive live dates
    Generate {
        /// Word-frequency dictionary (JSON object of word to count)
        dictionary: PathBuf,

        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "180")]
        count: usize,

        /// Maximum valid words per puzzle
        #[arg(long, default_value = "400")]
        max_words: usize,

        /// Target quality score
        #[arg(long, default_value = "0.65")]
        min_quality: f64,

        /// First live date (YYYY-MM-DD, default: today)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// Rejected-word cache subtracted from the dictionary
        #[arg(long, default_value = "word_cache.json")]
        rejections: PathBuf,

        /// Output file (default: puzzle_sets_<timestamp>.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a puzzle from hand-picked letters
    Custom {
        /// Center (required) letter
        #[arg(short, long)]
        center: char,

        /// Six outside letters, comma separated
        #[arg(short, long)]
        outside: String,

        /// Word-frequency dictionary
        #[arg(long, default_value = "word_frequencies.json")]
        dict: PathBuf,

        /// Write the puzzle JSON here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show statistics and a randomization check for a puzzle file
    Analyze {
        /// Puzzle set file
        puzzles: PathBuf,
    },

    /// Verify every puzzle in a file; exits non-zero on any violation
    Audit {
        /// Puzzle set file
        puzzles: PathBuf,
    },

    /// Reassign consecutive live dates to a puzzle file
    Redate {
        /// Puzzle set file, rewritten in place
        puzzles: PathBuf,

        /// New first live date (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Generate {
            dictionary,
            count,
            max_words,
            min_quality,
            start_date,
            seed,
            rejections,
            output,
        } => {
            let generator = GeneratorConfig {
                max_words,
                min_quality,
                seed,
                ..GeneratorConfig::default()
            };
            let config = GenerateConfig {
                count,
                start_date: start_date.unwrap_or_else(|| Local::now().date_naive()),
                generator,
            };
            run_generate_command(&dictionary, &rejections, &config, output)
        }
        Commands::Custom {
            center,
            outside,
            dict,
            output,
        } => run_custom_command(center, &outside, &dict, output.as_deref()),
        Commands::Analyze { puzzles } => run_analyze_command(&puzzles),
        Commands::Audit { puzzles } => run_audit_command(&puzzles),
        Commands::Redate { puzzles, start } => run_redate_command(&puzzles, start),
    }
}

fn load_filtered_dictionary(path: &Path, rejections: &Path) -> Result<Dictionary> {
    let dictionary = load_dictionary(path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
    let rejected = load_rejections(rejections);
    let before = dictionary.len();
    let dictionary = dictionary.without_rejected(&rejected);
    info!(
        "Loaded {} words ({} rejected)",
        dictionary.len(),
        before - dictionary.len()
    );
    Ok(dictionary)
}

fn default_output_path() -> PathBuf {
    PathBuf::from(format!(
        "puzzle_sets_{}.json",
        Local::now().format("%Y%m%d_%H%M%S")
    ))
}

fn run_generate_command(
    dictionary: &Path,
    rejections: &Path,
    config: &GenerateConfig,
    output: Option<PathBuf>,
) -> Result<()> {
    let dictionary = load_filtered_dictionary(dictionary, rejections)?;
    if dictionary.is_empty() {
        bail!("Dictionary has no usable words");
    }

    println!(
        "Generating {} puzzles from {} words, live from {}...",
        config.count,
        dictionary.len(),
        config.start_date
    );

    let result = run_generate(&dictionary, config).context("Puzzle generation failed")?;

    let output = output.unwrap_or_else(default_output_path);
    save_puzzles(&result.puzzles, &output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    print_generate_result(&result, &output);
    Ok(())
}

/// Parse outside letters given as `a,b,c,d,e,f` (whitespace tolerated)
fn parse_outside_letters(text: &str) -> Vec<char> {
    text.chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect()
}

fn run_custom_command(
    center: char,
    outside: &str,
    dictionary: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let letters = LetterSet::from_chars(center, &parse_outside_letters(outside))
        .context("Invalid letters")?;
    let dictionary = load_dictionary(dictionary)
        .with_context(|| format!("Failed to load dictionary {}", dictionary.display()))?;

    let mut rng = GeneratorConfig::default().rng();
    let puzzle = create_custom_puzzle(
        &dictionary,
        &letters,
        WordLengthRange::default(),
        Local::now().naive_local(),
        &mut rng,
    );

    match output {
        Some(path) => {
            print_puzzle(&puzzle);
            save_puzzle(&puzzle, path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("\n{}", format!("✅ Saved to {}", path.display()).green().bold());
        }
        None => {
            let json = serde_json::to_string_pretty(&puzzle).context("Failed to encode puzzle")?;
            println!("{json}");
        }
    }
    Ok(())
}

fn run_analyze_command(path: &Path) -> Result<()> {
    let puzzles =
        load_puzzles(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let Some(stats) = analyze_puzzles(&puzzles) else {
        println!("{}", "No puzzles found".yellow());
        return Ok(());
    };

    print_statistics(&stats);
    print_randomization(&check_randomization(&puzzles));
    Ok(())
}

fn run_audit_command(path: &Path) -> Result<()> {
    let puzzles =
        load_puzzles(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let report = audit_puzzles(&puzzles, WordLengthRange::default());
    print_audit_report(&report);

    if !report.is_clean() {
        bail!(
            "{} of {} puzzles failed the audit",
            report.failures.len(),
            report.audited
        );
    }
    Ok(())
}

fn run_redate_command(path: &Path, start: NaiveDate) -> Result<()> {
    let mut puzzles =
        load_puzzles(path).with_context(|| format!("Failed to load {}", path.display()))?;

    let result = redate_puzzles(&mut puzzles, start).context("Failed to assign dates")?;
    save_puzzles(&puzzles, path).with_context(|| format!("Failed to write {}", path.display()))?;

    print_redate_result(&result, path);
    Ok(())
}

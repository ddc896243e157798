//! Passforge - password strength analysis and targeted wordlist generation
//!
//! A simple CLI tool for scoring passwords with zxcvbn and building
//! personalised wordlists from identity fragments.

mod cli;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Password;
use once_cell::sync::Lazy;
use regex::Regex;

use passforge::{
    create_estimator, GeneratorConfig, IdentityInput, PassforgeError, Result, StrengthReport,
    Wordlist, WordlistGenerator,
};

use cli::{Args, Command};

static LIST_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,\s/_.-]+").unwrap());

fn main() {
    let args = Args::parse();

    if let Err(e) = passforge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    init_tracing(args.verbose);

    let result = match args.command {
        Command::Analyze { json } => run_analyze(json),
        Command::Generate {
            name,
            pet,
            dob,
            keywords,
            years,
            max,
            output,
        } => {
            let input = IdentityInput {
                name,
                pet,
                dob,
                keywords: keywords.as_deref().map(split_list).unwrap_or_default(),
                years: years.as_deref().map(split_list).unwrap_or_default(),
            };
            run_generate(&input, max, &output)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        process::exit(1);
    }
}

/// Initialize tracing with RUST_LOG support
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let default_filter = if verbose {
        "passforge=debug"
    } else {
        "passforge=info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Split a comma/space/separator delimited list argument into items
fn split_list(raw: &str) -> Vec<String> {
    LIST_SEPARATORS
        .split(raw.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}

/// Analyze workflow: prompt for a password and display the report
fn run_analyze(json: bool) -> Result<()> {
    println!("🔐 Passforge - password strength analysis");
    println!("═════════════════════════════════════════");
    println!();

    let password = Password::new("Enter password:")
        .without_confirmation()
        .prompt()?;

    let estimator = create_estimator();
    let report = estimator.estimate(&password, &[])?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        display_report(&report);
    }

    Ok(())
}

/// Display a strength report in a clean format
fn display_report(report: &StrengthReport) {
    println!();
    println!("📊 Score: {}/4 ({})", report.score, report.verdict());
    println!("🎯 Estimated guesses: {}", report.guesses);
    println!();
    println!("⏱️  Crack-time estimates:");
    for estimate in &report.crack_times {
        println!("   {} - {}", estimate.scenario, estimate.display);
    }

    if let Some(warning) = &report.warning {
        println!();
        println!("⚠️  Warning: {}", warning);
    }

    if !report.suggestions.is_empty() {
        println!();
        println!("💡 Suggestions:");
        for suggestion in &report.suggestions {
            println!("   - {}", suggestion);
        }
    }
}

/// Generate workflow: build the wordlist and write it to a file
fn run_generate(input: &IdentityInput, max: i64, output: &Path) -> Result<()> {
    println!("🛠️  Passforge - targeted wordlist generation");
    println!("════════════════════════════════════════════");
    println!();

    if input.is_empty() {
        println!("⚠️  No identity fragments provided; the wordlist will be empty.");
    }

    let max_words = usize::try_from(max).unwrap_or(0);
    let generator = WordlistGenerator::with_config(GeneratorConfig::with_max_words(max_words));

    let started = Instant::now();
    let wordlist = generator.generate(input);
    let elapsed = started.elapsed();

    write_wordlist(output, &wordlist)?;

    println!(
        "✅ Generated {} words -> {} in {:.2}s",
        wordlist.len(),
        output.display(),
        elapsed.as_secs_f32()
    );
    if wordlist.capped {
        println!("   (capped at {} words)", max_words);
    }

    Ok(())
}

/// Write a wordlist to a file, one candidate per line, in result order
fn write_wordlist(path: &Path, wordlist: &Wordlist) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| PassforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    let mut writer = BufWriter::new(file);

    let progress = ProgressBar::new(wordlist.len() as u64);
    progress.set_style(
        ProgressStyle::with_template("   {bar:40.cyan/blue} {pos}/{len} words")
            .map_err(|e| PassforgeError::internal(e.to_string()))?,
    );

    for word in wordlist.iter() {
        writeln!(writer, "{}", word)
            .map_err(|e| PassforgeError::io(e.to_string(), Some(path.display().to_string())))?;
        progress.inc(1);
    }
    writer
        .flush()
        .map_err(|e| PassforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    progress.finish_and_clear();

    Ok(())
}

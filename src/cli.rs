use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "passforge")]
#[command(version)]
#[command(about = "Password strength analysis and targeted wordlist generation", long_about = None)]
pub struct Args {
    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Analyze a password with the zxcvbn strength estimator
    ///
    /// The password is read interactively with no echo and never written
    /// anywhere. The report covers a 0-4 score, crack-time estimates for
    /// standard guessing scenarios, and improvement suggestions.
    ///
    /// Example: passforge analyze
    Analyze {
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Generate a targeted wordlist from identity fragments
    ///
    /// Combines names, pet names, date-of-birth fragments, keywords and
    /// years into case, leetspeak and suffix variations. Output is one
    /// candidate per line, deduplicated, capped at --max entries.
    ///
    /// Example: passforge generate --name alex --pet milo --dob 1999-07-01 \
    ///     --keywords "india,football" --years "2024,2025" -o wordlist.txt
    Generate {
        /// Name or nickname
        #[arg(long)]
        name: Option<String>,

        /// Pet name
        #[arg(long)]
        pet: Option<String>,

        /// Date of birth like 2001-10-25
        #[arg(long)]
        dob: Option<String>,

        /// Comma or space separated keywords (company, team, etc.)
        #[arg(long)]
        keywords: Option<String>,

        /// Extra years to include (e.g. 1995,2000,2025)
        #[arg(long)]
        years: Option<String>,

        /// Cap the wordlist size; zero or negative yields an empty list
        #[arg(long, default_value_t = 50_000)]
        max: i64,

        /// Output file path
        #[arg(short, long, default_value = "wordlist.txt")]
        output: PathBuf,
    },
}

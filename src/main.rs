//! Compound word finder - CLI
//!
//! Reads a word list and reports every way its target-length words can be
//! written as concatenations of smaller words from the same list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use compound_finder::{
    commands::{check_word, run_find, run_stats},
    output::{print_check_result, print_find_result, print_stats_report},
    search::{CombinationFinder, SearchMode},
    wordlist::{Dictionary, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "compound_finder",
    about = "Finds which words are concatenations of smaller words from the same list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, default_value = "input.txt")]
    wordlist: String,

    /// Length of the words to split
    #[arg(short = 'l', long, global = true, default_value_t = CombinationFinder::DEFAULT_TARGET_LEN)]
    length: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all combinations across the word list (default)
    Find {
        /// Search mode: exhaustive (default) or two-word
        #[arg(short, long, default_value = "exhaustive")]
        mode: String,
    },

    /// Check how one word can be built from smaller words
    Check {
        /// The word to split
        word: String,
    },

    /// Show the length distribution of the word list
    Stats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    println!("Reading words from {}", cli.wordlist);
    let dictionary = load_dictionary(&cli.wordlist)?;
    println!("Loaded {} words", dictionary.len());

    // Default to a full search when no command is given
    let command = cli.command.unwrap_or(Commands::Find {
        mode: String::from("exhaustive"),
    });

    match command {
        Commands::Find { mode } => {
            run_find_command(&dictionary, cli.length, &mode);
            Ok(())
        }
        Commands::Check { word } => run_check_command(&dictionary, &word),
        Commands::Stats => {
            run_stats_command(&dictionary, cli.length);
            Ok(())
        }
    }
}

/// Load the word list, naming the path on failure
fn load_dictionary(path: &str) -> Result<Dictionary> {
    load_from_file(path).with_context(|| format!("could not read word list '{path}'"))
}

fn run_find_command(dictionary: &Dictionary, target_len: usize, mode_name: &str) {
    let mode = SearchMode::from_name(mode_name);
    let result = run_find(dictionary, target_len, mode);
    print_find_result(&result);
}

fn run_check_command(dictionary: &Dictionary, word: &str) -> Result<()> {
    let result = check_word(dictionary, word).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}

fn run_stats_command(dictionary: &Dictionary, target_len: usize) {
    let report = run_stats(dictionary, target_len);
    print_stats_report(&report);
}

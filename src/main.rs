//! Textmetrics CLI - Text Metrics Engine
//!
//! Command-line interface for counting, estimating and transforming text.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use textmetrics::{
    transform_case, CaseMode, Config, KeywordAnalyzer, Result, TextMetrics, TextMetricsError,
    TimeEstimate,
};

#[derive(Parser, Debug)]
#[command(name = "textmetrics")]
#[command(version)]
#[command(about = "Text metrics engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON configuration file (rates and keyword limit)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show every metric for a text
    Stats {
        /// Text to analyze (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the most frequent keywords
    Keywords {
        /// Text to analyze (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Number of keywords (overrides the configured limit)
        #[arg(short = 'k', long)]
        count: Option<usize>,
    },

    /// Transform the case of a text (upper, lower, title, sentence)
    Case {
        /// Case mode
        #[arg(value_enum, ignore_case = true)]
        mode: CaseMode,

        /// Text to transform (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Show reading and speaking time
    Time {
        /// Text to analyze (reads --input or stdin when omitted)
        text: Option<String>,

        /// Input text file
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let result = load_config(cli.config).and_then(|config| match cli.command {
        Commands::Stats { text, input, json } => show_stats(&config, text, input, json),

        Commands::Keywords { text, input, count } => show_keywords(config, text, input, count),

        Commands::Case { mode, text, input } => change_case(mode, text, input),

        Commands::Time { text, input } => show_time(&config, text, input),
    });

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            Config::from_file(path)
        }
        None => Ok(Config::default()),
    }
}

/// Resolves the input text: positional argument, then file, then stdin.
fn read_input(text: Option<String>, input: Option<PathBuf>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }

    if let Some(path) = input {
        if !path.exists() {
            return Err(TextMetricsError::FileNotFound(path));
        }
        info!("Reading {}", path.display());
        return Ok(fs::read_to_string(&path)?);
    }

    info!("Reading from stdin");
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

fn show_stats(
    config: &Config,
    text: Option<String>,
    input: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let text = read_input(text, input)?;
    let metrics = TextMetrics::with_config(&text, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        println!("{}", metrics);
    }

    Ok(())
}

fn show_keywords(
    mut config: Config,
    text: Option<String>,
    input: Option<PathBuf>,
    count: Option<usize>,
) -> Result<()> {
    if let Some(count) = count {
        config.keywords.limit = count;
        config.validate()?;
    }

    let text = read_input(text, input)?;
    let keywords = KeywordAnalyzer::new(config.keywords).analyze(&text);

    if keywords.is_empty() {
        println!("No keywords found");
        return Ok(());
    }

    for (i, keyword) in keywords.iter().enumerate() {
        println!("{:2}. {:20} {}", i + 1, keyword.word, keyword.count);
    }

    Ok(())
}

fn change_case(mode: CaseMode, text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let text = read_input(text, input)?;
    info!("Applying {} case", mode);
    println!("{}", transform_case(&text, mode));
    Ok(())
}

fn show_time(config: &Config, text: Option<String>, input: Option<PathBuf>) -> Result<()> {
    let text = read_input(text, input)?;
    let words = textmetrics::count_words(&text);

    println!("Words:    {}", words);
    println!("Reading:  {}", TimeEstimate::reading(words, &config.estimate));
    println!("Speaking: {}", TimeEstimate::speaking(words, &config.estimate));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_case_mode_values() {
        for (arg, expected) in [
            ("upper", CaseMode::Upper),
            ("uppercase", CaseMode::Upper),
            ("LOWER", CaseMode::Lower),
            ("lowercase", CaseMode::Lower),
            ("title", CaseMode::Title),
            ("Sentence", CaseMode::Sentence),
        ] {
            let cli = Cli::try_parse_from(["textmetrics", "case", arg, "some text"]).unwrap();
            match cli.command {
                Commands::Case { mode, text, .. } => {
                    assert_eq!(mode, expected);
                    assert_eq!(text.as_deref(), Some("some text"));
                }
                _ => panic!("expected the case subcommand"),
            }
        }
    }

    #[test]
    fn test_unknown_case_mode_rejected() {
        let err = Cli::try_parse_from(["textmetrics", "case", "shout", "text"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue);
    }

    #[test]
    fn test_case_mode_possible_values() {
        let command = Cli::command();
        let case = command.find_subcommand("case").unwrap();
        let mode = case.get_arguments().find(|arg| arg.get_id() == "mode").unwrap();
        let names: Vec<String> = mode
            .get_possible_values()
            .iter()
            .map(|value| value.get_name().to_string())
            .collect();
        assert_eq!(names, ["upper", "lower", "title", "sentence"]);
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::try_parse_from([
            "textmetrics",
            "keywords",
            "-k",
            "3",
            "--verbose",
            "--config",
            "rates.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("rates.json")));
        assert!(matches!(cli.command, Commands::Keywords { count: Some(3), .. }));
    }
}

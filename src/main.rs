//! Wordle Sieve - CLI
//!
//! Constraint-filtering Wordle solver with TUI and CLI modes.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordle_sieve::{
    commands::{
        SolveConfig, StatsConfig, opening_label, preset_openings, run_openings, run_simple,
        solve_word,
    },
    core::Word,
    output::{print_solve_result, print_stats_comparison, print_stats_report},
    solver::{FilterMode, OpeningPreset, OpeningSequence, Session},
    wordlists::{WORDS, load_from_file, words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_sieve",
    about = "Wordle solver that narrows a word list with letter constraints",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Opening preset: none, one (default), two, three (or 0-3)
    #[arg(short, long, global = true, default_value = "one")]
    opening: String,

    /// Explicit opening words, e.g. guesses already played (overrides --opening)
    #[arg(long, global = true, value_delimiter = ',')]
    openers: Vec<String>,

    /// Seed for the random source (default: seeded from the OS)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Wordlist: 'embedded' (default) or path to a .txt or .json file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Track letter counts and absent positions when filtering
    #[arg(long, global = true)]
    count_aware: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show population sizes and known constraints after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Measure how often an opening solves within six guesses
    Stats {
        /// Number of games per opening
        #[arg(short = 'n', long, default_value = "1000")]
        runs: usize,

        /// Compare every opening preset
        #[arg(short, long)]
        all_openings: bool,
    },
}

/// Settings shared by every command
struct Settings {
    opening: OpeningSequence,
    opening_name: String,
    seed: u64,
    filter_mode: FilterMode,
}

impl Settings {
    fn from_cli(cli: &Cli) -> Result<Self> {
        let (opening, opening_name) = if cli.openers.is_empty() {
            let preset = OpeningPreset::from_name(&cli.opening).ok_or_else(|| {
                anyhow!(
                    "Unknown opening '{}' (use none, one, two or three)",
                    cli.opening
                )
            })?;
            (OpeningSequence::from(preset), preset.name().to_string())
        } else {
            (OpeningSequence::custom(cli.openers.as_slice())?, "custom".to_string())
        };

        let filter_mode = if cli.count_aware {
            FilterMode::CountAware
        } else {
            FilterMode::Lenient
        };

        Ok(Self {
            opening,
            opening_name,
            seed: cli.seed.unwrap_or_else(rand::random),
            filter_mode,
        })
    }

    fn session<'a>(&self, words: &'a [Word]) -> Result<Session<'a, StdRng>> {
        let rng = StdRng::seed_from_u64(self.seed);
        Ok(Session::new(words, self.opening.clone(), rng)?.with_filter_mode(self.filter_mode))
    }
}

/// Load the word list based on the -w flag
fn load_words(wordlist: &str) -> Result<Vec<Word>> {
    match wordlist {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let words = load_words(&cli.wordlist)?;
    let settings = Settings::from_cli(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&settings, &words),
        Commands::Simple => run_simple_command(&settings, &words),
        Commands::Solve { word, verbose } => run_solve_command(&settings, &word, verbose, &words),
        Commands::Stats { runs, all_openings } => {
            run_stats_command(&settings, runs, all_openings, &words)
        }
    }
}

fn run_solve_command(
    settings: &Settings,
    word: &str,
    verbose: bool,
    words: &[Word],
) -> Result<()> {
    let config = SolveConfig::new(word.to_string(), settings.opening.clone())
        .with_filter_mode(settings.filter_mode);
    let result = solve_word(config, words, StdRng::seed_from_u64(settings.seed))?;

    print_solve_result(&result, verbose);
    if verbose {
        println!("Seed: {}", settings.seed);
    }
    Ok(())
}

fn run_stats_command(
    settings: &Settings,
    runs: usize,
    all_openings: bool,
    words: &[Word],
) -> Result<()> {
    let openings = if all_openings {
        preset_openings()
    } else {
        vec![(
            opening_label(&settings.opening_name, &settings.opening),
            settings.opening.clone(),
        )]
    };

    println!(
        "\n🎯 Playing {runs} games per opening against {} words (seed {})\n",
        words.len(),
        settings.seed
    );

    let mut config = StatsConfig::new(runs, settings.seed);
    config.filter_mode = settings.filter_mode;

    let reports = run_openings(words, &openings, config)?;
    for report in &reports {
        print_stats_report(report);
    }
    print_stats_comparison(&reports);
    Ok(())
}

fn run_simple_command(settings: &Settings, words: &[Word]) -> Result<()> {
    let summary = run_simple(settings.session(words)?)?;
    if summary.solved + summary.exhausted > 0 {
        println!(
            "Solved {} of {} games",
            summary.solved,
            summary.solved + summary.exhausted
        );
    }
    Ok(())
}

fn run_play_command(settings: &Settings, words: &[Word]) -> Result<()> {
    use wordle_sieve::interactive::{App, run_tui};

    let app = App::new(settings.session(words)?);
    run_tui(app)
}

//! Word Unscrambler - CLI
//!
//! Lists every dictionary word that can be made from the letters of a target word.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use unscrambler::{
    commands::{BenchmarkConfig, SolveConfig, run_benchmark, solve_word},
    dictionary::{Dictionary, loader::load_from_file},
    logging::init_logger,
    output::{print_benchmark_result, print_solve_result},
    solver::{DEFAULT_MAX_PERMUTATION_LEN, DEFAULT_THRESHOLD, Mode, SolverConfig, Unscrambler},
};

#[derive(Parser)]
#[command(
    name = "unscrambler",
    about = "Find every dictionary word that can be spelled from a target word's letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    solve: SolveArgs,

    #[command(flatten)]
    options: GlobalOptions,
}

#[derive(Args)]
struct SolveArgs {
    /// The target word to unscramble
    #[arg(default_value = "a")]
    word: String,

    /// Mode: 0 = permute, 1 = scan, 2 = auto (default); names also accepted
    #[arg(default_value = "2")]
    mode: String,
}

#[derive(Args)]
struct GlobalOptions {
    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Auto mode permutes targets shorter than this and scans the rest
    #[arg(short, long, global = true, default_value_t = DEFAULT_THRESHOLD)]
    threshold: usize,

    /// Check dictionary membership while generating permutations
    #[arg(long, global = true)]
    prune: bool,

    /// Longest target the unpruned permutation mode accepts
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_PERMUTATION_LEN)]
    max_permute_len: usize,

    /// Scan the dictionary in parallel
    #[arg(long, global = true)]
    parallel: bool,

    /// Lower-case the target and dictionary before matching
    #[arg(short = 'i', long, global = true)]
    ignore_case: bool,

    /// Words per output line
    #[arg(long, global = true, default_value = "10")]
    per_line: usize,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Unscramble a target word (default)
    Solve(SolveArgs),

    /// Compare mode timings on random dictionary words
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
///
/// A missing or unreadable file is fatal; an empty file is not.
fn load_dictionary(wordlist: &str, ignore_case: bool) -> Result<Dictionary> {
    let dictionary = match wordlist {
        "embedded" => Dictionary::embedded(),
        path => load_from_file(path).with_context(|| format!("Failed to load wordlist '{path}'"))?,
    };

    if dictionary.is_empty() {
        log::warn!("Dictionary is empty; no words can be found");
    }

    Ok(if ignore_case {
        dictionary.to_lowercase()
    } else {
        dictionary
    })
}

fn main() -> Result<()> {
    let Cli {
        command,
        solve,
        options,
    } = Cli::parse();

    init_logger(options.verbose);

    let dictionary = load_dictionary(&options.wordlist, options.ignore_case)?;
    log::debug!("Dictionary has {} entries", dictionary.len());

    let config = SolverConfig::default()
        .with_threshold(options.threshold)
        .with_prune(options.prune)
        .with_max_permutation_len(options.max_permute_len)
        .with_parallel_scan(options.parallel);
    let unscrambler = Unscrambler::new(&dictionary, config);

    match command.unwrap_or(Commands::Solve(solve)) {
        Commands::Solve(args) => run_solve_command(&args, &options, &unscrambler),
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(count, seed, &unscrambler);
            Ok(())
        }
    }
}

fn run_solve_command(
    args: &SolveArgs,
    options: &GlobalOptions,
    unscrambler: &Unscrambler,
) -> Result<()> {
    let mode = Mode::parse_or_auto(&args.mode);
    let target = if options.ignore_case {
        args.word.to_lowercase()
    } else {
        args.word.clone()
    };

    let result = solve_word(SolveConfig::new(target, mode), unscrambler)?;
    print_solve_result(&result, options.per_line);
    Ok(())
}

fn run_benchmark_command(count: usize, seed: Option<u64>, unscrambler: &Unscrambler) {
    println!("Running benchmark on {count} random words...");

    let config = BenchmarkConfig {
        seed,
        ..BenchmarkConfig::new(count)
    };
    let result = run_benchmark(unscrambler, &config);
    print_benchmark_result(&result);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_word_and_mode() {
        let cli = Cli::try_parse_from(["unscrambler", "tree", "1"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.solve.word, "tree");
        assert_eq!(cli.solve.mode, "1");
    }

    #[test]
    fn defaults_without_arguments() {
        let cli = Cli::try_parse_from(["unscrambler"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.solve.word, "a");
        assert_eq!(cli.solve.mode, "2");
        assert_eq!(cli.options.wordlist, "embedded");
    }

    #[test]
    fn global_option_before_benchmark() {
        let cli = Cli::try_parse_from(["unscrambler", "-w", "f", "benchmark", "-n", "2"]).unwrap();
        assert_eq!(cli.options.wordlist, "f");
        assert!(matches!(
            cli.command,
            Some(Commands::Benchmark { count: 2, seed: None })
        ));
    }

    #[test]
    fn global_flag_before_solve() {
        let cli = Cli::try_parse_from(["unscrambler", "--prune", "solve", "tree"]).unwrap();
        assert!(cli.options.prune);
        match cli.command {
            Some(Commands::Solve(args)) => {
                assert_eq!(args.word, "tree");
                assert_eq!(args.mode, "2");
            }
            _ => panic!("expected the solve subcommand"),
        }
    }

    #[test]
    fn global_option_after_subcommand() {
        let cli = Cli::try_parse_from([
            "unscrambler",
            "benchmark",
            "-n",
            "2",
            "--seed",
            "1",
            "-w",
            "f",
        ])
        .unwrap();
        assert_eq!(cli.options.wordlist, "f");
        assert!(matches!(
            cli.command,
            Some(Commands::Benchmark {
                count: 2,
                seed: Some(1)
            })
        ));
    }
}

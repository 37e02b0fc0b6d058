mod input;
mod puzzles;
mod test_runner;

use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;
use std::process;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use scan::parser::Grammar;

use crate::puzzles::{Day, PuzzleError, SolveOptions};

#[derive(Parser)]
#[command(name = "aoc", version, about = "Advent of Code puzzle runner")]
struct Cli {
    /// Disable colored error output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Solve a day's puzzle
    Run(RunArgs),

    /// List the available days
    List,

    /// Run .test.txt fixture files
    Test(TestArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Day to run, e.g. `day-3` or `3`
    day: String,

    /// Puzzle part
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,

    /// Instruction grammar for day-3 (mul-only, conditional)
    #[arg(short, long)]
    grammar: Option<Grammar>,

    /// Read this file instead of the day's input file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Use dev-input.txt instead of input.txt (also selected when DEV is set)
    #[arg(long)]
    dev: bool,

    /// Directory holding one sub-directory per day
    #[arg(long, env = "AOC_ROOT", default_value = ".")]
    root: PathBuf,

    /// Print each interpreter step to stderr (day-3)
    #[arg(long)]
    trace: bool,

    /// Dump the scanned instruction stream instead of solving (day-3)
    #[arg(long)]
    ast: bool,
}

#[derive(clap::Args)]
struct TestArgs {
    /// Path to a .test.txt file or directory containing them
    path: PathBuf,

    /// Run only fixtures for these days. Repeatable.
    #[arg(short, long)]
    day: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Run(run_args) => {
            if let Err(e) = do_run(run_args, cli.no_color) {
                eprintln!("error: {:#}", e);
                process::exit(1);
            }
        }
        Command::List => {
            for day in Day::ALL {
                println!("{}  {}", day, day.description());
            }
        }
        Command::Test(test_args) => {
            let days = match test_args
                .day
                .iter()
                .map(|d| d.parse::<Day>())
                .collect::<Result<Vec<_>, _>>()
            {
                Ok(days) => days,
                Err(e) => {
                    eprintln!("error: {}", e);
                    process::exit(1);
                }
            };
            let exit_code = test_runner::run_tests(&test_args.path, cli.no_color, &days);
            process::exit(exit_code);
        }
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn do_run(args: RunArgs, no_color: bool) -> Result<()> {
    let color_choice = if no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };

    let day: Day = args.day.parse().map_err(anyhow::Error::msg)?;
    if (args.ast || args.trace || args.grammar.is_some()) && day != Day::Day3 {
        bail!("--ast, --trace and --grammar only apply to day-3");
    }

    let path = match &args.input {
        Some(path) => path.clone(),
        None => {
            let dev = dev_mode(args.dev, env::var_os("DEV").as_deref());
            input::locate(&args.root, day, dev)?
        }
    };

    info!("Running {} part {}", day, args.part);
    let source = input::read_input(&path)?;

    // Set up codespan file database
    let mut files = SimpleFiles::new();
    let file_id = files.add(path.display().to_string(), source.clone());

    let writer = StandardStream::stderr(color_choice);
    let config = term::Config::default();

    // --ast: dump the instruction stream
    if args.ast {
        let grammar = args
            .grammar
            .unwrap_or(puzzles::day3::default_grammar(args.part));
        match puzzles::day3::parse(&source, file_id, grammar) {
            Ok(program) => println!("{:#?}", program),
            Err(error) => {
                emit_puzzle_error(&writer, &config, &files, &error);
                process::exit(1);
            }
        }
        return Ok(());
    }

    let mut stderr = io::stderr();
    let options = SolveOptions {
        part: args.part,
        grammar: args.grammar,
        trace: if args.trace {
            Some(&mut stderr as &mut dyn io::Write)
        } else {
            None
        },
    };

    match day.solve(&source, file_id, options) {
        Ok(answer) => println!("{}", answer),
        Err(error) => {
            emit_puzzle_error(&writer, &config, &files, &error);
            process::exit(1);
        }
    }

    Ok(())
}

/// Dev input is selected by `--dev` or by `DEV` being set to anything.
fn dev_mode(flag: bool, dev_var: Option<&OsStr>) -> bool {
    flag || dev_var.is_some()
}

fn emit_puzzle_error(
    writer: &StandardStream,
    config: &term::Config,
    files: &SimpleFiles<String, String>,
    error: &PuzzleError,
) {
    let diagnostic = match error {
        PuzzleError::Parse(err) => Some(err.to_diagnostic()),
        PuzzleError::Runtime(err) => err.span.as_ref().map(|span| {
            Diagnostic::error()
                .with_message(err.to_string())
                .with_labels(vec![Label::primary(err.source_id, span.clone())])
        }),
        PuzzleError::UnsupportedPart { .. } | PuzzleError::Overflow { .. } => None,
    };

    match diagnostic {
        Some(diagnostic) => {
            let _ = term::emit_to_write_style(&mut writer.lock(), config, files, &diagnostic);
        }
        None => eprintln!("error: {}", error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dev_var_presence_selects_dev_input() {
        assert!(dev_mode(false, Some(OsStr::new("1"))));
        assert!(dev_mode(false, Some(OsStr::new("0"))));
        assert!(dev_mode(false, Some(OsStr::new("false"))));
        assert!(dev_mode(false, Some(OsStr::new(""))));
        assert!(dev_mode(true, None));
        assert!(!dev_mode(false, None));
    }

    #[test]
    fn dev_flag_parses_without_a_value() {
        let cli = Cli::try_parse_from(["aoc", "run", "3", "--dev"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(args.dev);

        let cli = Cli::try_parse_from(["aoc", "run", "3"]).unwrap();
        let Command::Run(args) = cli.command else {
            panic!("expected run");
        };
        assert!(!args.dev);
    }
}

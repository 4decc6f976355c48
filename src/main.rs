use std::{fs, path::PathBuf, process::ExitCode};

use clap::Parser;
use numscript::{RunOptions, dump_tokens, run_with};
use tracing::Level;

/// numscript evaluates arithmetic expressions and variable assignments and
/// prints the final value of every variable.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script file to run.
    #[arg(default_value = "code.goc")]
    path: PathBuf,

    /// Evaluate this script text instead of reading a file.
    #[arg(short, long, value_name = "SCRIPT")]
    eval: Option<String>,

    /// Print the token stream instead of evaluating the script.
    #[arg(short, long)]
    tokens: bool,

    /// Increase log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt().with_max_level(level)
                             .with_writer(std::io::stderr)
                             .init();

    let script = match args.eval {
        Some(script) => script,
        None => match fs::read_to_string(&args.path) {
            Ok(script) => script,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", args.path.display());
                return ExitCode::FAILURE;
            },
        },
    };

    if args.tokens {
        return match dump_tokens(&script) {
            Ok(tokens) => {
                for token in tokens {
                    println!("{token}");
                }
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            },
        };
    }

    let options = RunOptions { trace_tokens: args.verbose >= 2 };
    match run_with(&script, options) {
        Ok(variables) => {
            for (name, value) in variables.sorted() {
                println!("{name} = {value} ({})", value.type_name());
            }
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

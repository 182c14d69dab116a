use std::{
    fs,
    io::{self, BufRead, Write},
};

use bounded_calc::run;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// bounded-calc evaluates a tiny calculator language with conditionals and
/// loops that never run more than ten times.
///
/// Without CONTENTS an interactive shell is started.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells bounded-calc to look at a file instead of a program. Every
    /// non-empty line of the file is run as its own program.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Logs the parsed tree and the result of every program.
    #[arg(short, long)]
    verbose: bool,

    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(io::stderr)
                             .init();

    match args.contents {
        Some(path) if args.file => {
            let script = fs::read_to_string(&path).unwrap_or_else(|_| {
                             eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                                       &path);
                             std::process::exit(1);
                         });

            for line in script.lines().filter(|line| !line.trim().is_empty()) {
                print_result(line);
            }
        },
        Some(program) => print_result(&program),
        None => {
            if let Err(e) = repl() {
                eprintln!("{e}");
            }
        },
    }
}

/// Runs one program and prints its value, if it has one.
fn print_result(source: &str) {
    if let Some(value) = run(source) {
        println!("{value}");
    }
}

/// Reads programs from standard input, one per line, until end of input.
fn repl() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "calc > ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            writeln!(stdout)?;
            return Ok(());
        }

        if line.trim().is_empty() {
            continue;
        }

        print_result(line.trim_end());
    }
}

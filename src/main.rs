use std::{
    fs::read_to_string,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Arg, ArgAction, Command};
use scanparse::{
    analyze,
    errors::errors::DriverError,
    parser::parser::LexicalErrorPolicy,
    report::display::{render_parse, render_scan},
};

fn main() -> ExitCode {
    let matches = Command::new("scanparse")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scans and parses a source file, reporting the grammar rule matched on each line")
        .arg(
            Arg::new("path")
                .help("Path to the source file; asked for on stdin when omitted")
                .index(1),
        )
        .arg(
            Arg::new("lexical-errors")
                .long("lexical-errors")
                .help("How many lexical errors of one line the parser reports")
                .value_parser(["all", "first-per-line"])
                .default_value("all"),
        )
        .arg(
            Arg::new("timings")
                .long("timings")
                .help("Print the time taken by each stage to stderr")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let policy = match matches.get_one::<String>("lexical-errors").map(String::as_str) {
        Some("first-per-line") => LexicalErrorPolicy::FirstPerLine,
        _ => LexicalErrorPolicy::All,
    };
    let timings = matches.get_flag("timings");

    let path = match matches.get_one::<String>("path") {
        Some(path) => Ok(PathBuf::from(path)),
        None => prompt_for_path(),
    };

    match path.and_then(|path| run(&path, policy, timings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            println!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn prompt_for_path() -> Result<PathBuf, DriverError> {
    print!("Enter input file name: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(PathBuf::from(line.trim()))
}

fn run(path: &Path, policy: LexicalErrorPolicy, timings: bool) -> Result<(), DriverError> {
    let start = Instant::now();
    let source =
        read_to_string(path).map_err(|source| DriverError::from_read(path.to_path_buf(), source))?;

    if timings {
        eprintln!("Read in {:?}", start.elapsed());
    }

    let analysis_start = Instant::now();
    let analysis = analyze(&source, policy);

    if timings {
        eprintln!("Analyzed in {:?}", analysis_start.elapsed());
        eprintln!("Total time: {:?}", start.elapsed());
    }

    print!("{}", render_scan(&analysis.tokens, &analysis.lexical_errors));

    match analysis.parsed {
        Some((rules, errors)) => {
            println!();
            print!("{}", render_parse(&rules, &errors));
        }
        None => println!("No tokens to parse"),
    }

    Ok(())
}

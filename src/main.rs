use clap::value_parser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::Path;
use tracing::{debug, Level};

use clfmt::formatting;
use clfmt::language::{KeywordCase, Layout, LoadingError, ParameterMetadata};
use clfmt::parsing;
use clfmt::rendering::{self, Identity, Terminal};

fn main() {
    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("clfmt")
        .version(VERSION)
        .propagate_version(true)
        .about("Parse, reassemble, and format CL command statements.")
        .disable_help_subcommand(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostic traces to standard error."),
        )
        .subcommand(
            Command::new("format")
                .about("Lay out the given CL source in fixed columns")
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_name("FILE")
                        .help("JSON file with layout settings; any setting not present keeps its default."),
                )
                .arg(
                    Arg::new("width")
                        .long("width")
                        .value_name("COLUMN")
                        .value_parser(value_parser!(usize))
                        .help("The right margin; no line will extend past this column."),
                )
                .arg(
                    Arg::new("case")
                        .long("case")
                        .value_parser(["upper", "lower", "preserve"])
                        .help("Case applied to command names and parameter keywords."),
                )
                .arg(
                    Arg::new("raw-control-chars")
                        .short('R')
                        .long("raw-control-chars")
                        .action(ArgAction::SetTrue)
                        .help("Emit ANSI escape codes for syntax highlighting even if output is redirected to a pipe or file."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the CL source you want to format. Use - to read standard input."),
                ),
        )
        .subcommand(
            Command::new("assemble")
                .about("Rebuild each statement from its parameter values in canonical order")
                .arg(
                    Arg::new("metadata")
                        .long("metadata")
                        .value_name("FILE")
                        .required(true)
                        .help("JSON file describing the parameters of the commands being assembled."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the CL source. Use - to read standard input."),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the parameter values recovered from each statement")
                .arg(
                    Arg::new("metadata")
                        .long("metadata")
                        .value_name("FILE")
                        .help("JSON file describing the parameters of the commands being inspected."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the CL source. Use - to read standard input."),
                ),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match matches.subcommand() {
        Some(("format", submatches)) => run_format(submatches),
        Some(("assemble", submatches)) => run_assemble(submatches),
        Some(("inspect", submatches)) => run_inspect(submatches),
        Some(_) => {
            println!("No valid subcommand was used")
        }
        None => {
            println!("usage: clfmt [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn run_format(submatches: &ArgMatches) {
    let filename = filename(submatches);

    let mut layout = match submatches.get_one::<String>("config") {
        Some(config) => parsing::load_layout(Path::new(config)).unwrap_or_else(|error| fail(error)),
        None => Layout::default(),
    };

    if let Some(width) = submatches.get_one::<usize>("width") {
        layout.right_margin = *width;
    }

    if let Some(case) = submatches.get_one::<String>("case") {
        layout.case = match case.as_str() {
            "lower" => KeywordCase::Lower,
            "preserve" => KeywordCase::Preserve,
            _ => KeywordCase::Upper,
        };
    }

    debug!(?layout);

    let content = read(filename);

    let raw_output = submatches.get_flag("raw-control-chars");
    let highlight = raw_output || std::io::stdout().is_terminal();

    for section in parsing::sections(&content) {
        let lines = formatting::format_section(&section, &layout);

        let result = if highlight {
            rendering::render(&Terminal, &lines, layout.continuation)
        } else {
            rendering::render(&Identity, &lines, layout.continuation)
        };
        print!("{}", result);
    }
}

fn run_assemble(submatches: &ArgMatches) {
    let filename = filename(submatches);
    let metadata = metadata(submatches);
    let content = read(filename);

    for text in parsing::statements(&content) {
        let statement = parsing::parse(&text);
        let values = parsing::values::extract(&statement, &metadata);
        let present = parsing::values::keywords(&statement);

        let result = formatting::assemble(statement.command, &metadata, &values, &present);
        match statement.label {
            Some(label) => println!("{}: {}", label, result),
            None => println!("{}", result),
        }
    }
}

fn run_inspect(submatches: &ArgMatches) {
    let filename = filename(submatches);
    let metadata = metadata(submatches);
    let content = read(filename);

    for text in parsing::statements(&content) {
        let statement = parsing::parse(&text);
        let values: BTreeMap<_, _> = parsing::values::extract(&statement, &metadata)
            .into_iter()
            .collect();

        match serde_json::to_string_pretty(&values) {
            Ok(json) => println!("{}: {}", statement.command, json),
            Err(error) => {
                eprintln!("{}: {}", "error".bright_red(), error);
                std::process::exit(1);
            }
        }
    }
}

fn filename(submatches: &ArgMatches) -> &Path {
    match submatches.get_one::<String>("filename") {
        Some(filename) => Path::new(filename),
        None => {
            eprintln!("{}: No filename given", "error".bright_red());
            std::process::exit(1);
        }
    }
}

fn metadata(submatches: &ArgMatches) -> Vec<ParameterMetadata> {
    match submatches.get_one::<String>("metadata") {
        Some(file) => parsing::load_metadata(Path::new(file)).unwrap_or_else(|error| fail(error)),
        None => Vec::new(),
    }
}

fn read(filename: &Path) -> String {
    if filename.to_str() == Some("-") {
        return std::io::read_to_string(std::io::stdin()).unwrap_or_else(|error| {
            fail(LoadingError {
                problem: "Failed reading".to_string(),
                details: error.to_string(),
                filename,
            })
        });
    }

    parsing::load(filename).unwrap_or_else(|error| fail(error))
}

fn fail(error: LoadingError) -> ! {
    eprintln!("{}: {}", "error".bright_red(), error);
    std::process::exit(1);
}

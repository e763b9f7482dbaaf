/**
 * Angle Bracket Polyfill CLI
 *
 * Rewrites serialized template documents, turning angle-bracket component
 * invocations into curly invocations.
 */
use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;
use std::process;

use angle_bracket_polyfill_cli::config::{expand_inputs, OutputFormat, TransformOptions};
use angle_bracket_polyfill_cli::logging::init_logging;
use angle_bracket_polyfill_cli::perform_transform::main_transform;

fn main() {
    let matches = Command::new("angle-bracket-polyfill")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rewrite angle-bracket invocations in template documents")
        .arg(
            Arg::new("inputs")
                .value_name("INPUT")
                .num_args(1..)
                .required(true)
                .help("Template document JSON files or glob patterns"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .default_value("json")
                .value_parser(["json", "template", "hbs"])
                .help("Output format: the rewritten document as json, or template text"),
        )
        .arg(
            Arg::new("out-dir")
                .short('o')
                .long("out-dir")
                .value_name("DIR")
                .help("Write one file per input into DIR instead of stdout"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .action(ArgAction::SetTrue)
                .help("Pretty-print JSON output"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log filter (overrides RUST_LOG), e.g. debug or angle_bracket_polyfill=trace"),
        )
        .get_matches();

    init_logging(matches.get_one::<String>("log-level").map(String::as_str));

    let format = match matches.get_one::<String>("format").map(|f| f.parse::<OutputFormat>()) {
        Some(Ok(format)) => format,
        Some(Err(error)) => {
            eprintln!("Error: {}", error);
            process::exit(2);
        }
        None => OutputFormat::default(),
    };

    let options = TransformOptions {
        format,
        out_dir: matches.get_one::<String>("out-dir").map(PathBuf::from),
        pretty: matches.get_flag("pretty"),
    };

    let patterns: Vec<String> = matches
        .get_many::<String>("inputs")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let inputs = match expand_inputs(&patterns) {
        Ok(inputs) => inputs,
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    };

    process::exit(main_transform(&inputs, &options));
}

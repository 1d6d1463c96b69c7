use std::{fs, process::ExitCode};

use boolex::{
    config::{Options, ParenPolicy},
    evaluate_script,
};
use clap::{ArgAction, Parser};
use log::LevelFilter;

/// boolex evaluates boolean logic expressions such as `3 > 4 | 1 < 2`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells boolex to read expressions from a file, one per line.
    #[arg(short, long)]
    file: bool,

    /// Also print the postfix form of every expression.
    #[arg(short, long)]
    postfix: bool,

    /// How unpaired parentheses are treated: `lenient` or `strict`.
    #[arg(long, default_value_t = ParenPolicy::Lenient)]
    parens: ParenPolicy,

    /// Log more. `-v` shows the postfix trace, `-vv` every reduction.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(level).parse_default_env().init();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let options = Options::default().with_paren_policy(args.parens);
    let mut failed = false;

    for evaluation in evaluate_script(&script, args.file, &options) {
        let prefix = if args.file { format!("{}: ", evaluation.line) } else { String::new() };

        if args.postfix
           && let Some(postfix) = &evaluation.postfix
        {
            println!("{prefix}{postfix}");
        }

        match evaluation.result {
            Ok(value) => println!("{prefix}{value}"),
            Err(e) => {
                failed = true;
                eprintln!("{prefix}{e}");
            },
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

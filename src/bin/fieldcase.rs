//! CLI entry point: case selected fields of each stdin line.
//!
//! Usage:
//!   fieldcase -targets 2 -case kebab < input.txt
//!   fieldcase -delim , -targets 1,3 -case upper < input.csv
//!
//! Exit status is 0 on success and 1 on any configuration, casing, read or
//! write error.

use clap::Parser;
use fieldcase::{
    CaseStyle, Cli, Config, LineTransformer, case_list, execute, normalize_args, usage,
};
use log::debug;
use std::env;
use std::io;
use std::process;

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}

fn main() {
    setup_logging();

    let cli = match Cli::try_parse_from(normalize_args(env::args_os())) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures.
            let mut code = if e.use_stderr() { 1 } else { 0 };
            if let Err(err) = e.print() {
                eprintln!("Error writing usage: {err}");
                code = 1;
            }
            process::exit(code);
        }
    };

    if cli.list_cases {
        for style in CaseStyle::all() {
            println!("{style}");
        }
        return;
    }

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!();
            eprint!("{}", usage());
            if e.wants_case_list() {
                eprintln!();
                eprint!("{}", case_list());
            }
            process::exit(1);
        }
    };

    debug!(
        "delimiter={:?} targets={:?} case={}",
        config.delimiter, config.targets, config.style
    );

    let transformer = LineTransformer::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();

    match execute(&transformer, stdin.lock(), &mut stdout.lock()) {
        Ok(count) => {
            if cli.verbose {
                eprintln!("Lines: {count} processed");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
